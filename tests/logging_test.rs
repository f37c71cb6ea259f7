//! Which tick events reach the log, and at which level.

use std::io;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use blub::headless::{self, HeadlessConfig, InputScript};

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn tick_records() -> Vec<(Level, String)> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, msg)| msg.starts_with("tick "))
        .cloned()
        .collect()
}

#[test]
fn test_tick_events_are_logged_at_their_levels() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Catch the fish once at tick 200; it escapes at tick 616.
    let config = HeadlessConfig {
        ticks: 616,
        script: InputScript::parse("down:20,none:1000").unwrap(),
        every: 1000,
    };
    let sim = headless::run(&config, &mut io::sink()).unwrap();
    assert_eq!(sim.high_score(), 1);

    assert_eq!(
        tick_records(),
        vec![
            (Level::Trace, "tick 200: net hit, score 1".to_string()),
            (Level::Debug, "tick 200: new high score 1".to_string()),
            (
                Level::Info,
                "tick 616: fish escaped, round over with score 1 (high score 1)".to_string()
            ),
        ]
    );

    let all = RECORDS.lock().unwrap();
    assert!(all
        .iter()
        .any(|(level, msg)| *level == Level::Info && msg.starts_with("headless run finished")));
}
