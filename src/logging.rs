//! Logging setup (`log` facade, `env_logger` backend).
//!
//! The interactive binary owns the terminal, so it can only log to a file.
//! Headless runs keep stdout for JSON and log to stderr.

use std::fs::OpenOptions;

use anyhow::{anyhow, Result};
use env_logger::{Builder, Target, WriteStyle};

use crate::config::HostConfig;
use crate::core::{Simulation, TickReport};

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Off,
    Stderr,
    File(String),
}

impl LogSink {
    pub fn choose(config: &HostConfig, headless: bool) -> Self {
        match &config.log_path {
            Some(path) => LogSink::File(path.clone()),
            None if headless => LogSink::Stderr,
            None => LogSink::Off,
        }
    }
}

/// Install the global logger. Call once, before the first log record.
pub fn init(config: &HostConfig, headless: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.log_filter);

    match LogSink::choose(config, headless) {
        LogSink::Off => return Ok(()),
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| anyhow!("log: cannot open {}: {}", path, e))?;
            builder.target(Target::Pipe(Box::new(file)));
            builder.write_style(WriteStyle::Never);
        }
    }

    builder
        .try_init()
        .map_err(|e| anyhow!("log: logger already installed: {}", e))
}

/// Log the notable events of one tick.
pub fn log_tick(tick: u64, report: &TickReport, sim: &Simulation) {
    if report.round_reset() {
        log::info!(
            "tick {}: fish escaped, round over with score {} (high score {})",
            tick,
            report.round_score,
            sim.high_score()
        );
    }
    if report.net_hit {
        log::trace!("tick {}: net hit, score {}", tick, sim.score());
    }
    if report.new_high_score {
        log::debug!("tick {}: new high score {}", tick, sim.high_score());
    }
}
