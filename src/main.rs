//! Terminal fish-catching runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and the
//! framebuffer renderer from `blub::term`. `blub headless ...` runs the
//! simulation without a terminal and prints JSON observations instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blub::config::HostConfig;
use blub::core::Simulation;
use blub::headless::{self, parse_headless_args};
use blub::input::{should_quit, HeldKeys};
use blub::logging::{self, log_tick};
use blub::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(headless_config) = parse_headless_args(&args)? {
        logging::init(&config, true)?;
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        headless::run(&headless_config, &mut out)?;
        return Ok(());
    }

    logging::init(&config, false)?;
    log::info!("starting: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &HostConfig) -> Result<()> {
    let mut sim = Simulation::new();

    let release_timeout = if term.reports_key_release() {
        None
    } else {
        Some(config.key_release_ms)
    };
    log::debug!(
        "key release events: {}, auto-release timeout: {:?}, repeat delay: {}ms",
        term.reports_key_release(),
        release_timeout,
        config.key_repeat_delay_ms
    );
    let mut keys = HeldKeys::new()
        .with_key_release_timeout_ms(release_timeout)
        .with_key_repeat_delay_ms(config.key_repeat_delay_ms);

    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut tick: u64 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            break;
                        }
                        keys.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        keys.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                Event::FocusLost => keys.reset(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            tick += 1;
            let report = sim.update(keys.sample());
            log_tick(tick, &report, &sim);
        }
    }

    log::info!(
        "quit after {} ticks, high score {}",
        tick,
        sim.high_score()
    );
    Ok(())
}
