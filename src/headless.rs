//! Headless runner: drives the simulation without a terminal and prints JSON
//! observations, one per line.
//!
//! ```text
//! blub headless --ticks 600 --script down:30,none:10,up:30 --every 10
//! ```

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{SimSnapshot, Simulation, TickReport};
use crate::logging::log_tick;
use crate::types::NetInput;

pub const DEFAULT_TICKS: u64 = 600;

/// Repeating sequence of held-key states, one entry per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputScript {
    segments: Vec<(NetInput, u32)>,
    period: u64,
}

impl InputScript {
    /// Parse `KEY:COUNT[,KEY:COUNT...]`; a bare `KEY` means one tick.
    pub fn parse(s: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for part in s.split(',').map(str::trim) {
            if part.is_empty() {
                return Err(anyhow!("headless: empty segment in --script: {:?}", s));
            }
            let (key, count) = match part.split_once(':') {
                Some((key, count)) => {
                    let count = count
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| anyhow!("headless: invalid tick count in --script: {}", part))?;
                    (key.trim(), count)
                }
                None => (part, 1),
            };
            let input = NetInput::from_str(key)
                .ok_or_else(|| anyhow!("headless: unknown key set in --script: {}", key))?;
            segments.push((input, count));
        }

        let period = segments.iter().map(|&(_, n)| n as u64).sum();
        Ok(Self { segments, period })
    }

    /// Held keys for the `index`-th tick (0-based); the script wraps around.
    pub fn input_at(&self, index: u64) -> NetInput {
        let mut pos = index % self.period;
        for &(input, count) in &self.segments {
            if pos < count as u64 {
                return input;
            }
            pos -= count as u64;
        }
        NetInput::NONE
    }
}

impl Default for InputScript {
    fn default() -> Self {
        Self {
            segments: vec![(NetInput::NONE, 1)],
            period: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub ticks: u64,
    pub script: InputScript,
    /// Emit an observation every `every` ticks (and always for the last tick).
    pub every: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            script: InputScript::default(),
            every: 1,
        }
    }
}

/// One JSON line of headless output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Observation {
    pub tick: u64,
    #[serde(flatten)]
    pub state: SimSnapshot,
    pub round_reset: bool,
    pub net_hit: bool,
}

/// Parse `headless [--ticks N] [--script S] [--every K]`.
///
/// Returns `Ok(None)` when the first argument is not `headless`.
pub fn parse_headless_args(args: &[String]) -> Result<Option<HeadlessConfig>> {
    if args.is_empty() || args[0] != "headless" {
        return Ok(None);
    }

    let mut config = HeadlessConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --ticks"))?;
                config.ticks = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("headless: invalid --ticks value: {}", v))?;
            }
            "--script" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --script"))?;
                config.script = InputScript::parse(v)?;
            }
            "--every" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --every"))?;
                config.every = v
                    .parse::<u64>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| anyhow!("headless: invalid --every value: {}", v))?;
            }
            other => {
                return Err(anyhow!("headless: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

/// Run the simulation for `config.ticks` ticks, writing observations to `out`.
///
/// Returns the final simulation state.
pub fn run<W: Write>(config: &HeadlessConfig, out: &mut W) -> Result<Simulation> {
    let mut sim = Simulation::new();
    log::info!(
        "headless run: {} ticks, emitting every {}",
        config.ticks,
        config.every
    );

    for tick in 1..=config.ticks {
        let report: TickReport = sim.update(config.script.input_at(tick - 1));
        log_tick(tick, &report, &sim);

        if tick % config.every == 0 || tick == config.ticks {
            let obs = Observation {
                tick,
                state: sim.snapshot(),
                round_reset: report.round_reset(),
                net_hit: report.net_hit,
            };
            serde_json::to_writer(&mut *out, &obs)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;

    log::info!(
        "headless run finished: score {}, high score {}",
        sim.score(),
        sim.high_score()
    );
    Ok(sim)
}
