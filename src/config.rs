use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::EngineConfig;
use crate::types::TICK_INTERVAL_MS;

/// Parse runner arguments (program name already stripped).
///
/// Supported: `--tick-ms <N>` (gravity interval, default 400) and
/// `--seed <N>` (piece order, default derived from the clock).
pub fn parse_args(args: &[String]) -> Result<EngineConfig> {
    let mut tick_interval_ms = TICK_INTERVAL_MS;
    let mut seed: Option<u32> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--tick-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                tick_interval_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                if tick_interval_ms == 0 {
                    return Err(anyhow!("--tick-ms must be greater than zero"));
                }
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(EngineConfig {
        tick_interval_ms,
        seed: seed.unwrap_or_else(clock_seed),
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
