//! Logger setup.
//!
//! The games own the terminal (raw mode, alternate screen), so log lines on
//! stderr would tear the frame. `ARCADE_LOG_PATH` sends them to a file
//! instead; `ARCADE_LOG` sets the filter (default `warn`).

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_FILTER_VAR: &str = "ARCADE_LOG";
pub const LOG_PATH_VAR: &str = "ARCADE_LOG_PATH";

/// Install the global logger. Safe to call once per process.
pub fn init() -> Result<()> {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_FILTER_VAR, "warn"));

    if let Some(path) = std::env::var(LOG_PATH_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("cannot open log file {}", path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already installed")?;
    Ok(())
}
