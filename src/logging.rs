//! Log setup for the binaries.
//!
//! The terminal is the display, so logs go to a file instead. Set
//! `GRIDGAME_LOG=/path/to/file` to enable them and `RUST_LOG` to filter.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "GRIDGAME_LOG";

/// Install a file subscriber if `GRIDGAME_LOG` is set.
///
/// Returns whether logging was enabled.
pub fn init() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("a log subscriber is already installed")?;
    Ok(true)
}
