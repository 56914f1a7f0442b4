//! File-based tracing setup.
//!
//! The terminal is owned by the UI, so log output goes to
//! `<data dir>/countup/countup.log`. The filter comes from `RUST_LOG` and
//! defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;

/// Log file name inside the data directory.
const LOG_FILE: &str = "countup.log";

/// Default filter when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Path of the log file. Nothing is created.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn log_path() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| eyre!("Could not determine local data directory"))?;
    Ok(path_in(base))
}

fn path_in(base: PathBuf) -> PathBuf {
    base.join(APP_NAME).join(LOG_FILE)
}

/// Install the global subscriber writing to the log file, creating its
/// directory.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already
/// installed.
pub fn init() -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))?;

    tracing::info!("logging to {}", path.display());
    Ok(path)
}
