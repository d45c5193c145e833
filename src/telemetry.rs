//! src/telemetry.rs
//!
//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so logs can only go to a file. Nothing
//! is installed unless `LINE_CHART_LOG` names one; `RUST_LOG` filters.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "LINE_CHART_LOG";

/// Install a subscriber appending to the file named by `LINE_CHART_LOG`.
///
/// Returns `Ok(false)` when the variable is unset or a global subscriber
/// already exists.
pub fn init_from_env() -> std::io::Result<bool> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => init_file_tracing(Path::new(&path)),
        _ => Ok(false),
    }
}

pub fn init_file_tracing(path: &Path) -> std::io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();
    Ok(installed)
}
