//! Logging bootstrap.
//!
//! The portal owns the terminal while it runs, so logs go to daily files
//! under ${MERIDIAN_HOME}/logs instead of stdout. Filtering is controlled
//! by the MERIDIAN_LOG environment variable (defaults to `info`).

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "MERIDIAN_LOG";

/// Initializes file-based logging.
///
/// Returns the worker guard; dropping it flushes and stops the background
/// writer, so the caller must keep it alive for the process lifetime.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "meridian.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
