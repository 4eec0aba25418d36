//! Installs the process-wide `tracing` subscriber.
//!
//! The library only emits events through `tracing`; hosts that want them on
//! stdout call `init` once at startup with `BoardConfig::log_level`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use tracing::Level;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    #[error("subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install a `fmt` subscriber capped at `level` (`trace`..`error`).
///
/// # Errors
///
/// Returns `InvalidLevel` for an unknown level name and `AlreadyInstalled`
/// if a global subscriber was set earlier.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let level: Level = level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))
}
