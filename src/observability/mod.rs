//! Logging setup
//!
//! Every subsystem logs through `tracing` macros. This module only installs
//! the process-wide subscriber:
//!
//! - Human-readable lines on stderr, so stdout stays clean for `query` output
//! - Level taken from configuration, overridden by `RUST_LOG` when set
//!
//! Error codes:
//! - THEATRE_OBSERVABILITY_FAILED (bad filter directive or subscriber already set)

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Logging setup error
#[derive(Debug)]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        "THEATRE_OBSERVABILITY_FAILED"
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code(), self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn filter_for(level: &str) -> ObservabilityResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| ObservabilityError::new(format!("invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(level: &str) -> ObservabilityResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ObservabilityError::new(format!("logging already initialized: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ObservabilityError::new("test message");
        let display = format!("{}", err);
        assert!(display.contains("THEATRE_OBSERVABILITY_FAILED"));
        assert!(display.contains("test message"));
    }

    #[test]
    fn test_directive_filter_accepted() {
        assert!(EnvFilter::try_new("vtheatre=debug,tower_http=info").is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging("warn");
        assert!(init_logging("warn").is_err());
    }
}
