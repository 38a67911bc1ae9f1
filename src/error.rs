//! Configuration error types.
//!
//! The simulation itself has no recoverable errors: entity preconditions are
//! asserted and a violation aborts the caller. Loading tuning or settings
//! data is the one place where bad input is expected and reported.

use thiserror::Error;

/// Error loading or validating [`crate::Tuning`] or [`crate::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the target type.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds a value the engine cannot run with.
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: String,
    },
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
