//! Configuration error types

use thiserror::Error;

/// Errors raised while building a screening configuration.
///
/// All of these are detected before any comparison runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Match threshold outside the 0-100 percentage range
    #[error("match threshold must be within 0..=100, got {0}")]
    ThresholdOutOfRange(i64),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
