//! Common error types for namescreen I/O and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Common error type for namescreen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Blacklist or noise source could not be read
    #[error("source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid screening configuration
    #[error("configuration error: {0}")]
    Config(#[from] namescreen_core::ConfigError),
}

/// Result type alias using namescreen Error.
pub type Result<T> = std::result::Result<T, Error>;
