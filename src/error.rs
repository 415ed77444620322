//! Error types for the posture mood estimator.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Frame stream parsing error
    #[error("Frame parse error: {0}")]
    ParseError(String),

    /// Sound or notification dispatch failed
    #[error("Effects error: {0}")]
    EffectsError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
