//! Error types for seoscore-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised at the analysis boundary.
///
/// The analyzers themselves are total; these only describe input that
/// never reaches them.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The payload is not a valid analysis input (bad JSON, a missing
    /// field, or a field of the wrong type).
    #[error("invalid analysis input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The payload exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected payload in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
