//! Crate-level error types.
//!
//! [`ZonixError`] unifies every error source (configuration, command line,
//! receipt calculation, settings, filesystem, JSON) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

use crate::receipt::calculator::CalculationError;
use crate::settings::SettingsError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZonixError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum ZonixError {
    /// An environment variable held a value that could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Command-line arguments were missing, malformed or unrecognized.
    #[error("usage error: {0}")]
    Usage(String),

    /// Trade inputs were rejected by the receipt calculator.
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// A settings update failed validation.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
