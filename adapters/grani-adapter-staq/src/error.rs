//! Error types for the staq adapter.

use thiserror::Error;

/// Result type for staq adapter operations.
pub type StaqResult<T> = Result<T, StaqError>;

/// Errors that can occur when adapting a device model for staq.
#[derive(Debug, Error)]
pub enum StaqError {
    /// Device file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Device file could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fidelity value outside `[0, 1]` was supplied.
    #[error("fidelity {value} is outside [0, 1]")]
    InvalidFidelity {
        /// The offending value.
        value: f64,
    },
}
