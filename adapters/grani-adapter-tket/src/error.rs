//! Error types for the Tket adapter.

use thiserror::Error;

/// Result type for Tket adapter operations.
pub type TketResult<T> = Result<T, TketError>;

/// Errors that can occur when adapting a device model for Tket.
#[derive(Debug, Error)]
pub enum TketError {
    /// A basis gate has no Tket `OpType` counterpart.
    #[error("tket has no OpType for gate '{gate}'")]
    UnsupportedGate {
        /// The offending gate name.
        gate: String,
    },

    /// Calibration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Calibration file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
