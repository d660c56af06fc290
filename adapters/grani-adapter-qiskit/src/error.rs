//! Error types for the Qiskit adapter.

use thiserror::Error;

/// Result type for Qiskit adapter operations.
pub type QiskitResult<T> = Result<T, QiskitError>;

/// Errors that can occur when adapting a device model for Qiskit.
#[derive(Debug, Error)]
pub enum QiskitError {
    /// A basis gate has no Qiskit standard-gate counterpart.
    #[error("qiskit does not recognize gate '{gate}'")]
    UnsupportedGate {
        /// The offending gate name.
        gate: String,
    },
}
