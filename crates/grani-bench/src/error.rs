//! Error types for ecosystem dispatch.

use thiserror::Error;

use grani_device::{DeviceError, ValidationError};
use grani_topology::TopologyError;

/// Result type for dispatch operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors surfaced by the dispatch layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// Ecosystem name not recognized.
    #[error("unsupported ecosystem '{0}'")]
    UnsupportedEcosystem(String),

    /// Circuit and handle belong to different ecosystems.
    #[error("cannot validate a {circuit} circuit against a {handle} handle")]
    EcosystemMismatch {
        /// Ecosystem of the circuit.
        circuit: &'static str,
        /// Ecosystem of the handle.
        handle: &'static str,
    },

    /// Topology generation failure.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Device model failure.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Circuit failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Qiskit adapter failure.
    #[error(transparent)]
    Qiskit(#[from] grani_adapter_qiskit::QiskitError),

    /// Tket adapter failure.
    #[error(transparent)]
    Tket(#[from] grani_adapter_tket::TketError),

    /// BQSKit adapter failure.
    #[error(transparent)]
    Bqskit(#[from] grani_adapter_bqskit::BqskitError),

    /// Staq adapter failure.
    #[error(transparent)]
    Staq(#[from] grani_adapter_staq::StaqError),
}
