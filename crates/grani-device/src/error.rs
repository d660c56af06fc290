//! Error types for device-model construction.

use thiserror::Error;

use grani_topology::TopologyError;

/// Errors that can occur when building a device model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// No basis gate is a recognized two-qubit gate.
    #[error("No two-qubit gate found: none of {recognized:?} is in the basis set")]
    NoTwoQubitGate {
        /// The recognized two-qubit gate names that were searched for.
        recognized: Vec<String>,
    },

    /// More than one basis gate is a recognized two-qubit gate.
    ///
    /// Only one two-qubit gate type is supported per device, so that
    /// cross-ecosystem comparison stays well-defined.
    #[error("Only one two-qubit gate type is supported, found {candidates:?}")]
    AmbiguousTwoQubitGate {
        /// The conflicting two-qubit gate names, sorted.
        candidates: Vec<String>,
    },

    /// Coupling graph size disagrees with the declared qubit count.
    #[error("Coupling graph covers {graph} qubits but the device declares {device}")]
    QubitCountMismatch {
        /// Qubit count of the coupling graph.
        graph: u32,
        /// Declared device qubit count.
        device: u32,
    },

    /// Topology generation or coupling construction failed.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Result type for device-model operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
