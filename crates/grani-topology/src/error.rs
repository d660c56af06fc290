//! Error types for the topology crate.

use thiserror::Error;

/// Errors that can occur when generating or constructing topologies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopologyError {
    /// Requested topology family is not recognized.
    #[error("Unknown topology family '{0}'")]
    UnknownFamily(String),

    /// Requested qubit count is below the supported minimum.
    #[error("Minimum qubit count must be at least 1, got {0}")]
    InvalidQubitCount(u32),

    /// Edge references a node outside the graph.
    #[error("Edge ({0}, {1}) references a node outside 0..{2}")]
    EdgeOutOfRange(u32, u32, u32),

    /// Self-loops are not allowed in a coupling graph.
    #[error("Self-loop on qubit {0} is not a valid coupling")]
    SelfLoop(u32),

    /// Realizing the request would exceed the 32-bit qubit index space.
    #[error("Realized qubit count for request {0} overflows u32")]
    QubitCountOverflow(u32),
}

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;
