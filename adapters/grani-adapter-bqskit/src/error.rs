//! Error types for the BQSKit adapter.

use thiserror::Error;

/// Result type for BQSKit adapter operations.
pub type BqskitResult<T> = Result<T, BqskitError>;

/// Errors that can occur when adapting a device model for BQSKit.
#[derive(Debug, Error)]
pub enum BqskitError {
    /// A basis gate has no BQSKit gate counterpart.
    #[error("bqskit has no gate for '{gate}'")]
    UnsupportedGate {
        /// The offending gate name.
        gate: String,
    },
}
