//! Runtime dispatch over the per-ecosystem device adapters.
//!
//! The adapter crates are strongly typed; benchmark drivers usually
//! select both the topology family and the compiler ecosystem from
//! strings. This crate parses those strings, generates the topology,
//! adapts the canonical device model, and routes validation to the
//! right adapter, with mismatched circuit/handle pairings rejected.
//!
//! | Ecosystem | Handle               | Circuit         |
//! |-----------|----------------------|-----------------|
//! | `qiskit`  | `QiskitBackend`      | `QiskitCircuit` |
//! | `tket`    | `TketBackend`        | `TketCircuit`   |
//! | `bqskit`  | `MachineModel`       | `BqskitCircuit` |
//! | `staq`    | `StaqBackend` (file) | `StaqCircuit`   |
//!
//! # Example
//!
//! ```
//! use grani_bench::{Ecosystem, adapt, generate_topology};
//! use grani_device::{DeviceModel, DEFAULT_BASIS_GATES, RECOGNIZED_TWO_QUBIT_GATES};
//! use grani_topology::TopologyFamily;
//!
//! let topology = generate_topology(100, "square").unwrap();
//! assert_eq!(topology.num_qubits, 100);
//!
//! let model = DeviceModel::flexible(
//!     100,
//!     TopologyFamily::Square,
//!     DEFAULT_BASIS_GATES.iter().copied(),
//!     RECOGNIZED_TWO_QUBIT_GATES,
//! )
//! .unwrap();
//! let handle = adapt(&model, "qiskit".parse::<Ecosystem>().unwrap()).unwrap();
//! assert_eq!(handle.ecosystem(), Ecosystem::Qiskit);
//! ```

mod dispatch;
mod ecosystem;
mod error;

pub use dispatch::{NativeCircuit, NativeHandle, adapt, validate};
pub use ecosystem::Ecosystem;
pub use error::{BenchError, BenchResult};

use grani_topology::{GeneratedTopology, TopologyFamily, generate};

/// Generate a topology from a family name string.
///
/// Convenience for drivers that carry the family as text; the name must
/// parse as a [`TopologyFamily`].
pub fn generate_topology(min_qubits: u32, family: &str) -> BenchResult<GeneratedTopology> {
    let family: TopologyFamily = family.parse()?;
    Ok(generate(min_qubits, family)?)
}
