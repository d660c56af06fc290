//! Grani adapter for the Qiskit ecosystem.
//!
//! Renders a canonical device model as a Qiskit backend: the OpenQASM
//! gate-name basis set, a directed coupling map (both orientations of
//! every edge), and the standard backend configuration record. The
//! paired validator checks transpiled circuits for basis-set and
//! connectivity compliance.
//!
//! Gate identifiers are Qiskit's lowercase OpenQASM names, so the
//! resolved two-qubit gate carries over from the model unchanged.
//!
//! | Model piece      | Qiskit rendering                               |
//! |------------------|------------------------------------------------|
//! | basis gates      | `basis_gates` list, names validated as standard |
//! | coupling graph   | directed `coupling_map`, absent for all-to-all |
//! | two-qubit gate   | gate name string                               |
//!
//! # Example
//!
//! ```
//! use grani_adapter_qiskit::{QiskitAdapter, QiskitCircuit, QiskitInstruction, validate_circuit};
//! use grani_device::{DeviceModel, EcosystemAdapter, RECOGNIZED_TWO_QUBIT_GATES};
//! use grani_topology::TopologyFamily;
//!
//! let model = DeviceModel::flexible(
//!     4,
//!     TopologyFamily::Linear,
//!     ["id", "rz", "sx", "x", "cx"],
//!     RECOGNIZED_TWO_QUBIT_GATES,
//! )
//! .unwrap();
//! let backend = QiskitAdapter.adapt(&model).unwrap();
//!
//! let mut circuit = QiskitCircuit::new();
//! circuit.push(QiskitInstruction::new("cx", [0, 1]));
//! assert!(validate_circuit(&circuit, &backend).is_ok());
//! ```

mod backend;
mod circuit;
mod error;
mod gates;
mod validation;

pub use backend::{BackendConfiguration, DEFAULT_MAX_SHOTS, QiskitAdapter, QiskitBackend};
pub use circuit::{QiskitCircuit, QiskitInstruction};
pub use error::{QiskitError, QiskitResult};
pub use gates::{STANDARD_GATES, is_standard_gate};
pub use validation::validate_circuit;
