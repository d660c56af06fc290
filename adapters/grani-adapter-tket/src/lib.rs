//! Grani adapter for the Tket ecosystem.
//!
//! Tket identifies operations by typed `OpType` values rather than gate
//! name strings, so adaptation translates the device basis set up front
//! via uppercase-style name lookup. The handle carries the primitive
//! gate set, an `Rz` support flag, and the resolved two-qubit gate as
//! an `OpType`.
//!
//! Compilation passes that want calibration data get it through
//! [`CalibratedBackend`], which composes a backend with a configuration
//! record and optional device properties deserialized from JSON files
//! in the Qiskit layout.
//!
//! # Example
//!
//! ```
//! use grani_adapter_tket::{OpType, TketAdapter, TketCircuit, TketCommand, validate_circuit};
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
//! let backend = TketAdapter.adapt(&model).unwrap();
//! assert_eq!(backend.two_q_gate_type(), OpType::CX);
//!
//! let mut circuit = TketCircuit::new();
//! circuit.push(TketCommand::new(OpType::CX, [0, 1]));
//! assert!(validate_circuit(&circuit, &backend).is_ok());
//! ```

mod backend;
mod calibration;
mod circuit;
mod error;
mod optype;
mod validation;

pub use backend::{TketAdapter, TketBackend};
pub use calibration::CalibratedBackend;
pub use circuit::{TketCircuit, TketCommand};
pub use error::{TketError, TketResult};
pub use optype::OpType;
pub use validation::validate_circuit;
