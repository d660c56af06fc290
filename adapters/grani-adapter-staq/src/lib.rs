//! Grani adapter for the staq ecosystem.
//!
//! Staq runs as a subprocess and reads device connectivity from a JSON
//! file rather than an in-process object, so adaptation serializes the
//! device model into an isolated per-run temp directory and hands back
//! the path; the directory is removed when the last handle clone is
//! dropped. Compilation always targets the fixed `{u3, cx}` basis, so
//! the device's advertised basis gates play no role in validation.
//!
//! # Example
//!
//! ```
//! use grani_adapter_staq::{StaqAdapter, StaqCircuit, StaqInstruction, validate_circuit};
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
//! let backend = StaqAdapter.adapt(&model).unwrap();
//! assert!(backend.device_path().exists());
//!
//! let mut circuit = StaqCircuit::new();
//! circuit.push(StaqInstruction::new("cx", [0, 1]));
//! assert!(validate_circuit(&circuit, &backend).is_ok());
//! ```

mod backend;
mod circuit;
mod device;
mod error;
mod validation;

pub use backend::{STAQ_BASIS_GATES, StaqAdapter, StaqBackend};
pub use circuit::{StaqCircuit, StaqInstruction};
pub use device::{StaqDevice, StaqEdge, StaqQubit};
pub use error::{StaqError, StaqResult};
pub use validation::validate_circuit;
