//! Grani adapter for the BQSKit ecosystem.
//!
//! Renders a canonical device model as a BQSKit machine model: a typed
//! gate set, undirected deduplicated coupling pairs, and the resolved
//! two-qubit gate in BQSKit's identifier space. The echoed
//! cross-resonance gate carries an explicit unitary definition since
//! BQSKit's own registry lacks it.
//!
//! # Example
//!
//! ```
//! use grani_adapter_bqskit::{BqskitAdapter, BqskitCircuit, BqskitGate, BqskitOperation};
//! use grani_adapter_bqskit::validate_circuit;
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
//! let machine = BqskitAdapter.adapt(&model).unwrap();
//! assert_eq!(machine.two_q_gate_type(), BqskitGate::Cx);
//!
//! let mut circuit = BqskitCircuit::new();
//! circuit.push(BqskitOperation::new(BqskitGate::Cx, [0, 1]));
//! assert!(validate_circuit(&circuit, &machine).is_ok());
//! ```

mod circuit;
mod error;
mod gate;
mod model;
mod validation;

pub use circuit::{BqskitCircuit, BqskitOperation};
pub use error::{BqskitError, BqskitResult};
pub use gate::{BqskitGate, ecr_unitary};
pub use model::{BqskitAdapter, MachineModel};
pub use validation::validate_circuit;
