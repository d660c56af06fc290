//! Canonical device models for cross-ecosystem compiler benchmarking.
//!
//! A [`DeviceModel`] is the single, ecosystem-agnostic description of a
//! target device: qubit count, coupling graph (or all-to-all), basis
//! gate set, and the resolved two-qubit gate. One model is adapted into
//! each compiler ecosystem's native backend representation by the
//! adapter crates; the shared [`validation`] helpers then check compiled
//! circuits against it.
//!
//! # Two-qubit gate resolution
//!
//! Exactly one basis gate must belong to the recognized two-qubit gate
//! set. This keeps cross-ecosystem comparison well-defined: every
//! ecosystem routes the same entangling gate over the same coupling
//! graph.
//!
//! ```rust
//! use grani_device::{DeviceModel, RECOGNIZED_TWO_QUBIT_GATES};
//! use grani_topology::TopologyFamily;
//!
//! let model = DeviceModel::flexible(
//!     100,
//!     TopologyFamily::HeavyHex,
//!     ["id", "rz", "sx", "x", "ecr"],
//!     RECOGNIZED_TWO_QUBIT_GATES,
//! )?;
//! assert_eq!(model.two_qubit_gate(), "ecr");
//! assert_eq!(model.num_qubits(), 115);
//! # Ok::<(), grani_device::DeviceError>(())
//! ```

pub mod adapter;
pub mod error;
pub mod model;
pub mod validation;

pub use adapter::{CircuitValidator, EcosystemAdapter};
pub use error::{DeviceError, DeviceResult};
pub use model::{DEFAULT_BASIS_GATES, DeviceModel, RECOGNIZED_TWO_QUBIT_GATES};
pub use validation::{
    ValidationError, ValidationResult, allowed_gate_names, check_gate_set, check_two_qubit_edges,
};
