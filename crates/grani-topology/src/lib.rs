//! Synthetic device-topology generation.
//!
//! This crate produces the qubit-connectivity graphs used to build
//! flexible device models for cross-ecosystem compiler benchmarking.
//! A caller asks for a minimum qubit count over a named
//! [`TopologyFamily`]; the generator returns a [`CouplingGraph`] with at
//! least that many qubits, since most families only realize specific
//! node counts exactly.
//!
//! # Families
//!
//! | Family | Realized qubit count |
//! |--------|----------------------|
//! | `square` | `d²` for `d = ceil(sqrt(min))` |
//! | `heavy-hex` | `(5d² − 2d − 1)/2` for the smallest viable odd `d` |
//! | `linear` | exactly `min` |
//! | `tree` | `2^(levels+1) − 1` |
//! | `torus` | `3 · little²` for `little = ceil(sqrt(min / 3))` |
//! | `all-to-all` | exactly `min`, no coupling restriction |
//!
//! # Example
//!
//! ```rust
//! use grani_topology::{generate, TopologyFamily};
//!
//! let topo = generate(100, TopologyFamily::Square)?;
//! assert_eq!(topo.num_qubits, 100);
//! let graph = topo.coupling.unwrap();
//! assert!(graph.contains(0, 1));
//! assert!(graph.is_connected());
//! # Ok::<(), grani_topology::TopologyError>(())
//! ```
//!
//! All generators are deterministic pure functions; no randomness is
//! involved anywhere in this crate.

pub mod error;
pub mod family;
pub mod generate;
pub mod graph;

pub use error::{TopologyError, TopologyResult};
pub use family::TopologyFamily;
pub use generate::{GeneratedTopology, generate};
pub use graph::CouplingGraph;
