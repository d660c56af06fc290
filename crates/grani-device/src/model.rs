//! Canonical, ecosystem-agnostic device models.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use grani_topology::{CouplingGraph, TopologyFamily, generate};

use crate::error::{DeviceError, DeviceResult};

/// Two-qubit gate names a device model knows how to resolve by default.
///
/// Callers benchmarking exotic entangling gates pass their own set to
/// [`DeviceModel::new`]; this is the stock superconducting repertoire.
pub const RECOGNIZED_TWO_QUBIT_GATES: &[&str] = &["cx", "cz", "ecr"];

/// Default basis gate set for flexible devices (OpenQASM 3 naming).
pub const DEFAULT_BASIS_GATES: &[&str] = &["id", "rz", "sx", "x", "cx"];

/// Canonical description of a target device: size, connectivity, and
/// gate set, with the entangling gate already resolved.
///
/// A model is built once per benchmark parametrization and never mutated.
/// Adapting it to an ecosystem is idempotent; adapters receive it by
/// shared reference and keep no link back to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceModel {
    name: String,
    num_qubits: u32,
    /// `None` means all-to-all: no coupling restriction.
    coupling: Option<CouplingGraph>,
    basis_gates: Vec<String>,
    two_qubit_gate: String,
}

impl DeviceModel {
    /// Build a device model, resolving the two-qubit gate.
    ///
    /// The intersection of `basis_gates` with `recognized_two_qubit_gates`
    /// must contain exactly one gate name; zero or several members fail
    /// construction. A present coupling graph must match `num_qubits`.
    pub fn new(
        name: impl Into<String>,
        num_qubits: u32,
        coupling: Option<CouplingGraph>,
        basis_gates: impl IntoIterator<Item = impl Into<String>>,
        recognized_two_qubit_gates: &[&str],
    ) -> DeviceResult<Self> {
        let basis_gates: Vec<String> = basis_gates.into_iter().map(Into::into).collect();
        if let Some(graph) = &coupling {
            if graph.num_qubits() != num_qubits {
                return Err(DeviceError::QubitCountMismatch {
                    graph: graph.num_qubits(),
                    device: num_qubits,
                });
            }
        }
        let two_qubit_gate =
            resolve_two_qubit_gate(&basis_gates, recognized_two_qubit_gates)?;
        let name = name.into();
        debug!(
            name = %name,
            num_qubits,
            two_qubit_gate = %two_qubit_gate,
            "built device model"
        );
        Ok(Self {
            name,
            num_qubits,
            coupling,
            basis_gates,
            two_qubit_gate,
        })
    }

    /// Build a model from a raw edge list, as read from benchmark
    /// parametrization. `edges = None` means all-to-all connectivity.
    pub fn from_edges(
        name: impl Into<String>,
        num_qubits: u32,
        edges: Option<Vec<(u32, u32)>>,
        basis_gates: impl IntoIterator<Item = impl Into<String>>,
        recognized_two_qubit_gates: &[&str],
    ) -> DeviceResult<Self> {
        let coupling = match edges {
            Some(edges) => Some(CouplingGraph::from_edges(num_qubits, edges)?),
            None => None,
        };
        Self::new(
            name,
            num_qubits,
            coupling,
            basis_gates,
            recognized_two_qubit_gates,
        )
    }

    /// Build a flexible device: at least `min_qubits` qubits over the
    /// given topology family, with the supplied basis gates.
    pub fn flexible(
        min_qubits: u32,
        family: TopologyFamily,
        basis_gates: impl IntoIterator<Item = impl Into<String>>,
        recognized_two_qubit_gates: &[&str],
    ) -> DeviceResult<Self> {
        let generated = generate(min_qubits, family)?;
        Self::new(
            format!("flexible-{family}"),
            generated.num_qubits,
            generated.coupling,
            basis_gates,
            recognized_two_qubit_gates,
        )
    }

    /// Device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Coupling graph, or `None` for all-to-all connectivity.
    pub fn coupling(&self) -> Option<&CouplingGraph> {
        self.coupling.as_ref()
    }

    /// Supported basis gates, in declaration order.
    pub fn basis_gates(&self) -> &[String] {
        &self.basis_gates
    }

    /// The resolved entangling gate name.
    pub fn two_qubit_gate(&self) -> &str {
        &self.two_qubit_gate
    }

    /// Whether a gate name is in the basis set.
    pub fn supports(&self, gate: &str) -> bool {
        self.basis_gates.iter().any(|g| g == gate)
    }

    /// Whether this device imposes a routing constraint.
    ///
    /// All-to-all devices and complete coupling graphs do not; validators
    /// skip the edge-membership check for them.
    pub fn is_constrained(&self) -> bool {
        self.coupling
            .as_ref()
            .is_some_and(|graph| !graph.is_complete())
    }
}

/// Resolve the unique two-qubit gate from a basis set.
fn resolve_two_qubit_gate(basis_gates: &[String], recognized: &[&str]) -> DeviceResult<String> {
    let recognized_set: FxHashSet<&str> = recognized.iter().copied().collect();
    let mut candidates: Vec<String> = basis_gates
        .iter()
        .filter(|gate| recognized_set.contains(gate.as_str()))
        .cloned()
        .collect();
    candidates.sort_unstable();
    candidates.dedup();
    match candidates.len() {
        0 => Err(DeviceError::NoTwoQubitGate {
            recognized: recognized.iter().map(|g| (*g).to_string()).collect(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(DeviceError::AmbiguousTwoQubitGate { candidates }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ibm_basis() -> Vec<&'static str> {
        vec!["id", "rz", "sx", "x", "cx"]
    }

    #[test]
    fn test_two_qubit_gate_resolution() {
        let model = DeviceModel::new(
            "test",
            2,
            None,
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        assert_eq!(model.two_qubit_gate(), "cx");
        assert!(model.supports("sx"));
        assert!(!model.supports("h"));
    }

    #[test]
    fn test_no_two_qubit_gate() {
        let err = DeviceModel::new(
            "test",
            2,
            None,
            ["rz", "sx", "x"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap_err();
        assert!(matches!(err, DeviceError::NoTwoQubitGate { .. }));
    }

    #[test]
    fn test_ambiguous_two_qubit_gate() {
        let err = DeviceModel::new(
            "test",
            2,
            None,
            ["rz", "cx", "cz"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap_err();
        match err {
            DeviceError::AmbiguousTwoQubitGate { candidates } => {
                assert_eq!(candidates, vec!["cx".to_string(), "cz".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_recognized_set() {
        let model =
            DeviceModel::new("ion", 4, None, ["rx", "ry", "rz", "xx"], &["xx", "zz"]).unwrap();
        assert_eq!(model.two_qubit_gate(), "xx");
    }

    #[test]
    fn test_from_edges_symmetrizes() {
        let model = DeviceModel::from_edges(
            "test",
            3,
            Some(vec![(0, 1), (1, 0), (1, 2)]),
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let graph = model.coupling().unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.contains(2, 1));
    }

    #[test]
    fn test_qubit_count_mismatch() {
        let graph = CouplingGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let err = DeviceModel::new(
            "test",
            5,
            Some(graph),
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DeviceError::QubitCountMismatch { graph: 3, device: 5 }
        ));
    }

    #[test]
    fn test_flexible_square() {
        let model = DeviceModel::flexible(
            100,
            TopologyFamily::Square,
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        assert_eq!(model.name(), "flexible-square");
        assert_eq!(model.num_qubits(), 100);
        assert!(model.is_constrained());
    }

    #[test]
    fn test_all_to_all_is_unconstrained() {
        let model = DeviceModel::flexible(
            20,
            TopologyFamily::AllToAll,
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        assert!(model.coupling().is_none());
        assert!(!model.is_constrained());
    }

    #[test]
    fn test_complete_coupling_is_unconstrained() {
        let graph = CouplingGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        let model = DeviceModel::new(
            "test",
            3,
            Some(graph),
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        assert!(!model.is_constrained());
    }

    #[test]
    fn test_serde_round_trip() {
        let model = DeviceModel::flexible(
            10,
            TopologyFamily::Linear,
            ibm_basis(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let json = serde_json::to_string(&model).unwrap();
        let decoded: DeviceModel = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.num_qubits(), 10);
        assert_eq!(decoded.two_qubit_gate(), "cx");
    }
}
