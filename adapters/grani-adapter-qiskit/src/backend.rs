//! Qiskit backend rendering of a device model.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use grani_device::{DeviceModel, EcosystemAdapter};
use grani_topology::CouplingGraph;

use crate::error::{QiskitError, QiskitResult};
use crate::gates::is_standard_gate;

/// Default shot ceiling advertised by flexible backends.
pub const DEFAULT_MAX_SHOTS: u32 = 100_000;

/// Backend configuration record in Qiskit's serialization layout.
///
/// This is the schema Qiskit-side tooling (and the tket adapter, which
/// reuses it for calibration lookup) expects to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfiguration {
    /// Backend name.
    pub backend_name: String,
    /// Backend version string.
    pub backend_version: String,
    /// Number of qubits.
    pub n_qubits: u32,
    /// Supported basis gates.
    pub basis_gates: Vec<String>,
    /// Directed coupling map; `None` means all-to-all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupling_map: Option<Vec<(u32, u32)>>,
    /// Whether the backend runs locally.
    pub local: bool,
    /// Reported as a simulator so downstream tooling accepts offline
    /// compilation against it.
    pub simulator: bool,
    /// Whether conditional operations are supported.
    pub conditional: bool,
    /// Whether pulse-level control is exposed.
    pub open_pulse: bool,
    /// Whether per-shot memory is supported.
    pub memory: bool,
    /// Maximum shots per job.
    pub max_shots: u32,
}

/// A device model rendered as a Qiskit backend.
///
/// Gate identifiers in Qiskit are the OpenQASM name strings themselves;
/// the handle keeps the resolved two-qubit gate in that form alongside
/// the symmetric coupling graph used for validation.
#[derive(Debug, Clone)]
pub struct QiskitBackend {
    configuration: BackendConfiguration,
    operation_names: FxHashSet<String>,
    coupling: Option<CouplingGraph>,
    two_qubit_gate: String,
}

impl QiskitBackend {
    /// Render a device model into a Qiskit backend.
    ///
    /// Every basis gate must be a Qiskit standard gate. The coupling map
    /// is emitted in directed form (both orientations of every edge);
    /// all-to-all devices carry no coupling map at all.
    pub fn from_model(model: &DeviceModel) -> QiskitResult<Self> {
        for gate in model.basis_gates() {
            if !is_standard_gate(gate) {
                return Err(QiskitError::UnsupportedGate { gate: gate.clone() });
            }
        }

        let coupling = model.coupling().cloned();
        let coupling_map = coupling.as_ref().map(|graph| {
            let mut edges: Vec<_> = graph.directed_edges().collect();
            edges.sort_unstable();
            edges
        });

        let configuration = BackendConfiguration {
            backend_name: model.name().to_string(),
            backend_version: "1.0.0".to_string(),
            n_qubits: model.num_qubits(),
            basis_gates: model.basis_gates().to_vec(),
            coupling_map,
            local: true,
            simulator: true,
            conditional: false,
            open_pulse: false,
            memory: false,
            max_shots: DEFAULT_MAX_SHOTS,
        };
        debug!(
            backend = %configuration.backend_name,
            n_qubits = configuration.n_qubits,
            "adapted device model for qiskit"
        );
        Ok(Self {
            configuration,
            operation_names: model.basis_gates().iter().cloned().collect(),
            coupling,
            two_qubit_gate: model.two_qubit_gate().to_string(),
        })
    }

    /// The backend configuration record.
    pub fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.configuration.n_qubits
    }

    /// The supported operation names.
    pub fn operation_names(&self) -> &FxHashSet<String> {
        &self.operation_names
    }

    /// The coupling graph, or `None` for all-to-all.
    pub fn coupling(&self) -> Option<&CouplingGraph> {
        self.coupling.as_ref()
    }

    /// The resolved two-qubit gate, in Qiskit's identifier form.
    pub fn two_qubit_gate(&self) -> &str {
        &self.two_qubit_gate
    }
}

/// Adapter selecting the Qiskit ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct QiskitAdapter;

impl EcosystemAdapter for QiskitAdapter {
    type Handle = QiskitBackend;
    type Error = QiskitError;

    fn ecosystem(&self) -> &'static str {
        "qiskit"
    }

    fn adapt(&self, model: &DeviceModel) -> QiskitResult<QiskitBackend> {
        QiskitBackend::from_model(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grani_device::RECOGNIZED_TWO_QUBIT_GATES;
    use grani_topology::TopologyFamily;

    fn model(family: TopologyFamily) -> DeviceModel {
        DeviceModel::flexible(
            4,
            family,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap()
    }

    #[test]
    fn test_adapt_linear() {
        let backend = QiskitBackend::from_model(&model(TopologyFamily::Linear)).unwrap();
        assert_eq!(backend.num_qubits(), 4);
        assert_eq!(backend.two_qubit_gate(), "cx");
        // Directed map carries both orientations of the 3 path edges.
        let cmap = backend.configuration().coupling_map.as_ref().unwrap();
        assert_eq!(cmap.len(), 6);
        assert!(cmap.contains(&(0, 1)));
        assert!(cmap.contains(&(1, 0)));
    }

    #[test]
    fn test_adapt_all_to_all_has_no_coupling_map() {
        let backend = QiskitBackend::from_model(&model(TopologyFamily::AllToAll)).unwrap();
        assert!(backend.configuration().coupling_map.is_none());
        assert!(backend.coupling().is_none());
    }

    #[test]
    fn test_adapt_rejects_unknown_gate() {
        let model = DeviceModel::new(
            "bad",
            2,
            None,
            ["rz", "zz_max", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let err = QiskitBackend::from_model(&model).unwrap_err();
        assert!(matches!(err, QiskitError::UnsupportedGate { gate } if gate == "zz_max"));
    }

    #[test]
    fn test_adapt_is_idempotent() {
        let model = model(TopologyFamily::Square);
        let first = QiskitBackend::from_model(&model).unwrap();
        let second = QiskitBackend::from_model(&model).unwrap();
        assert_eq!(
            first.configuration().coupling_map,
            second.configuration().coupling_map
        );
        assert_eq!(first.two_qubit_gate(), second.two_qubit_gate());
    }

    #[test]
    fn test_configuration_serializes() {
        let backend = QiskitBackend::from_model(&model(TopologyFamily::Linear)).unwrap();
        let json = serde_json::to_string(backend.configuration()).unwrap();
        let decoded: BackendConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.n_qubits, 4);
        assert!(decoded.simulator);
    }
}
