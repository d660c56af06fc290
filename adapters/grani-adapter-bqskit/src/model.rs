//! BQSKit machine model rendering of a device model.

use rustc_hash::FxHashSet;
use tracing::debug;

use grani_device::{DeviceModel, EcosystemAdapter};
use grani_topology::CouplingGraph;

use crate::error::{BqskitError, BqskitResult};
use crate::gate::BqskitGate;

/// A device model rendered as a BQSKit machine model.
///
/// BQSKit treats coupling as undirected, so the model exposes each edge
/// once as a sorted pair. An absent coupling graph means all-to-all.
#[derive(Debug, Clone)]
pub struct MachineModel {
    num_qudits: u32,
    coupling: Option<CouplingGraph>,
    gate_set: FxHashSet<BqskitGate>,
    two_q_gate_type: BqskitGate,
}

impl MachineModel {
    /// Render a device model as a machine model.
    ///
    /// Every basis gate must translate into BQSKit's gate registry. The
    /// resolved two-qubit gate is recognized, so its translation cannot
    /// fail once the basis set has been checked.
    pub fn from_model(model: &DeviceModel) -> BqskitResult<Self> {
        let mut gate_set = FxHashSet::default();
        for gate in model.basis_gates() {
            let bq = BqskitGate::from_gate_name(gate)
                .ok_or_else(|| BqskitError::UnsupportedGate { gate: gate.clone() })?;
            gate_set.insert(bq);
        }
        let two_q_gate_type = BqskitGate::from_gate_name(model.two_qubit_gate())
            .ok_or_else(|| BqskitError::UnsupportedGate {
                gate: model.two_qubit_gate().to_string(),
            })?;
        debug!(
            backend = model.name(),
            num_qudits = model.num_qubits(),
            two_q = %two_q_gate_type,
            "adapted device model for bqskit"
        );
        Ok(Self {
            num_qudits: model.num_qubits(),
            coupling: model.coupling().cloned(),
            gate_set,
            two_q_gate_type,
        })
    }

    /// Number of qudits.
    pub fn num_qudits(&self) -> u32 {
        self.num_qudits
    }

    /// The coupling graph, or `None` for all-to-all.
    pub fn coupling(&self) -> Option<&CouplingGraph> {
        self.coupling.as_ref()
    }

    /// Undirected coupling as deduplicated sorted pairs, or `None` for
    /// all-to-all.
    pub fn coupling_graph(&self) -> Option<Vec<(u32, u32)>> {
        self.coupling.as_ref().map(CouplingGraph::sorted_edges)
    }

    /// The gate set.
    pub fn gate_set(&self) -> &FxHashSet<BqskitGate> {
        &self.gate_set
    }

    /// The resolved two-qubit gate.
    pub fn two_q_gate_type(&self) -> BqskitGate {
        self.two_q_gate_type
    }
}

/// Adapter selecting the BQSKit ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct BqskitAdapter;

impl EcosystemAdapter for BqskitAdapter {
    type Handle = MachineModel;
    type Error = BqskitError;

    fn ecosystem(&self) -> &'static str {
        "bqskit"
    }

    fn adapt(&self, model: &DeviceModel) -> BqskitResult<MachineModel> {
        MachineModel::from_model(model)
    }
}
