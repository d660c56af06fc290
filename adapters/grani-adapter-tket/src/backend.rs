//! Tket backend rendering of a device model.

use rustc_hash::FxHashSet;
use tracing::debug;

use grani_device::{DeviceModel, EcosystemAdapter};
use grani_topology::CouplingGraph;

use crate::error::{TketError, TketResult};
use crate::optype::OpType;

/// A device model rendered for Tket compilation.
///
/// The basis gates are carried as typed [`OpType`]s rather than name
/// strings, mirroring how Tket identifies operations. The resolved
/// two-qubit gate is translated into the same identifier space.
#[derive(Debug, Clone)]
pub struct TketBackend {
    name: String,
    num_qubits: u32,
    primitive_gates: FxHashSet<OpType>,
    supports_rz: bool,
    two_q_gate_type: OpType,
    coupling: Option<CouplingGraph>,
}

impl TketBackend {
    /// Render a device model for Tket.
    ///
    /// Every basis gate must translate to an `OpType`. The resolved
    /// two-qubit gate is recognized, so its translation cannot fail once
    /// the basis set has been checked.
    pub fn from_model(model: &DeviceModel) -> TketResult<Self> {
        let mut primitive_gates = FxHashSet::default();
        for gate in model.basis_gates() {
            let op = OpType::from_gate_name(gate)
                .ok_or_else(|| TketError::UnsupportedGate { gate: gate.clone() })?;
            primitive_gates.insert(op);
        }
        let two_q_gate_type = OpType::from_gate_name(model.two_qubit_gate())
            .ok_or_else(|| TketError::UnsupportedGate {
                gate: model.two_qubit_gate().to_string(),
            })?;
        let supports_rz = primitive_gates.contains(&OpType::Rz);
        debug!(
            backend = model.name(),
            num_qubits = model.num_qubits(),
            two_q = %two_q_gate_type,
            "adapted device model for tket"
        );
        Ok(Self {
            name: model.name().to_string(),
            num_qubits: model.num_qubits(),
            primitive_gates,
            supports_rz,
            two_q_gate_type,
            coupling: model.coupling().cloned(),
        })
    }

    /// The backend name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The primitive gate set.
    pub fn primitive_gates(&self) -> &FxHashSet<OpType> {
        &self.primitive_gates
    }

    /// Whether the primitive gate set contains `Rz`.
    pub fn supports_rz(&self) -> bool {
        self.supports_rz
    }

    /// The resolved two-qubit gate, as an `OpType`.
    pub fn two_q_gate_type(&self) -> OpType {
        self.two_q_gate_type
    }

    /// The coupling graph, or `None` for all-to-all.
    pub fn coupling(&self) -> Option<&CouplingGraph> {
        self.coupling.as_ref()
    }
}

/// Adapter selecting the Tket ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TketAdapter;

impl EcosystemAdapter for TketAdapter {
    type Handle = TketBackend;
    type Error = TketError;

    fn ecosystem(&self) -> &'static str {
        "tket"
    }

    fn adapt(&self, model: &DeviceModel) -> TketResult<TketBackend> {
        TketBackend::from_model(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grani_device::RECOGNIZED_TWO_QUBIT_GATES;
    use grani_topology::TopologyFamily;

    #[test]
    fn test_adapt_translates_gates() {
        let model = DeviceModel::flexible(
            5,
            TopologyFamily::HeavyHex,
            ["id", "rz", "sx", "x", "ecr"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let backend = TketBackend::from_model(&model).unwrap();
        assert!(backend.supports_rz());
        assert_eq!(backend.two_q_gate_type(), OpType::ECR);
        assert!(backend.primitive_gates().contains(&OpType::SX));
        assert!(backend.coupling().is_some());
    }

    #[test]
    fn test_adapt_rejects_untranslatable_gate() {
        let model = DeviceModel::new(
            "bad",
            2,
            None,
            ["rz", "gpi2", "cz"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let err = TketBackend::from_model(&model).unwrap_err();
        assert!(matches!(err, TketError::UnsupportedGate { gate } if gate == "gpi2"));
    }

    #[test]
    fn test_supports_rz_false_without_rz() {
        let model = DeviceModel::new(
            "u3-device",
            2,
            None,
            ["u3", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let backend = TketBackend::from_model(&model).unwrap();
        assert!(!backend.supports_rz());
    }
}
