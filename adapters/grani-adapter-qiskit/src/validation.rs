//! Circuit validation against an adapted Qiskit backend.

use grani_device::{
    CircuitValidator, ValidationResult, allowed_gate_names, check_gate_set, check_two_qubit_edges,
};

use crate::backend::{QiskitAdapter, QiskitBackend};
use crate::circuit::QiskitCircuit;

/// Non-gate directives tolerated in a transpiled circuit.
const EXTRA_ALLOWED: &[&str] = &["barrier", "measure"];

/// Validate a transpiled circuit against a backend.
///
/// Gate names must fall inside the basis set (plus barriers and
/// measurements), and on constrained topologies every application of the
/// entangling gate must land on a coupling edge.
pub fn validate_circuit(circuit: &QiskitCircuit, backend: &QiskitBackend) -> ValidationResult {
    let allowed = allowed_gate_names(backend.configuration().basis_gates.iter(), EXTRA_ALLOWED);
    check_gate_set(
        circuit
            .instructions()
            .iter()
            .map(|instruction| instruction.name.clone()),
        &allowed,
    )?;

    let Some(coupling) = backend.coupling() else {
        return Ok(());
    };
    if coupling.is_complete() {
        return Ok(());
    }
    let two_q = backend.two_qubit_gate();
    check_two_qubit_edges(
        circuit
            .instructions()
            .iter()
            .filter(|instruction| instruction.name == two_q && instruction.qubits.len() == 2)
            .map(|instruction| (instruction.qubits[0], instruction.qubits[1])),
        coupling,
    )
}

impl CircuitValidator for QiskitAdapter {
    type Circuit = QiskitCircuit;
    type Handle = QiskitBackend;

    fn validate(&self, circuit: &QiskitCircuit, handle: &QiskitBackend) -> ValidationResult {
        validate_circuit(circuit, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::QiskitInstruction;
    use grani_device::{DeviceModel, RECOGNIZED_TWO_QUBIT_GATES, ValidationError};
    use grani_topology::TopologyFamily;

    fn linear_backend() -> QiskitBackend {
        let model = DeviceModel::flexible(
            4,
            TopologyFamily::Linear,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        QiskitBackend::from_model(&model).unwrap()
    }

    #[test]
    fn test_valid_circuit_passes() {
        let circuit = QiskitCircuit::from_instructions(vec![
            QiskitInstruction::new("rz", [0]),
            QiskitInstruction::new("sx", [0]),
            QiskitInstruction::new("cx", [0, 1]),
            QiskitInstruction::new("cx", [2, 1]),
            QiskitInstruction::new("barrier", [0, 1, 2, 3]),
            QiskitInstruction::new("measure", [0]),
        ]);
        assert!(validate_circuit(&circuit, &linear_backend()).is_ok());
    }

    #[test]
    fn test_foreign_gate_rejected() {
        let circuit = QiskitCircuit::from_instructions(vec![QiskitInstruction::new("h", [0])]);
        let err = validate_circuit(&circuit, &linear_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GateSetViolation {
                gates: vec!["h".to_string()],
            }
        );
    }

    #[test]
    fn test_uncoupled_pair_rejected() {
        let circuit = QiskitCircuit::from_instructions(vec![QiskitInstruction::new("cx", [0, 3])]);
        let err = validate_circuit(&circuit, &linear_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TopologyViolation {
                pairs: vec![(0, 3)],
            }
        );
    }

    #[test]
    fn test_all_to_all_skips_edge_check() {
        let model = DeviceModel::flexible(
            3,
            TopologyFamily::AllToAll,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let backend = QiskitBackend::from_model(&model).unwrap();
        let circuit = QiskitCircuit::from_instructions(vec![QiskitInstruction::new("cx", [0, 2])]);
        assert!(validate_circuit(&circuit, &backend).is_ok());
    }
}
