//! Circuit validation against an adapted Tket backend.

use rustc_hash::FxHashSet;

use grani_device::{CircuitValidator, ValidationResult, check_gate_set, check_two_qubit_edges};

use crate::backend::{TketAdapter, TketBackend};
use crate::circuit::TketCircuit;
use crate::optype::OpType;

/// Validate a compiled circuit against a backend.
///
/// Operation types must fall inside the primitive gate set (plus
/// barriers and measurements), and on constrained topologies every
/// application of the entangling gate must land on a coupling edge.
/// Violations are reported by Tket operation name.
pub fn validate_circuit(circuit: &TketCircuit, backend: &TketBackend) -> ValidationResult {
    let allowed: FxHashSet<String> = backend
        .primitive_gates()
        .iter()
        .chain([OpType::Barrier, OpType::Measure].iter())
        .map(|op| op.name().to_string())
        .collect();
    check_gate_set(
        circuit
            .commands()
            .iter()
            .map(|command| command.op.name().to_string()),
        &allowed,
    )?;

    let Some(coupling) = backend.coupling() else {
        return Ok(());
    };
    if coupling.is_complete() {
        return Ok(());
    }
    let two_q = backend.two_q_gate_type();
    check_two_qubit_edges(
        circuit
            .commands()
            .iter()
            .filter(|command| command.op == two_q && command.qubits.len() == 2)
            .map(|command| (command.qubits[0], command.qubits[1])),
        coupling,
    )
}

impl CircuitValidator for TketAdapter {
    type Circuit = TketCircuit;
    type Handle = TketBackend;

    fn validate(&self, circuit: &TketCircuit, handle: &TketBackend) -> ValidationResult {
        validate_circuit(circuit, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::TketCommand;
    use grani_device::{DeviceModel, RECOGNIZED_TWO_QUBIT_GATES, ValidationError};
    use grani_topology::TopologyFamily;

    fn square_backend() -> TketBackend {
        let model = DeviceModel::flexible(
            4,
            TopologyFamily::Square,
            ["id", "rz", "sx", "x", "cz"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        TketBackend::from_model(&model).unwrap()
    }

    #[test]
    fn test_valid_circuit_passes() {
        // 2x2 grid: edges (0,1), (0,2), (1,3), (2,3).
        let circuit = TketCircuit::from_commands(vec![
            TketCommand::new(OpType::Rz, [0]),
            TketCommand::new(OpType::CZ, [0, 1]),
            TketCommand::new(OpType::CZ, [3, 1]),
            TketCommand::new(OpType::Barrier, [0, 1, 2, 3]),
            TketCommand::new(OpType::Measure, [0]),
        ]);
        assert!(validate_circuit(&circuit, &square_backend()).is_ok());
    }

    #[test]
    fn test_foreign_op_reported_by_name() {
        let circuit = TketCircuit::from_commands(vec![TketCommand::new(OpType::H, [0])]);
        let err = validate_circuit(&circuit, &square_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GateSetViolation {
                gates: vec!["H".to_string()],
            }
        );
    }

    #[test]
    fn test_diagonal_pair_rejected() {
        let circuit = TketCircuit::from_commands(vec![TketCommand::new(OpType::CZ, [0, 3])]);
        let err = validate_circuit(&circuit, &square_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TopologyViolation {
                pairs: vec![(0, 3)],
            }
        );
    }
}
