//! Validation of staq output against the adapted device.

use grani_device::{
    CircuitValidator, ValidationResult, allowed_gate_names, check_gate_set, check_two_qubit_edges,
};

use crate::backend::{STAQ_BASIS_GATES, StaqAdapter, StaqBackend};
use crate::circuit::StaqCircuit;

/// Non-gate directives tolerated in staq output.
const EXTRA_ALLOWED: &[&str] = &["barrier", "measure"];

/// Validate staq output against a backend.
///
/// Staq always compiles to `{u3, cx}` regardless of the device basis,
/// so the gate-set check runs against that fixed set. On constrained
/// topologies every `cx` must land on a coupling edge.
pub fn validate_circuit(circuit: &StaqCircuit, backend: &StaqBackend) -> ValidationResult {
    let basis: Vec<String> = STAQ_BASIS_GATES.iter().map(|g| g.to_string()).collect();
    let allowed = allowed_gate_names(basis.iter(), EXTRA_ALLOWED);
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
    let two_qubit_gate = backend.two_qubit_gate();
    check_two_qubit_edges(
        circuit
            .instructions()
            .iter()
            .filter(|instruction| {
                instruction.name == two_qubit_gate && instruction.qubits.len() == 2
            })
            .map(|instruction| (instruction.qubits[0], instruction.qubits[1])),
        coupling,
    )
}

impl CircuitValidator for StaqAdapter {
    type Circuit = StaqCircuit;
    type Handle = StaqBackend;

    fn validate(&self, circuit: &StaqCircuit, handle: &StaqBackend) -> ValidationResult {
        validate_circuit(circuit, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::StaqInstruction;
    use grani_device::{DeviceModel, RECOGNIZED_TWO_QUBIT_GATES, ValidationError};
    use grani_topology::TopologyFamily;

    fn linear_backend() -> StaqBackend {
        let model = DeviceModel::flexible(
            4,
            TopologyFamily::Linear,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        StaqBackend::from_model(&model).unwrap()
    }

    #[test]
    fn test_u3_cx_output_passes() {
        let circuit = StaqCircuit::from_instructions(vec![
            StaqInstruction::new("u3", [0]),
            StaqInstruction::new("cx", [0, 1]),
            StaqInstruction::new("measure", [0]),
        ]);
        assert!(validate_circuit(&circuit, &linear_backend()).is_ok());
    }

    #[test]
    fn test_device_basis_gate_still_rejected() {
        // The device advertises rz but staq output may only use u3/cx.
        let circuit = StaqCircuit::from_instructions(vec![StaqInstruction::new("rz", [0])]);
        let err = validate_circuit(&circuit, &linear_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GateSetViolation {
                gates: vec!["rz".to_string()],
            }
        );
    }

    #[test]
    fn test_uncoupled_cx_rejected() {
        let circuit = StaqCircuit::from_instructions(vec![StaqInstruction::new("cx", [1, 3])]);
        let err = validate_circuit(&circuit, &linear_backend()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TopologyViolation {
                pairs: vec![(1, 3)],
            }
        );
    }
}
