//! Circuit validation against a BQSKit machine model.

use rustc_hash::FxHashSet;

use grani_device::{CircuitValidator, ValidationResult, check_gate_set, check_two_qubit_edges};

use crate::circuit::BqskitCircuit;
use crate::gate::BqskitGate;
use crate::model::{BqskitAdapter, MachineModel};

/// Validate a compiled circuit against a machine model.
///
/// Gates must fall inside the model's gate set (plus barrier and
/// measurement placeholders), and on constrained topologies every
/// application of the entangling gate must land on a coupling edge.
pub fn validate_circuit(circuit: &BqskitCircuit, model: &MachineModel) -> ValidationResult {
    let allowed: FxHashSet<String> = model
        .gate_set()
        .iter()
        .chain([BqskitGate::Barrier, BqskitGate::Measurement].iter())
        .map(|gate| gate.name().to_string())
        .collect();
    check_gate_set(
        circuit
            .operations()
            .iter()
            .map(|operation| operation.gate.name().to_string()),
        &allowed,
    )?;

    let Some(coupling) = model.coupling() else {
        return Ok(());
    };
    if coupling.is_complete() {
        return Ok(());
    }
    let two_q = model.two_q_gate_type();
    check_two_qubit_edges(
        circuit
            .operations()
            .iter()
            .filter(|operation| operation.gate == two_q && operation.location.len() == 2)
            .map(|operation| (operation.location[0], operation.location[1])),
        coupling,
    )
}

impl CircuitValidator for BqskitAdapter {
    type Circuit = BqskitCircuit;
    type Handle = MachineModel;

    fn validate(&self, circuit: &BqskitCircuit, handle: &MachineModel) -> ValidationResult {
        validate_circuit(circuit, handle)
    }
}
