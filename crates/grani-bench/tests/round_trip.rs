//! End-to-end dispatch: string-selected topology and ecosystem, model
//! adaptation, and native-circuit validation for every adapter.

use grani_bench::{Ecosystem, NativeCircuit, NativeHandle, adapt, generate_topology, validate};
use grani_device::{DEFAULT_BASIS_GATES, DeviceModel, RECOGNIZED_TWO_QUBIT_GATES};
use grani_topology::TopologyFamily;

use grani_adapter_bqskit::{BqskitCircuit, BqskitGate, BqskitOperation};
use grani_adapter_qiskit::{QiskitCircuit, QiskitInstruction};
use grani_adapter_staq::{StaqCircuit, StaqInstruction};
use grani_adapter_tket::{OpType, TketCircuit, TketCommand};

fn linear_model() -> DeviceModel {
    DeviceModel::flexible(
        4,
        TopologyFamily::Linear,
        DEFAULT_BASIS_GATES.iter().copied(),
        RECOGNIZED_TWO_QUBIT_GATES,
    )
    .unwrap()
}

/// A circuit using only the entangling gate on the first coupled pair.
fn native_circuit(ecosystem: Ecosystem) -> NativeCircuit {
    match ecosystem {
        Ecosystem::Qiskit => NativeCircuit::Qiskit(QiskitCircuit::from_instructions(vec![
            QiskitInstruction::new("cx", [0, 1]),
        ])),
        Ecosystem::Tket => NativeCircuit::Tket(TketCircuit::from_commands(vec![
            TketCommand::new(OpType::CX, [0, 1]),
        ])),
        Ecosystem::Bqskit => NativeCircuit::Bqskit(BqskitCircuit::from_operations(vec![
            BqskitOperation::new(BqskitGate::Cx, [0, 1]),
        ])),
        Ecosystem::Staq => NativeCircuit::Staq(StaqCircuit::from_instructions(vec![
            StaqInstruction::new("cx", [0, 1]),
        ])),
    }
}

#[test]
fn test_adapt_and_validate_every_ecosystem() {
    let model = linear_model();
    for name in ["qiskit", "tket", "bqskit", "staq"] {
        let ecosystem: Ecosystem = name.parse().unwrap();
        let handle = adapt(&model, ecosystem).unwrap();
        assert_eq!(handle.ecosystem(), ecosystem);
        validate(&native_circuit(ecosystem), &handle).unwrap();
    }
}

#[test]
fn test_every_family_adapts_everywhere() {
    for family in TopologyFamily::ALL {
        let model = DeviceModel::flexible(
            8,
            family,
            DEFAULT_BASIS_GATES.iter().copied(),
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        for ecosystem in Ecosystem::ALL {
            adapt(&model, ecosystem).unwrap();
        }
    }
}

#[test]
fn test_uncoupled_pair_fails_in_every_ecosystem() {
    let model = linear_model();
    // Qubits 0 and 3 are the path's endpoints, never coupled.
    let cases = [
        NativeCircuit::Qiskit(QiskitCircuit::from_instructions(vec![
            QiskitInstruction::new("cx", [0, 3]),
        ])),
        NativeCircuit::Tket(TketCircuit::from_commands(vec![TketCommand::new(
            OpType::CX,
            [0, 3],
        )])),
        NativeCircuit::Bqskit(BqskitCircuit::from_operations(vec![BqskitOperation::new(
            BqskitGate::Cx,
            [0, 3],
        )])),
        NativeCircuit::Staq(StaqCircuit::from_instructions(vec![StaqInstruction::new(
            "cx",
            [0, 3],
        )])),
    ];
    for circuit in cases {
        let handle = adapt(&model, circuit.ecosystem()).unwrap();
        assert!(validate(&circuit, &handle).is_err());
    }
}

#[test]
fn test_generated_topology_feeds_models() {
    let topology = generate_topology(100, "heavy-hex").unwrap();
    assert!(topology.num_qubits >= 100);
    let model = DeviceModel::new(
        "heavy-hex-100",
        topology.num_qubits,
        topology.coupling.clone(),
        DEFAULT_BASIS_GATES.iter().copied(),
        RECOGNIZED_TWO_QUBIT_GATES,
    )
    .unwrap();
    let handle = adapt(&model, Ecosystem::Qiskit).unwrap();
    match handle {
        NativeHandle::Qiskit(backend) => {
            assert_eq!(backend.num_qubits(), topology.num_qubits);
        }
        other => panic!("expected qiskit handle, got {}", other.ecosystem()),
    }
}
