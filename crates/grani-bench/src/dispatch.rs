//! Enum dispatch over the per-ecosystem adapters.
//!
//! The adapter crates expose strongly typed handles and circuits; this
//! module wraps them in enums so callers can pick the ecosystem at
//! runtime from a name string. A circuit can only be validated against
//! a handle from the same ecosystem.

use tracing::debug;

use grani_adapter_bqskit::{BqskitAdapter, BqskitCircuit, MachineModel};
use grani_adapter_qiskit::{QiskitAdapter, QiskitBackend, QiskitCircuit};
use grani_adapter_staq::{StaqAdapter, StaqBackend, StaqCircuit};
use grani_adapter_tket::{TketAdapter, TketBackend, TketCircuit};
use grani_device::{CircuitValidator, DeviceModel, EcosystemAdapter};

use crate::ecosystem::Ecosystem;
use crate::error::BenchResult;

/// A native backend handle from one of the supported ecosystems.
#[derive(Debug, Clone)]
pub enum NativeHandle {
    /// Qiskit backend.
    Qiskit(QiskitBackend),
    /// Tket backend.
    Tket(TketBackend),
    /// BQSKit machine model.
    Bqskit(MachineModel),
    /// Staq device handle.
    Staq(StaqBackend),
}

impl NativeHandle {
    /// The ecosystem this handle belongs to.
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            NativeHandle::Qiskit(_) => Ecosystem::Qiskit,
            NativeHandle::Tket(_) => Ecosystem::Tket,
            NativeHandle::Bqskit(_) => Ecosystem::Bqskit,
            NativeHandle::Staq(_) => Ecosystem::Staq,
        }
    }
}

/// A native circuit from one of the supported ecosystems.
#[derive(Debug, Clone)]
pub enum NativeCircuit {
    /// Qiskit circuit.
    Qiskit(QiskitCircuit),
    /// Tket circuit.
    Tket(TketCircuit),
    /// BQSKit circuit.
    Bqskit(BqskitCircuit),
    /// Staq output.
    Staq(StaqCircuit),
}

impl NativeCircuit {
    /// The ecosystem this circuit belongs to.
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            NativeCircuit::Qiskit(_) => Ecosystem::Qiskit,
            NativeCircuit::Tket(_) => Ecosystem::Tket,
            NativeCircuit::Bqskit(_) => Ecosystem::Bqskit,
            NativeCircuit::Staq(_) => Ecosystem::Staq,
        }
    }
}

/// Adapt a device model for the chosen ecosystem.
pub fn adapt(model: &DeviceModel, ecosystem: Ecosystem) -> BenchResult<NativeHandle> {
    debug!(backend = model.name(), %ecosystem, "adapting device model");
    let handle = match ecosystem {
        Ecosystem::Qiskit => NativeHandle::Qiskit(QiskitAdapter.adapt(model)?),
        Ecosystem::Tket => NativeHandle::Tket(TketAdapter.adapt(model)?),
        Ecosystem::Bqskit => NativeHandle::Bqskit(BqskitAdapter.adapt(model)?),
        Ecosystem::Staq => NativeHandle::Staq(StaqAdapter.adapt(model)?),
    };
    Ok(handle)
}

/// Validate a native circuit against a native handle.
///
/// The circuit and handle must come from the same ecosystem; pairing
/// them across ecosystems is a caller bug, reported as
/// [`BenchError::EcosystemMismatch`](crate::BenchError::EcosystemMismatch).
pub fn validate(circuit: &NativeCircuit, handle: &NativeHandle) -> BenchResult<()> {
    match (circuit, handle) {
        (NativeCircuit::Qiskit(circuit), NativeHandle::Qiskit(handle)) => {
            QiskitAdapter.validate(circuit, handle)?;
        }
        (NativeCircuit::Tket(circuit), NativeHandle::Tket(handle)) => {
            TketAdapter.validate(circuit, handle)?;
        }
        (NativeCircuit::Bqskit(circuit), NativeHandle::Bqskit(handle)) => {
            BqskitAdapter.validate(circuit, handle)?;
        }
        (NativeCircuit::Staq(circuit), NativeHandle::Staq(handle)) => {
            StaqAdapter.validate(circuit, handle)?;
        }
        (circuit, handle) => {
            return Err(crate::error::BenchError::EcosystemMismatch {
                circuit: circuit.ecosystem().name(),
                handle: handle.ecosystem().name(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use grani_adapter_qiskit::QiskitInstruction;
    use grani_device::RECOGNIZED_TWO_QUBIT_GATES;
    use grani_topology::TopologyFamily;

    fn model() -> DeviceModel {
        DeviceModel::flexible(
            4,
            TopologyFamily::Linear,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap()
    }

    #[test]
    fn test_adapt_every_ecosystem() {
        let model = model();
        for ecosystem in Ecosystem::ALL {
            let handle = adapt(&model, ecosystem).unwrap();
            assert_eq!(handle.ecosystem(), ecosystem);
        }
    }

    #[test]
    fn test_mismatched_pairing_rejected() {
        let model = model();
        let handle = adapt(&model, Ecosystem::Tket).unwrap();
        let circuit = NativeCircuit::Qiskit(QiskitCircuit::from_instructions(vec![
            QiskitInstruction::new("cx", [0, 1]),
        ]));
        let err = validate(&circuit, &handle).unwrap_err();
        assert!(matches!(
            err,
            BenchError::EcosystemMismatch {
                circuit: "qiskit",
                handle: "tket",
            }
        ));
    }
}
