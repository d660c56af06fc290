//! Staq backend handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use grani_device::{DeviceModel, EcosystemAdapter};
use grani_topology::CouplingGraph;

use crate::device::StaqDevice;
use crate::error::{StaqError, StaqResult};

/// Gates staq compilation always targets.
pub const STAQ_BASIS_GATES: &[&str] = &["u3", "cx"];

/// An adapted staq device: the on-disk specification plus what
/// validation needs in memory.
///
/// The handle owns the temp directory holding the device file; it is
/// removed when the last clone of the handle is dropped.
#[derive(Debug, Clone)]
pub struct StaqBackend {
    device_dir: Arc<TempDir>,
    device_path: PathBuf,
    num_qubits: u32,
    coupling: Option<CouplingGraph>,
}

impl StaqBackend {
    /// Render a device model for staq.
    ///
    /// Writes the device specification into a fresh temp directory and
    /// keeps the path for passing to the `staq` subprocess.
    pub fn from_model(model: &DeviceModel) -> StaqResult<Self> {
        let device_dir = tempfile::Builder::new().prefix("grani-staq-").tempdir()?;
        let device_path = device_dir.path().join("device.json");
        StaqDevice::from_model(model).write(&device_path)?;
        Ok(Self {
            device_dir: Arc::new(device_dir),
            device_path,
            num_qubits: model.num_qubits(),
            coupling: model.coupling().cloned(),
        })
    }

    /// The temp directory holding the device file.
    pub fn device_dir(&self) -> &Path {
        self.device_dir.path()
    }

    /// Path to the serialized device file.
    pub fn device_path(&self) -> &Path {
        &self.device_path
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The coupling graph, or `None` for all-to-all.
    pub fn coupling(&self) -> Option<&CouplingGraph> {
        self.coupling.as_ref()
    }

    /// The two-qubit gate in staq's gate names. Compilation always
    /// targets `{u3, cx}`, so this is `cx` for every device.
    pub fn two_qubit_gate(&self) -> &'static str {
        "cx"
    }
}

/// Adapter selecting the staq ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaqAdapter;

impl EcosystemAdapter for StaqAdapter {
    type Handle = StaqBackend;
    type Error = StaqError;

    fn ecosystem(&self) -> &'static str {
        "staq"
    }

    fn adapt(&self, model: &DeviceModel) -> StaqResult<StaqBackend> {
        StaqBackend::from_model(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grani_device::RECOGNIZED_TWO_QUBIT_GATES;
    use grani_topology::TopologyFamily;

    #[test]
    fn test_adapt_writes_device_file() {
        let model = DeviceModel::flexible(
            4,
            TopologyFamily::Linear,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let backend = StaqBackend::from_model(&model).unwrap();
        assert!(backend.device_path().ends_with("device.json"));
        assert!(backend.device_path().exists());
        assert_eq!(backend.num_qubits(), 4);
        assert_eq!(backend.two_qubit_gate(), "cx");

        // Separate runs land in separate directories.
        let second = StaqBackend::from_model(&model).unwrap();
        assert_ne!(backend.device_path(), second.device_path());
    }

    #[test]
    fn test_device_dir_removed_on_drop() {
        let model = DeviceModel::flexible(
            3,
            TopologyFamily::Linear,
            ["id", "rz", "sx", "x", "cx"],
            RECOGNIZED_TWO_QUBIT_GATES,
        )
        .unwrap();
        let backend = StaqBackend::from_model(&model).unwrap();
        let dir = backend.device_dir().to_path_buf();
        assert!(dir.exists());

        // A clone keeps the directory alive until the last handle goes.
        let clone = backend.clone();
        drop(backend);
        assert!(dir.exists());
        drop(clone);
        assert!(!dir.exists());
    }
}
