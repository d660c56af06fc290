//! Calibration-aware wrapper around a Tket backend.
//!
//! Tket's compilation passes consult a backend's configuration record
//! and, when present, device calibration properties. Both live in the
//! Qiskit serialization layout, so the wrapper composes a [`TketBackend`]
//! with data deserialized from those JSON files. The wrapped backend is
//! never modified.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use grani_adapter_qiskit::BackendConfiguration;

use crate::backend::TketBackend;
use crate::error::TketResult;

/// A Tket backend paired with its configuration and calibration data.
#[derive(Debug, Clone)]
pub struct CalibratedBackend {
    backend: TketBackend,
    configuration: BackendConfiguration,
    properties: Option<Value>,
}

impl CalibratedBackend {
    /// Pair a backend with an in-memory configuration record.
    pub fn new(backend: TketBackend, configuration: BackendConfiguration) -> Self {
        Self {
            backend,
            configuration,
            properties: None,
        }
    }

    /// Load configuration and optional properties from JSON files.
    pub fn from_files(
        backend: TketBackend,
        configuration_path: &Path,
        properties_path: Option<&Path>,
    ) -> TketResult<Self> {
        let configuration: BackendConfiguration =
            serde_json::from_reader(BufReader::new(File::open(configuration_path)?))?;
        let properties = match properties_path {
            Some(path) => Some(serde_json::from_reader(BufReader::new(File::open(path)?))?),
            None => None,
        };
        debug!(
            backend = backend.name(),
            config = %configuration_path.display(),
            has_properties = properties.is_some(),
            "loaded calibration data"
        );
        Ok(Self {
            backend,
            configuration,
            properties,
        })
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &TketBackend {
        &self.backend
    }

    /// The configuration record.
    pub fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    /// The calibration properties, if any were supplied.
    pub fn properties(&self) -> Option<&Value> {
        self.properties.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use grani_adapter_qiskit::QiskitBackend;
    use grani_device::{DeviceModel, RECOGNIZED_TWO_QUBIT_GATES};
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
    fn test_from_files_reads_configuration() {
        let model = model();
        let configuration = QiskitBackend::from_model(&model)
            .unwrap()
            .configuration()
            .clone();

        let dir = tempfile::tempdir().unwrap();
        let conf_path = dir.path().join("conf.json");
        let props_path = dir.path().join("props.json");
        std::fs::write(
            &conf_path,
            serde_json::to_string(&configuration).unwrap(),
        )
        .unwrap();
        let mut props = File::create(&props_path).unwrap();
        props
            .write_all(br#"{"backend_name": "flexible-linear", "qubits": []}"#)
            .unwrap();

        let backend = TketBackend::from_model(&model).unwrap();
        let calibrated =
            CalibratedBackend::from_files(backend, &conf_path, Some(&props_path)).unwrap();
        assert_eq!(calibrated.configuration().n_qubits, 4);
        assert_eq!(
            calibrated.properties().unwrap()["backend_name"],
            "flexible-linear"
        );
        // Wrapped handle is untouched by the calibration pairing.
        assert_eq!(calibrated.backend().num_qubits(), 4);
    }

    #[test]
    fn test_properties_are_optional() {
        let model = model();
        let configuration = QiskitBackend::from_model(&model)
            .unwrap()
            .configuration()
            .clone();
        let backend = TketBackend::from_model(&model).unwrap();
        let calibrated = CalibratedBackend::new(backend, configuration);
        assert!(calibrated.properties().is_none());
    }
}
