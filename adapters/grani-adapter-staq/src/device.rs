//! Staq device-file serialization.
//!
//! Staq is driven as a subprocess and learns about hardware from a JSON
//! device specification on disk: qubit count, directed connectivity, and
//! optional per-qubit and per-edge fidelities. It has no notion of basis
//! gates since compilation always targets `{u3, cx}`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use grani_device::DeviceModel;
use grani_topology::CouplingGraph;

use crate::error::{StaqError, StaqResult};

/// One qubit record in a device file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaqQubit {
    /// Qubit index.
    pub id: u32,
    /// Single-qubit gate fidelity, if calibrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fidelity: Option<f64>,
}

/// One directed coupling record in a device file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaqEdge {
    /// Control qubit index.
    pub control: u32,
    /// Target qubit index.
    pub target: u32,
    /// Two-qubit gate fidelity, if calibrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fidelity: Option<f64>,
}

/// A staq device specification.
///
/// Edges are directed; an undirected coupling graph contributes both
/// orientations of every edge. An all-to-all device is rendered with
/// the complete directed graph since the format cannot express absent
/// connectivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaqDevice {
    /// Device name.
    pub name: String,
    /// Qubit records, ordered by index.
    pub qubits: Vec<StaqQubit>,
    /// Directed coupling records.
    pub edges: Vec<StaqEdge>,
}

impl StaqDevice {
    /// Build a device specification from a device model.
    pub fn from_model(model: &DeviceModel) -> Self {
        let qubits = (0..model.num_qubits())
            .map(|id| StaqQubit { id, fidelity: None })
            .collect();
        let edges = match model.coupling() {
            Some(coupling) => directed_records(coupling),
            None => complete_records(model.num_qubits()),
        };
        Self {
            name: model.name().to_string(),
            qubits,
            edges,
        }
    }

    /// Set every qubit record to the same fidelity.
    pub fn with_uniform_qubit_fidelity(mut self, fidelity: f64) -> StaqResult<Self> {
        check_fidelity(fidelity)?;
        for qubit in &mut self.qubits {
            qubit.fidelity = Some(fidelity);
        }
        Ok(self)
    }

    /// Set every edge record to the same fidelity.
    pub fn with_uniform_edge_fidelity(mut self, fidelity: f64) -> StaqResult<Self> {
        check_fidelity(fidelity)?;
        for edge in &mut self.edges {
            edge.fidelity = Some(fidelity);
        }
        Ok(self)
    }

    /// Serialize the specification to a file.
    pub fn write(&self, path: &Path) -> StaqResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(device = %self.name, path = %path.display(), "wrote staq device file");
        Ok(())
    }
}

fn check_fidelity(value: f64) -> StaqResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StaqError::InvalidFidelity { value })
    }
}

fn directed_records(coupling: &CouplingGraph) -> Vec<StaqEdge> {
    let mut pairs: Vec<_> = coupling.directed_edges().collect();
    pairs.sort_unstable();
    pairs
        .into_iter()
        .map(|(control, target)| StaqEdge {
            control,
            target,
            fidelity: None,
        })
        .collect()
}

fn complete_records(num_qubits: u32) -> Vec<StaqEdge> {
    let mut edges = Vec::new();
    for control in 0..num_qubits {
        for target in 0..num_qubits {
            if control != target {
                edges.push(StaqEdge {
                    control,
                    target,
                    fidelity: None,
                });
            }
        }
    }
    edges
}
