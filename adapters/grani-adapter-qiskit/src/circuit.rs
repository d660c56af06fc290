//! Minimal Qiskit circuit representation for validation.
//!
//! Only the parts of a transpiled circuit that validation inspects are
//! modeled: the flat instruction list with gate names and qubit indices.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One instruction in a transpiled circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QiskitInstruction {
    /// Gate name, lowercase.
    pub name: String,
    /// Qubit indices the instruction acts on.
    pub qubits: Vec<u32>,
}

impl QiskitInstruction {
    /// Build an instruction from a gate name and qubit indices.
    pub fn new(name: impl Into<String>, qubits: impl Into<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into(),
        }
    }
}

/// A transpiled circuit as a flat instruction sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QiskitCircuit {
    instructions: Vec<QiskitInstruction>,
}

impl QiskitCircuit {
    /// An empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from an instruction sequence.
    pub fn from_instructions(instructions: Vec<QiskitInstruction>) -> Self {
        Self { instructions }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: QiskitInstruction) {
        self.instructions.push(instruction);
    }

    /// The instruction sequence.
    pub fn instructions(&self) -> &[QiskitInstruction] {
        &self.instructions
    }

    /// Gate-name histogram over the circuit.
    pub fn count_ops(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for instruction in &self.instructions {
            *counts.entry(instruction.name.clone()).or_insert(0) += 1;
        }
        counts
    }
}
