//! Minimal representation of staq output for validation.
//!
//! Staq emits OpenQASM; only the instruction-level facts validation
//! needs are modeled here, matching the other adapters' circuit shapes.

use serde::{Deserialize, Serialize};

/// One instruction in staq output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaqInstruction {
    /// Gate name, lowercase.
    pub name: String,
    /// Qubit indices the instruction acts on.
    pub qubits: Vec<u32>,
}

impl StaqInstruction {
    /// Build an instruction from a gate name and qubit indices.
    pub fn new(name: impl Into<String>, qubits: impl Into<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into(),
        }
    }
}

/// Staq output as a flat instruction sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaqCircuit {
    instructions: Vec<StaqInstruction>,
}

impl StaqCircuit {
    /// An empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from an instruction sequence.
    pub fn from_instructions(instructions: Vec<StaqInstruction>) -> Self {
        Self { instructions }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: StaqInstruction) {
        self.instructions.push(instruction);
    }

    /// The instruction sequence.
    pub fn instructions(&self) -> &[StaqInstruction] {
        &self.instructions
    }
}
