//! Minimal Tket circuit representation for validation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::optype::OpType;

/// One command in a compiled circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TketCommand {
    /// Operation type.
    pub op: OpType,
    /// Qubit indices the command acts on.
    pub qubits: Vec<u32>,
}

impl TketCommand {
    /// Build a command from an operation type and qubit indices.
    pub fn new(op: OpType, qubits: impl Into<Vec<u32>>) -> Self {
        Self {
            op,
            qubits: qubits.into(),
        }
    }
}

/// A compiled circuit as a flat command sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TketCircuit {
    commands: Vec<TketCommand>,
}

impl TketCircuit {
    /// An empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from a command sequence.
    pub fn from_commands(commands: Vec<TketCommand>) -> Self {
        Self { commands }
    }

    /// Append a command.
    pub fn push(&mut self, command: TketCommand) {
        self.commands.push(command);
    }

    /// The command sequence.
    pub fn commands(&self) -> &[TketCommand] {
        &self.commands
    }

    /// Operation-type histogram over the circuit.
    pub fn count_ops(&self) -> FxHashMap<OpType, usize> {
        let mut counts = FxHashMap::default();
        for command in &self.commands {
            *counts.entry(command.op).or_insert(0) += 1;
        }
        counts
    }

    /// Number of commands of the given operation type.
    pub fn n_gates_of_type(&self, op: OpType) -> usize {
        self.commands
            .iter()
            .filter(|command| command.op == op)
            .count()
    }
}
