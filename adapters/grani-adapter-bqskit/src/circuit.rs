//! Minimal BQSKit circuit representation for validation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::gate::BqskitGate;

/// One operation in a compiled circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BqskitOperation {
    /// The gate applied.
    pub gate: BqskitGate,
    /// Qudit location the gate acts on.
    pub location: Vec<u32>,
}

impl BqskitOperation {
    /// Build an operation from a gate and its location.
    pub fn new(gate: BqskitGate, location: impl Into<Vec<u32>>) -> Self {
        Self {
            gate,
            location: location.into(),
        }
    }
}

/// A compiled circuit as a flat operation sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BqskitCircuit {
    operations: Vec<BqskitOperation>,
}

impl BqskitCircuit {
    /// An empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from an operation sequence.
    pub fn from_operations(operations: Vec<BqskitOperation>) -> Self {
        Self { operations }
    }

    /// Append an operation.
    pub fn push(&mut self, operation: BqskitOperation) {
        self.operations.push(operation);
    }

    /// The operation sequence.
    pub fn operations(&self) -> &[BqskitOperation] {
        &self.operations
    }

    /// Gate histogram over the circuit.
    pub fn gate_counts(&self) -> FxHashMap<BqskitGate, usize> {
        let mut counts = FxHashMap::default();
        for operation in &self.operations {
            *counts.entry(operation.gate).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_counts() {
        let circuit = BqskitCircuit::from_operations(vec![
            BqskitOperation::new(BqskitGate::U3, [0]),
            BqskitOperation::new(BqskitGate::Cx, [0, 1]),
            BqskitOperation::new(BqskitGate::Cx, [1, 2]),
        ]);
        let counts = circuit.gate_counts();
        assert_eq!(counts[&BqskitGate::Cx], 2);
        assert_eq!(counts[&BqskitGate::U3], 1);
    }
}
