//! Shared validation core for compiled circuits.
//!
//! The check has the same shape for every ecosystem: the set of gate
//! names used by the circuit must fall inside the device basis (plus the
//! ecosystem's barrier/measurement spellings), and on a constrained
//! topology every application of the entangling gate must land on a
//! coupling edge. Only the circuit introspection differs per ecosystem,
//! so the adapters feed the extracted names and qubit pairs into the
//! helpers here.

use rustc_hash::FxHashSet;
use thiserror::Error;

use grani_topology::CouplingGraph;

/// A structured validation failure, scoped to one benchmark case.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Circuit uses gates outside the device basis set.
    #[error("Circuit has gates outside backend basis set: {gates:?}")]
    GateSetViolation {
        /// Offending gate names, sorted.
        gates: Vec<String>,
    },

    /// Two-qubit gates applied across qubit pairs the device does not couple.
    #[error("Two-qubit gate edges not in backend topology: {pairs:?}")]
    TopologyViolation {
        /// Offending qubit pairs, sorted, in circuit orientation.
        pairs: Vec<(u32, u32)>,
    },
}

/// Result type for circuit validation.
pub type ValidationResult = Result<(), ValidationError>;

/// Check that every used gate name is allowed.
///
/// `allowed` is the device basis plus whatever barrier/measurement
/// spellings the ecosystem uses. All offending names are collected so a
/// failed benchmark case reports every violation at once.
pub fn check_gate_set(
    used: impl IntoIterator<Item = String>,
    allowed: &FxHashSet<String>,
) -> ValidationResult {
    let mut offending: Vec<String> = used
        .into_iter()
        .filter(|gate| !allowed.contains(gate))
        .collect();
    if offending.is_empty() {
        return Ok(());
    }
    offending.sort_unstable();
    offending.dedup();
    Err(ValidationError::GateSetViolation { gates: offending })
}

/// Check that every two-qubit application lands on a coupling edge.
///
/// Membership is order-independent. Callers skip this check entirely
/// when the device is all-to-all or its coupling graph is complete.
pub fn check_two_qubit_edges(
    pairs: impl IntoIterator<Item = (u32, u32)>,
    coupling: &CouplingGraph,
) -> ValidationResult {
    let mut offending: Vec<(u32, u32)> = pairs
        .into_iter()
        .filter(|&(a, b)| !coupling.contains(a, b))
        .collect();
    if offending.is_empty() {
        return Ok(());
    }
    offending.sort_unstable();
    offending.dedup();
    Err(ValidationError::TopologyViolation { pairs: offending })
}

/// Build the allowed-name set from basis gates plus ecosystem extras.
pub fn allowed_gate_names<'a>(
    basis_gates: impl IntoIterator<Item = &'a String>,
    extras: &[&str],
) -> FxHashSet<String> {
    basis_gates
        .into_iter()
        .cloned()
        .chain(extras.iter().map(|extra| (*extra).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> FxHashSet<String> {
        ["rz", "sx", "x", "cx", "barrier", "measure"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_gate_set_ok() {
        let used = ["rz", "cx", "barrier"].map(String::from);
        assert!(check_gate_set(used, &allowed()).is_ok());
    }

    #[test]
    fn test_gate_set_violation_names_offenders() {
        let used = ["rz", "h", "cz", "h"].map(String::from);
        let err = check_gate_set(used, &allowed()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GateSetViolation {
                gates: vec!["cz".to_string(), "h".to_string()],
            }
        );
    }

    #[test]
    fn test_edge_check_order_independent() {
        let coupling = CouplingGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert!(check_two_qubit_edges([(1, 0), (2, 1)], &coupling).is_ok());
    }

    #[test]
    fn test_edge_violation_names_pair() {
        let coupling = CouplingGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let err = check_two_qubit_edges([(0, 1), (0, 2)], &coupling).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TopologyViolation {
                pairs: vec![(0, 2)],
            }
        );
    }

    #[test]
    fn test_allowed_gate_names() {
        let basis = vec!["rz".to_string(), "cx".to_string()];
        let allowed = allowed_gate_names(&basis, &["barrier", "measure"]);
        assert!(allowed.contains("cx"));
        assert!(allowed.contains("barrier"));
        assert!(!allowed.contains("h"));
    }
}
