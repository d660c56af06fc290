//! Qiskit standard-gate name registry.

/// Gate names Qiskit's standard library defines (OpenQASM naming).
///
/// A device basis gate outside this table cannot be rendered into a
/// Qiskit target and fails adaptation.
pub const STANDARD_GATES: &[&str] = &[
    // Single-qubit
    "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "sx", "sxdg", "rx", "ry", "rz", "p", "u",
    "u1", "u2", "u3",
    // Two-qubit
    "cx", "cy", "cz", "ch", "cs", "csx", "swap", "iswap", "ecr", "dcx", "crx", "cry", "crz", "cp",
    "cu", "rxx", "ryy", "rzz", "rzx", "xx_plus_yy", "xx_minus_yy",
    // Three-qubit
    "ccx", "ccz", "cswap", "rccx",
];

/// Whether Qiskit's standard library defines this gate name.
pub fn is_standard_gate(name: &str) -> bool {
    STANDARD_GATES.contains(&name)
}
