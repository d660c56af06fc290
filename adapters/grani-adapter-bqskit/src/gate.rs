//! BQSKit gate identifiers.
//!
//! BQSKit names gates by their QASM spelling, with `barrier` and
//! `measurement` as non-gate placeholders. The echoed cross-resonance
//! gate is defined here explicitly with its unitary; it is the one
//! recognized two-qubit gate the upstream gate registry lacks.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A gate in BQSKit's identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum BqskitGate {
    /// Identity.
    Identity,
    /// Pauli X.
    X,
    /// Pauli Y.
    Y,
    /// Pauli Z.
    Z,
    /// Hadamard.
    H,
    /// Phase gate S.
    S,
    /// Inverse of S.
    Sdg,
    /// T gate.
    T,
    /// Inverse of T.
    Tdg,
    /// Square root of X.
    Sx,
    /// X rotation.
    Rx,
    /// Y rotation.
    Ry,
    /// Z rotation.
    Rz,
    /// Single-parameter phase rotation.
    U1,
    /// Two-parameter rotation.
    U2,
    /// General single-qubit rotation.
    U3,
    /// Controlled X.
    Cx,
    /// Controlled Y.
    Cy,
    /// Controlled Z.
    Cz,
    /// Controlled Hadamard.
    Ch,
    /// Echoed cross-resonance.
    Ecr,
    /// Qubit swap.
    Swap,
    /// Toffoli.
    Ccx,
    /// Barrier placeholder.
    Barrier,
    /// Measurement placeholder.
    Measurement,
}

impl BqskitGate {
    /// Translate a lowercase gate name into its BQSKit gate.
    ///
    /// Returns `None` for names BQSKit's registry does not cover.
    pub fn from_gate_name(name: &str) -> Option<Self> {
        let gate = match name {
            "id" => Self::Identity,
            "x" => Self::X,
            "y" => Self::Y,
            "z" => Self::Z,
            "h" => Self::H,
            "s" => Self::S,
            "sdg" => Self::Sdg,
            "t" => Self::T,
            "tdg" => Self::Tdg,
            "sx" => Self::Sx,
            "rx" => Self::Rx,
            "ry" => Self::Ry,
            "rz" => Self::Rz,
            "p" | "u1" => Self::U1,
            "u2" => Self::U2,
            "u" | "u3" => Self::U3,
            "cx" => Self::Cx,
            "cy" => Self::Cy,
            "cz" => Self::Cz,
            "ch" => Self::Ch,
            "ecr" => Self::Ecr,
            "swap" => Self::Swap,
            "ccx" => Self::Ccx,
            "barrier" => Self::Barrier,
            "measure" | "measurement" => Self::Measurement,
            _ => return None,
        };
        Some(gate)
    }

    /// The BQSKit name of this gate.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "id",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::H => "h",
            Self::S => "s",
            Self::Sdg => "sdg",
            Self::T => "t",
            Self::Tdg => "tdg",
            Self::Sx => "sx",
            Self::Rx => "rx",
            Self::Ry => "ry",
            Self::Rz => "rz",
            Self::U1 => "u1",
            Self::U2 => "u2",
            Self::U3 => "u3",
            Self::Cx => "cx",
            Self::Cy => "cy",
            Self::Cz => "cz",
            Self::Ch => "ch",
            Self::Ecr => "ecr",
            Self::Swap => "swap",
            Self::Ccx => "ccx",
            Self::Barrier => "barrier",
            Self::Measurement => "measurement",
        }
    }

    /// Number of qudits this gate acts on.
    pub fn num_qudits(&self) -> u32 {
        match self {
            Self::Ccx => 3,
            Self::Cx | Self::Cy | Self::Cz | Self::Ch | Self::Ecr | Self::Swap => 2,
            Self::Barrier | Self::Measurement => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for BqskitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The unitary of the echoed cross-resonance gate.
///
/// ```text
/// sqrt(1/2) * |  0   0   1   i |
///             |  0   0   i   1 |
///             |  1  -i   0   0 |
///             | -i   1   0   0 |
/// ```
pub fn ecr_unitary() -> [[Complex64; 4]; 4] {
    let w = (0.5_f64).sqrt();
    let z = Complex64::new(0.0, 0.0);
    let r = Complex64::new(w, 0.0);
    let i = Complex64::new(0.0, w);
    [
        [z, z, r, i],
        [z, z, i, r],
        [r, -i, z, z],
        [-i, r, z, z],
    ]
}
