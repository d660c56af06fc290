//! Tket operation types.
//!
//! Tket identifies operations by `OpType`, not by gate-name strings, so
//! the adapter translates the model's lowercase gate names into typed
//! variants up front. The mapping covers the gate names a device basis
//! set can realistically carry; anything outside it is rejected during
//! adaptation rather than at validation time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Tket operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OpType {
    /// Identity.
    Noop,
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
    SX,
    /// Inverse square root of X.
    SXdg,
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
    CX,
    /// Controlled Y.
    CY,
    /// Controlled Z.
    CZ,
    /// Controlled Hadamard.
    CH,
    /// Controlled X rotation.
    CRx,
    /// Controlled Y rotation.
    CRy,
    /// Controlled Z rotation.
    CRz,
    /// Controlled phase rotation.
    CU1,
    /// Controlled general rotation.
    CU3,
    /// Echoed cross-resonance.
    ECR,
    /// Qubit swap.
    SWAP,
    /// XX interaction.
    XXPhase,
    /// YY interaction.
    YYPhase,
    /// ZZ interaction.
    ZZPhase,
    /// Toffoli.
    CCX,
    /// Controlled swap.
    CSWAP,
    /// Barrier directive.
    Barrier,
    /// Projective measurement.
    Measure,
    /// Qubit reset.
    Reset,
}

impl OpType {
    /// Translate a lowercase gate name into its `OpType`.
    ///
    /// Returns `None` for names Tket has no operation for.
    pub fn from_gate_name(name: &str) -> Option<Self> {
        let op = match name {
            "id" => Self::Noop,
            "x" => Self::X,
            "y" => Self::Y,
            "z" => Self::Z,
            "h" => Self::H,
            "s" => Self::S,
            "sdg" => Self::Sdg,
            "t" => Self::T,
            "tdg" => Self::Tdg,
            "sx" => Self::SX,
            "sxdg" => Self::SXdg,
            "rx" => Self::Rx,
            "ry" => Self::Ry,
            "rz" => Self::Rz,
            "p" | "u1" => Self::U1,
            "u2" => Self::U2,
            "u" | "u3" => Self::U3,
            "cx" => Self::CX,
            "cy" => Self::CY,
            "cz" => Self::CZ,
            "ch" => Self::CH,
            "crx" => Self::CRx,
            "cry" => Self::CRy,
            "crz" => Self::CRz,
            "cp" | "cu1" => Self::CU1,
            "cu" | "cu3" => Self::CU3,
            "ecr" => Self::ECR,
            "swap" => Self::SWAP,
            "rxx" => Self::XXPhase,
            "ryy" => Self::YYPhase,
            "rzz" => Self::ZZPhase,
            "ccx" => Self::CCX,
            "cswap" => Self::CSWAP,
            "barrier" => Self::Barrier,
            "measure" => Self::Measure,
            "reset" => Self::Reset,
            _ => return None,
        };
        Some(op)
    }

    /// The Tket name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::Sdg => "Sdg",
            Self::T => "T",
            Self::Tdg => "Tdg",
            Self::SX => "SX",
            Self::SXdg => "SXdg",
            Self::Rx => "Rx",
            Self::Ry => "Ry",
            Self::Rz => "Rz",
            Self::U1 => "U1",
            Self::U2 => "U2",
            Self::U3 => "U3",
            Self::CX => "CX",
            Self::CY => "CY",
            Self::CZ => "CZ",
            Self::CH => "CH",
            Self::CRx => "CRx",
            Self::CRy => "CRy",
            Self::CRz => "CRz",
            Self::CU1 => "CU1",
            Self::CU3 => "CU3",
            Self::ECR => "ECR",
            Self::SWAP => "SWAP",
            Self::XXPhase => "XXPhase",
            Self::YYPhase => "YYPhase",
            Self::ZZPhase => "ZZPhase",
            Self::CCX => "CCX",
            Self::CSWAP => "CSWAP",
            Self::Barrier => "Barrier",
            Self::Measure => "Measure",
            Self::Reset => "Reset",
        }
    }

    /// Whether this operation entangles exactly two qubits.
    pub fn is_two_qubit(&self) -> bool {
        matches!(
            self,
            Self::CX
                | Self::CY
                | Self::CZ
                | Self::CH
                | Self::CRx
                | Self::CRy
                | Self::CRz
                | Self::CU1
                | Self::CU3
                | Self::ECR
                | Self::SWAP
                | Self::XXPhase
                | Self::YYPhase
                | Self::ZZPhase
        )
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
