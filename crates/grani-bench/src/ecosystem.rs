//! Supported compiler ecosystems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// A compiler ecosystem with an adapter in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Qiskit.
    Qiskit,
    /// Tket.
    Tket,
    /// BQSKit.
    Bqskit,
    /// Staq.
    Staq,
}

impl Ecosystem {
    /// All supported ecosystems.
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::Qiskit,
        Ecosystem::Tket,
        Ecosystem::Bqskit,
        Ecosystem::Staq,
    ];

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Ecosystem::Qiskit => "qiskit",
            Ecosystem::Tket => "tket",
            Ecosystem::Bqskit => "bqskit",
            Ecosystem::Staq => "staq",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ecosystem {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qiskit" => Ok(Ecosystem::Qiskit),
            "tket" => Ok(Ecosystem::Tket),
            "bqskit" => Ok(Ecosystem::Bqskit),
            "staq" => Ok(Ecosystem::Staq),
            other => Err(BenchError::UnsupportedEcosystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for ecosystem in Ecosystem::ALL {
            assert_eq!(ecosystem.to_string().parse::<Ecosystem>().unwrap(), ecosystem);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "cirq".parse::<Ecosystem>().unwrap_err();
        assert!(matches!(err, BenchError::UnsupportedEcosystem(name) if name == "cirq"));
    }
}
