//! Named topology families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// The topology families a flexible device can be laid out on.
///
/// Family names use the spelling accepted in benchmark configuration:
/// `square`, `heavy-hex`, `linear`, `tree`, `torus`, `all-to-all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopologyFamily {
    /// Square grid, 4-neighbor, no wraparound.
    Square,
    /// Heavy-hex lattice (IBM Eagle/Heron style).
    HeavyHex,
    /// Linear chain.
    Linear,
    /// Complete binary tree.
    Tree,
    /// Torus: rings coupled in two wraparound dimensions.
    Torus,
    /// Fully connected; rendered as "no coupling restriction".
    AllToAll,
}

impl TopologyFamily {
    /// All families, in configuration order.
    pub const ALL: [TopologyFamily; 6] = [
        TopologyFamily::Square,
        TopologyFamily::HeavyHex,
        TopologyFamily::Linear,
        TopologyFamily::Tree,
        TopologyFamily::Torus,
        TopologyFamily::AllToAll,
    ];

    /// The configuration name of this family.
    pub fn name(&self) -> &'static str {
        match self {
            TopologyFamily::Square => "square",
            TopologyFamily::HeavyHex => "heavy-hex",
            TopologyFamily::Linear => "linear",
            TopologyFamily::Tree => "tree",
            TopologyFamily::Torus => "torus",
            TopologyFamily::AllToAll => "all-to-all",
        }
    }
}

impl fmt::Display for TopologyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TopologyFamily {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(TopologyFamily::Square),
            "heavy-hex" => Ok(TopologyFamily::HeavyHex),
            "linear" => Ok(TopologyFamily::Linear),
            "tree" => Ok(TopologyFamily::Tree),
            "torus" => Ok(TopologyFamily::Torus),
            "all-to-all" => Ok(TopologyFamily::AllToAll),
            other => Err(TopologyError::UnknownFamily(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for family in TopologyFamily::ALL {
            assert_eq!(family.name().parse::<TopologyFamily>().unwrap(), family);
        }
    }

    #[test]
    fn test_unknown_family() {
        let err = "hexagon".parse::<TopologyFamily>().unwrap_err();
        assert!(matches!(err, TopologyError::UnknownFamily(name) if name == "hexagon"));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&TopologyFamily::HeavyHex).unwrap();
        assert_eq!(json, "\"heavy-hex\"");
        let back: TopologyFamily = serde_json::from_str("\"all-to-all\"").unwrap();
        assert_eq!(back, TopologyFamily::AllToAll);
    }
}
