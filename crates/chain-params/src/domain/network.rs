//! Network identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four logical networks a node can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NetworkId {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "test")]
    Testnet,
    #[serde(rename = "regtest")]
    Regtest,
    #[serde(rename = "unittest")]
    UnitTest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::UnitTest,
    ];

    /// Canonical short name, also used as the data directory suffix.
    pub const fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A network name that matches none of the known networks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for NetworkId {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for id in NetworkId::ALL {
            assert_eq!(id.name().parse::<NetworkId>(), Ok(id));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("MainNet".parse::<NetworkId>(), Ok(NetworkId::Main));
        assert_eq!(" testnet ".parse::<NetworkId>(), Ok(NetworkId::Testnet));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            "signet".parse::<NetworkId>(),
            Err(UnknownNetwork("signet".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_short_names() {
        let json = serde_json::to_string(&NetworkId::Testnet).unwrap();
        assert_eq!(json, "\"test\"");
    }
}
