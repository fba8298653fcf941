//! Chain identifiers shared by every adapter.
//!
//! Identifiers are the lowercase names used by the analytics sources
//! and by the adapter registry (`"ethereum"`, `"bsc"`, `"sei"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blockchains with at least one registered adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet.
    Ethereum,
    /// BNB Smart Chain.
    Bsc,
    /// Sei network.
    Sei,
}

impl Chain {
    /// Every supported chain, in registry order.
    pub const ALL: [Self; 3] = [Self::Ethereum, Self::Bsc, Self::Sei];

    /// Identifier as sent to analytics endpoints.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Bsc => "bsc",
            Self::Sei => "sei",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown chain identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain identifier: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for chain in Chain::ALL {
            let json = serde_json::to_string(&chain).unwrap();
            assert_eq!(json, format!("\"{chain}\""));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BSC".parse::<Chain>().unwrap(), Chain::Bsc);
        assert_eq!("ethereum".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert!("solana".parse::<Chain>().is_err());
    }
}
