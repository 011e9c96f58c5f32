//! Learning topics and tree maturity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maturity is a percentage; trees stop growing at this value.
pub const MAX_MATURITY: u8 = 100;

/// Increase maturity without exceeding [`MAX_MATURITY`].
pub fn apply_growth(current: u8, growth: u8) -> u8 {
    current.saturating_add(growth).min(MAX_MATURITY)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown seed '{0}'")]
pub struct UnknownSeed(pub String);

/// A Web3 topic a tree can be grown from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seed {
    Defi,
    Nft,
    SmartContracts,
    Daos,
    Blockchain,
    Security,
    Layer2,
    Tokenomics,
}

impl Seed {
    pub const ALL: [Seed; 8] = [
        Seed::Defi,
        Seed::Nft,
        Seed::SmartContracts,
        Seed::Daos,
        Seed::Blockchain,
        Seed::Security,
        Seed::Layer2,
        Seed::Tokenomics,
    ];

    /// Display title shown under the tree.
    pub fn title(self) -> &'static str {
        match self {
            Seed::Defi => "DeFi Basics",
            Seed::Nft => "NFTs & Digital Ownership",
            Seed::SmartContracts => "Smart Contracts",
            Seed::Daos => "DAOs",
            Seed::Blockchain => "Blockchain Fundamentals",
            Seed::Security => "Web3 Security",
            Seed::Layer2 => "Layer 2 Solutions",
            Seed::Tokenomics => "Token Economics",
        }
    }

    /// Short name accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Seed::Defi => "defi",
            Seed::Nft => "nft",
            Seed::SmartContracts => "smart-contracts",
            Seed::Daos => "daos",
            Seed::Blockchain => "blockchain",
            Seed::Security => "security",
            Seed::Layer2 => "layer2",
            Seed::Tokenomics => "tokenomics",
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Seed {
    type Err = UnknownSeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Seed::ALL
            .into_iter()
            .find(|seed| seed.slug() == wanted || seed.title().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownSeed(s.to_string()))
    }
}
