//! Gas tiers and fee estimation.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gas used by a plain value transfer.
pub const TRANSFER_GAS: u64 = 21_000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown gas tier '{0}' (expected slow, medium or fast)")]
pub struct UnknownTier(pub String);

/// A named gas-price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasTier {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl GasTier {
    pub const ALL: [GasTier; 3] = [GasTier::Slow, GasTier::Medium, GasTier::Fast];

    /// Gwei-equivalent gas price for this tier.
    pub const fn gas_price(self) -> u64 {
        match self {
            GasTier::Slow => 20,
            GasTier::Medium => 50,
            GasTier::Fast => 100,
        }
    }

    /// Fee charged for a transfer at this tier.
    pub fn fee(self) -> Amount {
        fee_for_gas_price(self.gas_price())
    }

    pub fn name(self) -> &'static str {
        match self {
            GasTier::Slow => "slow",
            GasTier::Medium => "medium",
            GasTier::Fast => "fast",
        }
    }
}

impl fmt::Display for GasTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GasTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(GasTier::Slow),
            "medium" => Ok(GasTier::Medium),
            "fast" => Ok(GasTier::Fast),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// `fee = 21000 * gas_price / 1e9` BON, i.e. `21000 * gas_price` nano-BON.
pub fn fee_for_gas_price(gas_price: u64) -> Amount {
    Amount::from_units(TRANSFER_GAS.saturating_mul(gas_price))
}
