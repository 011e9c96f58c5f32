//! Fixed-point BON amounts.
//!
//! Every balance, transfer amount and fee is counted in nano-BON
//! (`1 BON = 10^9` units). Gas fees are `21000 * gas_price` units, so the
//! fee formula stays exact without floating point.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits carried by an [`Amount`].
pub const DECIMALS: u32 = 9;

/// Units per whole BON.
pub const UNITS_PER_BON: u64 = 1_000_000_000;

/// Errors from parsing a decimal amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount: {0}")]
    Invalid(String),

    #[error("too many decimal places (max 9): {0}")]
    TooPrecise(String),

    #[error("amount out of range: {0}")]
    Overflow(String),
}

/// A non-negative BON amount in nano-BON units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Amount from raw nano-BON units.
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Amount from whole BON. Saturates on overflow.
    pub const fn from_bon(bon: u64) -> Self {
        Self(bon.saturating_mul(UNITS_PER_BON))
    }

    /// Raw nano-BON units.
    pub const fn units(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Sum that stops at the largest amount. Only for reporting totals,
    /// never for balances.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    /// Format with exactly `places` fractional digits, rounding half up.
    ///
    /// `Amount::from_units(1_050_000).fixed(6)` is `"0.001050"`.
    pub fn fixed(&self, places: u32) -> String {
        let places = places.min(DECIMALS);
        let drop = 10u64.pow(DECIMALS - places);
        let mut scaled = self.0 / drop;
        if self.0 % drop >= drop / 2 && drop > 1 {
            scaled += 1;
        }
        if places == 0 {
            return scaled.to_string();
        }
        let unit = 10u64.pow(places);
        format!(
            "{}.{:0width$}",
            scaled / unit,
            scaled % unit,
            width = places as usize
        )
    }
}

impl fmt::Display for Amount {
    /// Shortest exact decimal form: `1000`, `0.00105`, `899.99895`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_BON;
        let frac = self.0 % UNITS_PER_BON;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:09}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmountError::Invalid(s.to_string()));
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(AmountError::Invalid(s.to_string()));
        }
        if frac.len() > DECIMALS as usize {
            return Err(AmountError::TooPrecise(s.to_string()));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| AmountError::Overflow(s.to_string()))?
        };
        let frac_units: u64 = if frac.is_empty() {
            0
        } else {
            // Right-pad to nine digits: "5" -> 500_000_000
            format!("{:0<9}", frac)
                .parse()
                .map_err(|_| AmountError::Invalid(s.to_string()))?
        };

        whole
            .checked_mul(UNITS_PER_BON)
            .and_then(|w| w.checked_add(frac_units))
            .map(Amount)
            .ok_or_else(|| AmountError::Overflow(s.to_string()))
    }
}

// Human-readable formats carry the decimal string, bincode the raw units.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Ok(Amount(u64::deserialize(deserializer)?))
        }
    }
}
