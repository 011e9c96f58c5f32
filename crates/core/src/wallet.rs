//! Player wallet state.

use crate::address::Address;
use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Balance given to every newly created wallet.
pub const INITIAL_BALANCE: Amount = Amount::from_bon(1000);

/// The player's wallet.
///
/// Serialized as `{ displayName, address, balance }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Name shown on the dashboard.
    pub display_name: String,
    /// Random placeholder address.
    pub address: Address,
    /// Spendable balance.
    pub balance: Amount,
}

impl Wallet {
    /// Create a wallet with a fresh random address and the given balance.
    pub fn generate(display_name: impl Into<String>, balance: Amount) -> Self {
        Self {
            display_name: display_name.into(),
            address: Address::random(),
            balance,
        }
    }

    /// Subtract from the balance.
    /// Returns true if successful, false if insufficient balance.
    pub fn debit(&mut self, amount: Amount) -> bool {
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let wallet = Wallet::generate("Ada", INITIAL_BALANCE);
        assert_eq!(wallet.display_name, "Ada");
        assert_eq!(wallet.balance.to_string(), "1000");
        assert_eq!(wallet.address.to_hex().len(), 42);
    }

    #[test]
    fn test_debit() {
        let mut wallet = Wallet::generate("Ada", Amount::from_bon(100));

        assert!(wallet.debit(Amount::from_bon(60)));
        assert_eq!(wallet.balance, Amount::from_bon(40));

        assert!(!wallet.debit(Amount::from_bon(41))); // Insufficient balance
        assert_eq!(wallet.balance, Amount::from_bon(40)); // Balance unchanged

        assert!(wallet.debit(Amount::from_bon(40)));
        assert!(wallet.balance.is_zero());
    }

    #[test]
    fn test_json_layout() {
        let wallet = Wallet {
            display_name: "Ada".into(),
            address: Address([0xAB; 20]),
            balance: Amount::from_units(899_998_950_000),
        };
        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(json["displayName"], "Ada");
        assert_eq!(json["address"], format!("0x{}", "ab".repeat(20)));
        assert_eq!(json["balance"], "899.99895");

        let back: Wallet = serde_json::from_value(json).unwrap();
        assert_eq!(back, wallet);
    }
}
