//! Transaction records.

use crate::address::Address;
use crate::amount::Amount;
use crate::hash::{hash_concat, Hash};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A transfer recorded on the ledger.
///
/// Everything except `block_number` is fixed at construction; the ledger
/// assigns the block number when the transaction is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction hash.
    pub hash: Hash,
    /// Sender's wallet address.
    pub from_address: Address,
    /// Recipient, as typed by the user. Not validated.
    pub to_address: String,
    /// Value transferred.
    pub amount: Amount,
    /// Gas fee paid on top of the amount.
    pub fee: Amount,
    /// Block label, `None` until appended.
    pub block_number: Option<u64>,
}

/// Fields covered by the transaction hash.
#[derive(Serialize)]
struct HashedFields<'a> {
    from: &'a Address,
    to: &'a str,
    amount: Amount,
    fee: Amount,
}

impl Transaction {
    /// Create a transfer with a freshly generated hash.
    ///
    /// The hash mixes the transfer fields with random salt, so repeating the
    /// same transfer yields a different hash. Balance checks happen before
    /// this is called.
    pub fn transfer(from: Address, to: impl Into<String>, amount: Amount, fee: Amount) -> Self {
        let to_address = to.into();
        let hash = Self::fresh_hash(&from, &to_address, amount, fee);
        Self {
            hash,
            from_address: from,
            to_address,
            amount,
            fee,
            block_number: None,
        }
    }

    fn fresh_hash(from: &Address, to: &str, amount: Amount, fee: Amount) -> Hash {
        let fields = HashedFields {
            from,
            to,
            amount,
            fee,
        };
        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        match bincode::serialize(&fields) {
            Ok(encoded) => hash_concat(&[&encoded, &salt]),
            // Nothing here can fail to encode, but a random id is an acceptable fallback.
            Err(_) => Hash::random(),
        }
    }

    /// Total debited from the sender: amount plus fee.
    /// `None` if the sum does not fit in an [`Amount`].
    pub fn total_cost(&self) -> Option<Amount> {
        self.amount.checked_add(self.fee)
    }
}
