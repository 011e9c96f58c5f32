//! Core primitives for the bonsai ledger.
//!
//! This crate provides the fundamental types used throughout the game:
//! - Hashing and random identifiers
//! - Wallet addresses
//! - Fixed-point BON amounts
//! - Gas tiers and fee estimation
//! - Wallets and transactions

pub mod address;
pub mod amount;
pub mod fee;
pub mod hash;
pub mod transaction;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use address::{Address, AddressError};
pub use amount::{Amount, AmountError, UNITS_PER_BON};
pub use fee::{fee_for_gas_price, GasTier, UnknownTier, TRANSFER_GAS};
pub use hash::{hash, hash_concat, Hash, H256};
pub use transaction::Transaction;
pub use wallet::{Wallet, INITIAL_BALANCE};
