//! Persistent storage layer for the bonsai wallet.
//!
//! The game keeps exactly one durable record: the player's wallet. It lives
//! under a single key in an embedded sled database, bincode-encoded.
//! The ledger is deliberately not stored here; it resets with the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use bonsai_core::{Wallet, INITIAL_BALANCE};
//! use bonsai_storage::{Storage, WalletStore};
//!
//! let storage = Storage::open("./data").unwrap();
//! let store = WalletStore::new(&storage);
//! store.save(&Wallet::generate("Ada", INITIAL_BALANCE)).unwrap();
//! assert!(store.load().unwrap().is_some());
//! ```

pub mod db;
pub mod wallet;

// Re-export commonly used types
pub use db::{Result, Storage, StorageError};
pub use wallet::{WalletStore, WALLET_KEY};
