//! Persisted wallet slot.

use crate::db::{Result, Storage};
use bonsai_core::Wallet;
use tracing::debug;

/// Key holding the serialized wallet.
pub const WALLET_KEY: &str = "wallet";

/// Reads and writes the single persisted wallet entry.
pub struct WalletStore<'a> {
    storage: &'a Storage,
}

impl<'a> WalletStore<'a> {
    /// Create a new WalletStore wrapping the given storage.
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the saved wallet, if any.
    pub fn load(&self) -> Result<Option<Wallet>> {
        self.storage.get(WALLET_KEY)
    }

    /// Overwrite the saved wallet and flush it to disk.
    pub fn save(&self, wallet: &Wallet) -> Result<()> {
        self.storage.put(WALLET_KEY, wallet)?;
        self.storage.flush()?;
        debug!(address = %wallet.address, balance = %wallet.balance, "wallet saved");
        Ok(())
    }

    /// Remove the saved wallet and flush the removal.
    pub fn clear(&self) -> Result<()> {
        self.storage.delete(WALLET_KEY)?;
        self.storage.flush()?;
        debug!("wallet cleared");
        Ok(())
    }
}
