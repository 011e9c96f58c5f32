//! Session context: the wallet, the ledger and the wallet store.
//!
//! One `Session` is built at process start and handed to the flow
//! controller. It is the only owner of the wallet and ledger; nothing else
//! keeps them in globals.

use crate::journey::DEFAULT_STEP_DELAY;
use crate::ledger::Ledger;
use bonsai_core::{Amount, GasTier, Transaction, Wallet, INITIAL_BALANCE};
use bonsai_storage::{StorageError, WalletStore};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("enter a wallet name")]
    MissingName,

    #[error("no wallet yet; create one first")]
    NoWallet,

    #[error("insufficient balance: need {amount} + {fee} BON, have {available} BON")]
    InsufficientBalance {
        amount: Amount,
        fee: Amount,
        available: Amount,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Balance given to a newly created wallet.
    pub initial_balance: Amount,
    /// Delay between journey animation steps.
    pub journey_step: Duration,
    /// Gas tier preselected when composing a transfer.
    pub default_tier: GasTier,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            journey_step: DEFAULT_STEP_DELAY,
            default_tier: GasTier::default(),
        }
    }
}

/// Outcome of an executed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The transaction as recorded, block number included.
    pub transaction: Transaction,
    /// Wallet balance after the debit.
    pub balance_after: Amount,
}

impl Receipt {
    pub fn block_number(&self) -> u64 {
        self.transaction.block_number.unwrap_or_default()
    }
}

/// Wallet, ledger and store for one run of the game.
pub struct Session<'a> {
    store: WalletStore<'a>,
    wallet: Option<Wallet>,
    ledger: Ledger,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    /// Open a session, restoring the saved wallet if there is one.
    /// The ledger always starts empty.
    pub fn open(store: WalletStore<'a>, config: SessionConfig) -> Result<Self> {
        let wallet = store.load()?;
        if let Some(w) = &wallet {
            info!(address = %w.address, balance = %w.balance, "restored wallet");
        }
        Ok(Self {
            store,
            wallet,
            ledger: Ledger::new(),
            config,
        })
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Create and persist a new wallet, replacing any current one.
    pub fn create_wallet(&mut self, name: &str) -> Result<&Wallet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::MissingName);
        }

        let wallet = Wallet::generate(name, self.config.initial_balance);
        self.store.save(&wallet)?;
        info!(display_name = name, address = %wallet.address, "wallet created");

        Ok(&*self.wallet.insert(wallet))
    }

    /// Forget the saved wallet and return it. The ledger is left as is.
    pub fn reset_wallet(&mut self) -> Result<Option<Wallet>> {
        self.store.clear()?;
        let removed = self.wallet.take();
        if let Some(w) = &removed {
            info!(address = %w.address, "wallet reset");
        }
        Ok(removed)
    }

    /// Check that the wallet can pay `amount + fee`.
    pub fn check_affordable(&self, amount: Amount, fee: Amount) -> Result<()> {
        let wallet = self.wallet.as_ref().ok_or(SessionError::NoWallet)?;
        Self::charge(wallet, amount, fee).map(|_| ())
    }

    /// The wallet as it would be after paying `amount + fee`.
    ///
    /// A total that does not fit in an [`Amount`] can never be covered.
    fn charge(wallet: &Wallet, amount: Amount, fee: Amount) -> Result<Wallet> {
        let mut debited = wallet.clone();
        match amount.checked_add(fee) {
            Some(total) if debited.debit(total) => Ok(debited),
            _ => {
                warn!(%amount, %fee, available = %wallet.balance, "transfer rejected");
                Err(SessionError::InsufficientBalance {
                    amount,
                    fee,
                    available: wallet.balance,
                })
            }
        }
    }

    /// Build, record and pay for a transfer.
    ///
    /// Either all of it happens (transaction appended, balance debited and
    /// saved) or none of it does. The debited wallet is saved before the
    /// ledger is touched, so a storage failure leaves the session unchanged.
    pub fn commit_transfer(&mut self, to: &str, amount: Amount, fee: Amount) -> Result<Receipt> {
        let wallet = self.wallet.as_ref().ok_or(SessionError::NoWallet)?;
        let debited = Self::charge(wallet, amount, fee)?;
        let tx = Transaction::transfer(wallet.address, to, amount, fee);
        self.store.save(&debited)?;

        let recorded = self.ledger.append(tx).clone();
        info!(
            hash = %recorded.hash,
            block = recorded.block_number.unwrap_or_default(),
            amount = %recorded.amount,
            fee = %recorded.fee,
            "transfer committed"
        );

        let balance_after = debited.balance;
        self.wallet = Some(debited);

        Ok(Receipt {
            transaction: recorded,
            balance_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonsai_storage::Storage;

    fn open(storage: &Storage) -> Session<'_> {
        Session::open(WalletStore::new(storage), SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let storage = Storage::open_temporary().unwrap();
        let session = open(&storage);
        assert!(session.wallet().is_none());
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_create_wallet_persists() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);

        let address = session.create_wallet("  Ada  ").unwrap().address;
        assert_eq!(session.wallet().unwrap().display_name, "Ada");

        let saved = WalletStore::new(&storage).load().unwrap().unwrap();
        assert_eq!(saved.address, address);
        assert_eq!(saved.balance, INITIAL_BALANCE);
    }

    #[test]
    fn test_empty_name_rejected() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);

        assert!(matches!(session.create_wallet("   "), Err(SessionError::MissingName)));
        assert!(session.wallet().is_none());
        assert!(WalletStore::new(&storage).load().unwrap().is_none());
    }

    #[test]
    fn test_commit_debits_and_appends() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);
        session.create_wallet("Ada").unwrap();

        let receipt = session
            .commit_transfer("0xfriend", Amount::from_bon(100), GasTier::Medium.fee())
            .unwrap();

        assert_eq!(receipt.block_number(), 1);
        assert_eq!(receipt.balance_after.to_string(), "899.99895");
        assert_eq!(session.wallet().unwrap().balance, receipt.balance_after);
        assert_eq!(session.ledger().len(), 1);

        let saved = WalletStore::new(&storage).load().unwrap().unwrap();
        assert_eq!(saved.balance, receipt.balance_after);
    }

    #[test]
    fn test_commit_without_funds_changes_nothing() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);
        session.create_wallet("Ada").unwrap();

        let result = session.commit_transfer("0xfriend", Amount::from_bon(1000), GasTier::Slow.fee());
        assert!(matches!(result, Err(SessionError::InsufficientBalance { .. })));
        assert_eq!(session.wallet().unwrap().balance, INITIAL_BALANCE);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_exact_balance_is_spendable() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);
        session.create_wallet("Ada").unwrap();

        let amount = INITIAL_BALANCE.checked_sub(GasTier::Fast.fee()).unwrap();
        session.check_affordable(amount, GasTier::Fast.fee()).unwrap();
        let receipt = session.commit_transfer("bob", amount, GasTier::Fast.fee()).unwrap();
        assert!(receipt.balance_after.is_zero());
    }

    #[test]
    fn test_commit_requires_wallet() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);
        let result = session.commit_transfer("bob", Amount::from_bon(1), Amount::ZERO);
        assert!(matches!(result, Err(SessionError::NoWallet)));
    }

    #[test]
    fn test_reopen_restores_wallet_not_ledger() {
        let storage = Storage::open_temporary().unwrap();
        let balance = {
            let mut session = open(&storage);
            session.create_wallet("Ada").unwrap();
            session
                .commit_transfer("bob", Amount::from_bon(10), GasTier::Medium.fee())
                .unwrap()
                .balance_after
        };

        let session = open(&storage);
        assert_eq!(session.wallet().unwrap().balance, balance);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_reset_wallet() {
        let storage = Storage::open_temporary().unwrap();
        let mut session = open(&storage);
        let address = session.create_wallet("Ada").unwrap().address;

        let removed = session.reset_wallet().unwrap();
        assert_eq!(removed.map(|w| w.address), Some(address));
        assert!(session.wallet().is_none());
        assert!(WalletStore::new(&storage).load().unwrap().is_none());

        // Nothing left to remove
        assert_eq!(session.reset_wallet().unwrap(), None);
    }

    #[test]
    fn test_total_past_u64_max_is_unaffordable() {
        let storage = Storage::open_temporary().unwrap();
        let max = Amount::from_units(u64::MAX);
        let config = SessionConfig {
            initial_balance: max,
            ..SessionConfig::default()
        };
        let mut session = Session::open(WalletStore::new(&storage), config).unwrap();
        session.create_wallet("Ada").unwrap();
        let fee = GasTier::Medium.fee();

        let check = session.check_affordable(max, fee);
        assert!(matches!(check, Err(SessionError::InsufficientBalance { .. })));

        let commit = session.commit_transfer("bob", max, fee);
        assert!(matches!(commit, Err(SessionError::InsufficientBalance { .. })));
        assert_eq!(session.wallet().unwrap().balance, max);
        assert!(session.ledger().is_empty());
        assert_eq!(WalletStore::new(&storage).load().unwrap().unwrap().balance, max);

        // Largest affordable transfer leaves exactly zero
        let amount = max.checked_sub(fee).unwrap();
        let receipt = session.commit_transfer("bob", amount, fee).unwrap();
        assert!(receipt.balance_after.is_zero());
    }
}
