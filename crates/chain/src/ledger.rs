//! Append-only transaction ledger.
//!
//! The ledger keeps every accepted transfer in insertion order and labels
//! them with block numbers: every [`TXS_PER_BLOCK`] consecutive transactions
//! share one block. Block numbers start at 1, so the k-th transaction
//! (1-indexed) lands in block `ceil(k / 4)`.
//!
//! Nothing is ever removed or reordered, and nothing is persisted: a new
//! process starts with an empty ledger.

use bonsai_core::{Amount, Hash, Transaction};
use std::collections::HashMap;
use tracing::{debug, info};

/// Transactions grouped under one block label.
pub const TXS_PER_BLOCK: usize = 4;

/// In-memory ledger.
#[derive(Debug)]
pub struct Ledger {
    /// Transactions in insertion order.
    transactions: Vec<Transaction>,
    /// Position of each transaction by hash.
    by_hash: HashMap<Hash, usize>,
    /// Block label given to the next appended transaction.
    current_block: u64,
}

impl Ledger {
    /// Create an empty ledger positioned at block 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            by_hash: HashMap::new(),
            current_block: 1,
        }
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Block label the next transaction will receive.
    pub fn current_block(&self) -> u64 {
        self.current_block
    }

    /// Record a transaction and return it with its block number assigned.
    ///
    /// The block counter advances after every fourth transaction.
    pub fn append(&mut self, mut tx: Transaction) -> &Transaction {
        tx.block_number = Some(self.current_block);
        self.by_hash.insert(tx.hash, self.transactions.len());
        self.transactions.push(tx);
        debug!(
            block = self.current_block,
            position = self.transactions.len(),
            "transaction appended"
        );

        if self.transactions.len() % TXS_PER_BLOCK == 0 {
            info!(block = self.current_block, "block filled");
            self.current_block += 1;
        }

        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions, oldest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by hash.
    pub fn get(&self, tx_hash: &Hash) -> Option<&Transaction> {
        self.by_hash.get(tx_hash).map(|&i| &self.transactions[i])
    }

    /// Transactions labelled with block `number`. Empty for unknown blocks.
    pub fn block(&self, number: u64) -> &[Transaction] {
        if number == 0 {
            return &[];
        }
        let start = ((number - 1) as usize).saturating_mul(TXS_PER_BLOCK);
        if start >= self.transactions.len() {
            return &[];
        }
        let end = (start + TXS_PER_BLOCK).min(self.transactions.len());
        &self.transactions[start..end]
    }

    /// Get ledger statistics.
    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            total_transactions: self.transactions.len(),
            current_block: self.current_block,
            total_volume: self
                .transactions
                .iter()
                .fold(Amount::ZERO, |acc, tx| acc.saturating_add(tx.amount)),
            total_fees: self
                .transactions
                .iter()
                .fold(Amount::ZERO, |acc, tx| acc.saturating_add(tx.fee)),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Ledger statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStats {
    /// Number of recorded transactions.
    pub total_transactions: usize,
    /// Block label for the next transaction.
    pub current_block: u64,
    /// Sum of transferred amounts.
    pub total_volume: Amount,
    /// Sum of fees paid.
    pub total_fees: Amount,
}
