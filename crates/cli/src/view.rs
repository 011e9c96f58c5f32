//! Terminal rendering of wallets, drafts, receipts and the ledger.

use bonsai_chain::{JourneyStep, Ledger, Receipt, TransferDraft};
use bonsai_core::{Transaction, Wallet};
use colored::Colorize;

/// Fee display precision, as on the original dashboard.
const FEE_PLACES: u32 = 6;

pub fn print_wallet(wallet: &Wallet) {
    println!();
    println!("{}", "Wallet:".bold().cyan());
    println!();
    println!("  Name:    {}", wallet.display_name.bold());
    println!("  Address: {}", wallet.address.to_hex().bright_yellow());
    println!("  Balance: {} BON", wallet.balance.to_string().bright_cyan());
    println!();
}

pub fn print_draft(draft: &TransferDraft) {
    println!();
    println!("{}", "Confirm transfer:".bold().cyan());
    println!();
    println!("  Send:  {} BON", draft.amount.to_string().bright_cyan());
    println!("  To:    {}", draft.to.bright_yellow());
    println!(
        "  Gas:   {} BON ({})",
        draft.fee.fixed(FEE_PLACES).bright_cyan(),
        draft.tier
    );
    if let Some(total) = draft.total() {
        println!("  Total: {} BON", total.to_string().bold());
    }
    println!();
}

pub fn print_journey_step(index: usize, step: JourneyStep) {
    if index == 0 {
        println!("{}", "Sending...".bold());
    }
    println!(
        "  {} {}",
        format!("[{}/{}]", index + 1, JourneyStep::SEQUENCE.len()).bright_black(),
        step
    );
}

pub fn print_receipt(receipt: &Receipt) {
    let tx = &receipt.transaction;
    println!();
    println!("{}  {}", "✓".green().bold(), "Transaction confirmed".bold());
    println!();
    println!("  Hash:     {}", tx.hash.to_string().bright_yellow());
    println!("  Block:    {}", receipt.block_number().to_string().bright_cyan());
    println!("  Gas paid: {} BON", tx.fee.fixed(FEE_PLACES).bright_cyan());
    if let Some(total) = tx.total_cost() {
        println!("  Debited:  {} BON", total.to_string().bold());
    }
    println!("  Balance:  {} BON", receipt.balance_after.to_string().bright_cyan());
    println!();
}

fn ledger_row(tx: &Transaction) -> String {
    format!(
        "  {:>5}  {:<13} {:>16}  {:>10}",
        tx.block_number.unwrap_or_default(),
        tx.hash.short(),
        tx.amount.to_string(),
        tx.fee.fixed(FEE_PLACES)
    )
}

pub fn print_ledger(ledger: &Ledger) {
    println!();
    println!("{}", "Ledger:".bold().cyan());
    println!();

    if ledger.is_empty() {
        println!("  {}", "No transactions this session.".yellow());
        println!();
        return;
    }

    println!(
        "{}",
        format!(
            "  {:>5}  {:<13} {:>16}  {:>10}",
            "Block", "Hash", "Amount", "Gas"
        )
        .bright_black()
    );
    for tx in ledger.all() {
        println!("{}", ledger_row(tx));
    }

    let stats = ledger.stats();
    println!();
    println!(
        "  {} transactions, {} BON moved, {} BON in fees, next block #{}",
        stats.total_transactions.to_string().bright_cyan(),
        stats.total_volume.to_string().bright_cyan(),
        stats.total_fees.fixed(FEE_PLACES).bright_cyan(),
        stats.current_block
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonsai_core::{Address, Amount, GasTier};

    #[test]
    fn test_ledger_row_columns() {
        let mut tx = Transaction::transfer(
            Address::ZERO,
            "bob",
            Amount::from_bon(100),
            GasTier::Medium.fee(),
        );
        tx.block_number = Some(2);

        let row = ledger_row(&tx);
        assert!(row.trim_start().starts_with('2'));
        assert!(row.contains(&tx.hash.short()));
        assert!(row.contains("100"));
        assert!(row.ends_with("0.001050"));
    }
}
