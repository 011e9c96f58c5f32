//! Wallet management command.

use crate::config::{load_config, open_storage};
use crate::view::print_wallet;
use anyhow::{bail, Context, Result};
use bonsai_chain::{Session, SessionConfig};
use bonsai_storage::WalletStore;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

#[derive(Args)]
pub struct WalletArgs {
    #[command(subcommand)]
    command: WalletCommand,
}

#[derive(Subcommand)]
enum WalletCommand {
    /// Create a new wallet
    New {
        /// Name shown on the dashboard
        #[arg(short, long)]
        name: String,

        /// Replace an existing wallet
        #[arg(long)]
        force: bool,
    },
    /// Show the saved wallet
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the saved wallet
    Reset,
}

pub fn run(args: WalletArgs, data_dir: &Path) -> Result<()> {
    match args.command {
        WalletCommand::New { name, force } => new_wallet(data_dir, &name, force),
        WalletCommand::Show { json } => show_wallet(data_dir, json),
        WalletCommand::Reset => reset_wallet(data_dir),
    }
}

fn new_wallet(data_dir: &Path, name: &str, force: bool) -> Result<()> {
    let config: SessionConfig = load_config(data_dir)?.into();
    let storage = open_storage(data_dir)?;
    let mut session = Session::open(WalletStore::new(&storage), config)?;

    if let Some(existing) = session.wallet() {
        if !force {
            bail!(
                "A wallet already exists ({}). Use --force to replace it.",
                existing.address.to_hex()
            );
        }
    }

    let wallet = session.create_wallet(name)?;
    println!("{}", "Created new wallet:".bold().cyan());
    print_wallet(wallet);

    Ok(())
}

fn show_wallet(data_dir: &Path, json: bool) -> Result<()> {
    let storage = open_storage(data_dir)?;
    let wallet = WalletStore::new(&storage)
        .load()?
        .context("No wallet found. Use 'bonsai wallet new --name <NAME>' to create one.")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
    } else {
        print_wallet(&wallet);
    }
    Ok(())
}

fn reset_wallet(data_dir: &Path) -> Result<()> {
    let config: SessionConfig = load_config(data_dir)?.into();
    let storage = open_storage(data_dir)?;
    let mut session = Session::open(WalletStore::new(&storage), config)?;

    match session.reset_wallet()? {
        Some(wallet) => println!(
            "{}  Wallet deleted: {} ({})",
            "✓".green().bold(),
            wallet.display_name.bold(),
            wallet.address.to_hex().bright_black()
        ),
        None => println!("{}", "No wallet to reset.".yellow()),
    }
    Ok(())
}
