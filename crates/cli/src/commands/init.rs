//! Initialize data directory command.

use crate::config::{config_path, load_config, open_storage, save_config, ConfigFile};
use anyhow::{bail, Result};
use bonsai_core::{Amount, GasTier};
use bonsai_storage::WalletStore;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Args)]
pub struct InitArgs {
    /// Balance for newly created wallets (BON)
    #[arg(long, default_value = "1000")]
    initial_balance: Amount,

    /// Delay between transfer animation steps, in milliseconds
    #[arg(long, default_value = "700")]
    journey_step_ms: u64,

    /// Gas tier preselected for transfers
    #[arg(long, default_value = "medium")]
    default_tier: GasTier,

    /// Overwrite an existing config
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs, data_dir: &Path) -> Result<()> {
    println!("{}", "Initializing bonsai...".bold().cyan());
    println!();

    let config_exists = config_path(data_dir).exists();
    if config_exists && !args.force {
        let current = load_config(data_dir)?;
        bail!(
            "{} already exists (initial balance {}, tier {}). Use --force to overwrite.",
            config_path(data_dir).display(),
            current.initial_balance,
            current.default_tier
        );
    }

    let storage = open_storage(data_dir)?;
    println!("{}  Created data directory", "✓".green().bold());

    let config = ConfigFile {
        initial_balance: args.initial_balance,
        journey_step_ms: args.journey_step_ms,
        default_tier: args.default_tier,
    };
    let path = save_config(data_dir, &config)?;
    println!(
        "{}  Saved config to: {}",
        "✓".green().bold(),
        path.display().to_string().bright_black()
    );
    println!("    Initial balance: {} BON", config.initial_balance.to_string().bright_cyan());
    println!("    Default tier:    {} ({} BON gas)", config.default_tier, config.default_tier.fee().fixed(6));

    if let Some(wallet) = WalletStore::new(&storage).load()? {
        println!();
        println!(
            "  Existing wallet kept: {} ({})",
            wallet.display_name.bold(),
            wallet.address.to_hex().bright_yellow()
        );
    }

    println!();
    println!("{}", "Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  • Use {} to create a wallet", "bonsai wallet new --name <NAME>".bright_cyan());
    println!("  • Use {} to send BON", "bonsai send --to <ADDR> --amount <BON>".bright_cyan());
    println!("  • Use {} for an interactive session", "bonsai play".bright_cyan());

    Ok(())
}
