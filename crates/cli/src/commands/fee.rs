//! Gas fee table command.

use anyhow::Result;
use bonsai_core::{GasTier, TRANSFER_GAS};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct FeeArgs {
    /// Only show this tier (slow, medium, fast)
    #[arg(short, long)]
    tier: Option<GasTier>,
}

pub fn run(args: FeeArgs) -> Result<()> {
    let tiers: Vec<GasTier> = match args.tier {
        Some(tier) => vec![tier],
        None => GasTier::ALL.to_vec(),
    };

    println!();
    println!(
        "{}",
        format!("Gas fees ({} gas per transfer):", TRANSFER_GAS).bold().cyan()
    );
    println!();
    for tier in tiers {
        let marker = if tier == GasTier::default() { " (default)" } else { "" };
        println!(
            "  {:<8} {:>4} gwei  {} BON{}",
            tier.name(),
            tier.gas_price(),
            tier.fee().fixed(6).bright_cyan(),
            marker.bright_black()
        );
    }
    println!();
    Ok(())
}
