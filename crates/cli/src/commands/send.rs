//! One-shot transfer command.

use crate::config::{load_config, open_storage};
use crate::view::{print_draft, print_journey_step, print_receipt};
use anyhow::{bail, Result};
use bonsai_chain::{FlowController, Journey, Screen, Session, SessionConfig};
use bonsai_core::GasTier;
use bonsai_storage::WalletStore;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct SendArgs {
    /// Recipient address
    #[arg(short, long)]
    to: String,

    /// Amount in BON
    #[arg(short, long)]
    amount: String,

    /// Gas tier (slow, medium, fast); defaults to the configured tier
    #[arg(long)]
    tier: Option<GasTier>,

    /// Skip the journey animation delays
    #[arg(long)]
    no_wait: bool,
}

pub fn run(args: SendArgs, data_dir: &Path) -> Result<()> {
    let config: SessionConfig = load_config(data_dir)?.into();
    let storage = open_storage(data_dir)?;
    let session = Session::open(WalletStore::new(&storage), config)?;

    let mut flow = FlowController::new(session);
    if args.no_wait {
        flow = flow.with_journey(Journey::instant());
    }

    if flow.screen() == Screen::WalletSetup {
        bail!("No wallet found. Use 'bonsai wallet new --name <NAME>' to create one.");
    }

    flow.start_transfer()?;
    if let Some(tier) = args.tier {
        flow.set_tier(tier)?;
    }

    let draft = flow.review(&args.to, &args.amount)?;
    print_draft(draft);

    let receipt = flow.execute(print_journey_step)?;
    print_receipt(receipt);

    Ok(())
}
