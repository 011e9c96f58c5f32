//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

mod fee;
mod garden;
mod init;
mod play;
mod send;
mod wallet;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and config
    Init(init::InitArgs),
    /// Wallet management
    Wallet(wallet::WalletArgs),
    /// Show gas fees per tier
    Fee(fee::FeeArgs),
    /// Send BON in one go
    Send(send::SendArgs),
    /// Interactive session: wallet, transfers and ledger
    Play,
    /// Render the garden as draw commands
    Garden(garden::GardenArgs),
}

pub fn run(cmd: Commands, data_dir: &Path) -> Result<()> {
    match cmd {
        Commands::Init(args) => init::run(args, data_dir),
        Commands::Wallet(args) => wallet::run(args, data_dir),
        Commands::Fee(args) => fee::run(args),
        Commands::Send(args) => send::run(args, data_dir),
        Commands::Play => play::run(data_dir),
        Commands::Garden(args) => garden::run(args),
    }
}
