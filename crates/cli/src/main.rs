//! bonsai CLI entry point.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod repl;
mod view;

#[derive(Parser)]
#[command(name = "bonsai")]
#[command(about = "Wallet and ledger playground for the bonsai garden", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the wallet database and config
    #[arg(long, global = true, env = "BONSAI_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Log filter (trace, debug, info, warn, error or a full directive)
    #[arg(long, global = true, env = "BONSAI_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, &cli.data_dir) {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => {
            println!("bonsai - grow a garden, send some BON");
            println!("Run 'bonsai --help' for usage information.");
        }
    }
}
