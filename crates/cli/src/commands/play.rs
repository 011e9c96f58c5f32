//! Interactive session command.

use crate::config::{load_config, open_storage};
use crate::repl::Repl;
use anyhow::Result;
use bonsai_chain::{FlowController, Session, SessionConfig};
use bonsai_storage::WalletStore;
use std::io;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<()> {
    let config: SessionConfig = load_config(data_dir)?.into();
    let storage = open_storage(data_dir)?;
    let session = Session::open(WalletStore::new(&storage), config)?;

    let stdin = io::stdin();
    Repl::new(FlowController::new(session)).run(stdin.lock())
}
