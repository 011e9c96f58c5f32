//! Simulated ledger and transfer flow for the bonsai garden game.
//!
//! This crate brings the pieces together:
//! - **Ledger**: append-only transaction list, four transactions per block
//! - **Journey**: the fixed-step animation played while a transfer executes
//! - **Session**: the context object owning the wallet, ledger and store
//! - **Flow**: the screen state machine driving a transfer end to end
//!
//! # Example
//!
//! ```rust,no_run
//! use bonsai_chain::{FlowController, Journey, Session, SessionConfig};
//! use bonsai_storage::{Storage, WalletStore};
//!
//! let storage = Storage::open("./data").unwrap();
//! let session = Session::open(WalletStore::new(&storage), SessionConfig::default()).unwrap();
//! let mut flow = FlowController::new(session).with_journey(Journey::instant());
//!
//! flow.create_wallet("Ada").unwrap();
//! flow.start_transfer().unwrap();
//! flow.review("0xfriend", "100").unwrap();
//! let receipt = flow.execute(|_, step| println!("{}", step)).unwrap();
//! println!("block {}", receipt.block_number());
//! ```

pub mod flow;
pub mod journey;
pub mod ledger;
pub mod session;

// Re-export commonly used types
pub use flow::{FlowController, FlowError, Screen, TransferDraft};
pub use journey::{Journey, JourneyStep, DEFAULT_STEP_DELAY};
pub use ledger::{Ledger, LedgerStats, TXS_PER_BLOCK};
pub use session::{Receipt, Session, SessionConfig, SessionError};
