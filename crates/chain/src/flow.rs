//! Screen flow for sending BON.
//!
//! ```text
//! wallet-setup ──create──▶ dashboard ◀──toggle──▶ ledger-view
//!                            │   ▲
//!                   start    │   │ dismiss / cancel
//!                            ▼   │
//!                          compose ──review──▶ confirm ──execute──▶ animating ──▶ receipt
//! ```
//!
//! Every failed action leaves the controller on the screen it was on.

use crate::journey::{Journey, JourneyStep};
use crate::ledger::Ledger;
use crate::session::{Receipt, Session, SessionError};
use bonsai_core::{Amount, AmountError, GasTier, Transaction, Wallet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A screen of the game UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    WalletSetup,
    Dashboard,
    Compose,
    Confirm,
    Animating,
    Receipt,
    LedgerView,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::WalletSetup => "wallet-setup",
            Screen::Dashboard => "dashboard",
            Screen::Compose => "compose",
            Screen::Confirm => "confirm",
            Screen::Animating => "animating",
            Screen::Receipt => "receipt",
            Screen::LedgerView => "ledger-view",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while driving the flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("enter a recipient address")]
    MissingRecipient,

    #[error("{0}")]
    InvalidAmount(#[from] AmountError),

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("cannot {action} on the {screen} screen")]
    InvalidTransition { screen: Screen, action: &'static str },
}

impl FlowError {
    /// Whether this is the insufficient-balance rejection.
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(
            self,
            FlowError::Session(SessionError::InsufficientBalance { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

/// A reviewed transfer waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDraft {
    pub to: String,
    pub amount: Amount,
    pub tier: GasTier,
    pub fee: Amount,
}

impl TransferDraft {
    /// Amount plus fee, `None` if it overflows.
    pub fn total(&self) -> Option<Amount> {
        self.amount.checked_add(self.fee)
    }
}

/// Drives the screens and owns the session.
pub struct FlowController<'a> {
    session: Session<'a>,
    screen: Screen,
    tier: GasTier,
    journey: Journey,
    draft: Option<TransferDraft>,
    receipt: Option<Receipt>,
}

impl<'a> FlowController<'a> {
    /// Start on the dashboard if a wallet was restored, otherwise on setup.
    pub fn new(session: Session<'a>) -> Self {
        let screen = if session.wallet().is_some() {
            Screen::Dashboard
        } else {
            Screen::WalletSetup
        };
        let tier = session.config().default_tier;
        let journey = Journey::new(session.config().journey_step);

        Self {
            session,
            screen,
            tier,
            journey,
            draft: None,
            receipt: None,
        }
    }

    /// Replace the journey (e.g. with `Journey::instant()`).
    pub fn with_journey(mut self, journey: Journey) -> Self {
        self.journey = journey;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session<'a> {
        &self.session
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.session.wallet()
    }

    pub fn ledger(&self) -> &Ledger {
        self.session.ledger()
    }

    /// Ledger rows, oldest first.
    pub fn ledger_rows(&self) -> &[Transaction] {
        self.session.ledger().all()
    }

    pub fn tier(&self) -> GasTier {
        self.tier
    }

    /// Fee for the currently selected tier.
    pub fn fee(&self) -> Amount {
        self.tier.fee()
    }

    pub fn draft(&self) -> Option<&TransferDraft> {
        self.draft.as_ref()
    }

    /// Receipt of the most recent transfer.
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    fn go(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "screen change");
        self.screen = screen;
    }

    fn expect_screen(&self, allowed: &[Screen], action: &'static str) -> Result<()> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                screen: self.screen,
                action,
            })
        }
    }

    /// wallet-setup → dashboard.
    pub fn create_wallet(&mut self, name: &str) -> Result<&Wallet> {
        self.expect_screen(&[Screen::WalletSetup], "create a wallet")?;
        self.session.create_wallet(name)?;
        self.go(Screen::Dashboard);
        self.session
            .wallet()
            .ok_or(FlowError::Session(SessionError::NoWallet))
    }

    /// dashboard → compose.
    pub fn start_transfer(&mut self) -> Result<()> {
        self.expect_screen(&[Screen::Dashboard], "start a transfer")?;
        self.draft = None;
        self.go(Screen::Compose);
        Ok(())
    }

    /// Pick a gas tier while composing; returns the new fee.
    pub fn set_tier(&mut self, tier: GasTier) -> Result<Amount> {
        self.expect_screen(&[Screen::Compose], "change the gas tier")?;
        self.tier = tier;
        let fee = tier.fee();
        debug!(%tier, %fee, "fee estimated");
        Ok(fee)
    }

    /// compose → confirm, if the wallet covers amount plus fee.
    pub fn review(&mut self, to: &str, amount: &str) -> Result<&TransferDraft> {
        self.expect_screen(&[Screen::Compose], "review a transfer")?;

        let to = to.trim();
        if to.is_empty() {
            return Err(FlowError::MissingRecipient);
        }
        let amount: Amount = amount.parse()?;
        if amount.is_zero() {
            return Err(FlowError::ZeroAmount);
        }

        let fee = self.tier.fee();
        self.session.check_affordable(amount, fee)?;

        self.go(Screen::Confirm);
        Ok(&*self.draft.insert(TransferDraft {
            to: to.to_string(),
            amount,
            tier: self.tier,
            fee,
        }))
    }

    /// confirm → animating → receipt.
    ///
    /// Plays the whole journey, calling `on_step` for each step, then
    /// records the transfer. On failure the controller returns to confirm
    /// with the draft intact.
    pub fn execute<F>(&mut self, on_step: F) -> Result<&Receipt>
    where
        F: FnMut(usize, JourneyStep),
    {
        self.expect_screen(&[Screen::Confirm], "execute a transfer")?;
        let draft = match self.draft.clone() {
            Some(draft) => draft,
            None => {
                return Err(FlowError::InvalidTransition {
                    screen: self.screen,
                    action: "execute without a reviewed transfer",
                })
            }
        };

        self.go(Screen::Animating);
        self.journey.run(on_step);

        match self
            .session
            .commit_transfer(&draft.to, draft.amount, draft.fee)
        {
            Ok(receipt) => {
                self.draft = None;
                self.go(Screen::Receipt);
                Ok(&*self.receipt.insert(receipt))
            }
            Err(e) => {
                self.go(Screen::Confirm);
                Err(e.into())
            }
        }
    }

    /// compose/confirm → dashboard, dropping the draft.
    pub fn cancel(&mut self) -> Result<()> {
        self.expect_screen(&[Screen::Compose, Screen::Confirm], "cancel")?;
        self.draft = None;
        self.go(Screen::Dashboard);
        Ok(())
    }

    /// receipt → dashboard.
    pub fn dismiss_receipt(&mut self) -> Result<()> {
        self.expect_screen(&[Screen::Receipt], "dismiss the receipt")?;
        self.go(Screen::Dashboard);
        Ok(())
    }

    /// dashboard ↔ ledger-view. Also opens the ledger from a receipt.
    pub fn toggle_ledger(&mut self) -> Result<()> {
        match self.screen {
            Screen::Dashboard | Screen::Receipt => self.go(Screen::LedgerView),
            Screen::LedgerView => self.go(Screen::Dashboard),
            screen => {
                return Err(FlowError::InvalidTransition {
                    screen,
                    action: "open the ledger",
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use bonsai_storage::{Storage, WalletStore};

    fn controller(storage: &Storage) -> FlowController<'_> {
        let session = Session::open(WalletStore::new(storage), SessionConfig::default()).unwrap();
        FlowController::new(session).with_journey(Journey::instant())
    }

    fn with_wallet(storage: &Storage) -> FlowController<'_> {
        let mut flow = controller(storage);
        flow.create_wallet("Ada").unwrap();
        flow
    }

    #[test]
    fn test_starts_on_wallet_setup() {
        let storage = Storage::open_temporary().unwrap();
        let flow = controller(&storage);
        assert_eq!(flow.screen(), Screen::WalletSetup);
        assert_eq!(flow.tier(), GasTier::Medium);
    }

    #[test]
    fn test_create_wallet_moves_to_dashboard() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = controller(&storage);

        let wallet = flow.create_wallet("Ada").unwrap();
        assert_eq!(wallet.display_name, "Ada");
        assert_eq!(flow.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_empty_name_stays_on_setup() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = controller(&storage);

        let err = flow.create_wallet("").unwrap_err();
        assert!(matches!(err, FlowError::Session(SessionError::MissingName)));
        assert_eq!(flow.screen(), Screen::WalletSetup);
        assert!(flow.wallet().is_none());
    }

    #[test]
    fn test_restored_wallet_starts_on_dashboard() {
        let storage = Storage::open_temporary().unwrap();
        drop(with_wallet(&storage));

        let flow = controller(&storage);
        assert_eq!(flow.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_full_transfer_cycle() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);

        flow.start_transfer().unwrap();
        assert_eq!(flow.screen(), Screen::Compose);

        let draft = flow.review("0xfriend", "100").unwrap();
        assert_eq!(draft.fee.to_string(), "0.00105");
        assert_eq!(flow.screen(), Screen::Confirm);

        let mut steps = 0;
        let receipt = flow.execute(|_, _| steps += 1).unwrap().clone();
        assert_eq!(steps, JourneyStep::SEQUENCE.len());
        assert_eq!(flow.screen(), Screen::Receipt);
        assert_eq!(receipt.block_number(), 1);
        assert_eq!(receipt.balance_after.to_string(), "899.99895");
        assert_eq!(flow.wallet().unwrap().balance.to_string(), "899.99895");
        assert_eq!(flow.ledger_rows().len(), 1);
        assert!(flow.draft().is_none());

        flow.dismiss_receipt().unwrap();
        assert_eq!(flow.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_insufficient_balance_stays_on_compose() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();

        let err = flow.review("0xfriend", "1000").unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(flow.screen(), Screen::Compose);
        assert!(flow.draft().is_none());
        assert_eq!(flow.wallet().unwrap().balance.to_string(), "1000");
        assert!(flow.ledger_rows().is_empty());
    }

    #[test]
    fn test_missing_input_stays_on_compose() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();

        assert!(matches!(flow.review("  ", "5"), Err(FlowError::MissingRecipient)));
        assert!(matches!(flow.review("bob", ""), Err(FlowError::InvalidAmount(_))));
        assert!(matches!(flow.review("bob", "abc"), Err(FlowError::InvalidAmount(_))));
        assert!(matches!(flow.review("bob", "0"), Err(FlowError::ZeroAmount)));
        assert_eq!(flow.screen(), Screen::Compose);
    }

    #[test]
    fn test_tier_changes_fee() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();

        let fee = flow.set_tier(GasTier::Fast).unwrap();
        assert_eq!(fee.to_string(), "0.0021");
        let draft = flow.review("bob", "1").unwrap();
        assert_eq!(draft.tier, GasTier::Fast);
        assert_eq!(draft.total().unwrap().to_string(), "1.0021");
    }

    #[test]
    fn test_tier_only_while_composing() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        let err = flow.set_tier(GasTier::Slow).unwrap_err();
        assert!(matches!(err, FlowError::InvalidTransition { screen: Screen::Dashboard, .. }));
        assert_eq!(flow.tier(), GasTier::Medium);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();
        flow.review("bob", "1").unwrap();

        flow.cancel().unwrap();
        assert_eq!(flow.screen(), Screen::Dashboard);
        assert!(flow.draft().is_none());
        assert!(flow.ledger_rows().is_empty());
    }

    #[test]
    fn test_invalid_transitions_change_nothing() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = controller(&storage);

        assert!(flow.start_transfer().is_err());
        let mut steps = 0;
        assert!(flow.execute(|_, _| steps += 1).is_err());
        assert_eq!(steps, 0);
        assert!(flow.toggle_ledger().is_err());
        assert!(flow.dismiss_receipt().is_err());
        assert_eq!(flow.screen(), Screen::WalletSetup);

        flow.create_wallet("Ada").unwrap();
        assert!(flow.create_wallet("Bob").is_err());
        assert_eq!(flow.wallet().unwrap().display_name, "Ada");
        assert!(flow.review("bob", "1").is_err());
    }

    #[test]
    fn test_ledger_toggle() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);

        flow.toggle_ledger().unwrap();
        assert_eq!(flow.screen(), Screen::LedgerView);
        assert!(flow.start_transfer().is_err());
        flow.toggle_ledger().unwrap();
        assert_eq!(flow.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_ledger_from_receipt() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();
        flow.review("bob", "1").unwrap();
        flow.execute(|_, _| {}).unwrap();

        flow.toggle_ledger().unwrap();
        assert_eq!(flow.screen(), Screen::LedgerView);
        assert_eq!(flow.ledger_rows().len(), 1);
    }

    #[test]
    fn test_failed_commit_returns_to_confirm() {
        let storage = Storage::open_temporary().unwrap();
        let mut flow = with_wallet(&storage);
        flow.start_transfer().unwrap();
        flow.review("bob", "1").unwrap();

        // Swap in an amount whose total overflows after review accepted the draft
        if let Some(draft) = flow.draft.as_mut() {
            draft.amount = Amount::from_units(u64::MAX);
        }

        let mut steps = 0;
        let err = flow.execute(|_, _| steps += 1).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(steps, JourneyStep::SEQUENCE.len());
        assert_eq!(flow.screen(), Screen::Confirm);
        assert_eq!(flow.draft().unwrap().amount, Amount::from_units(u64::MAX));
        assert_eq!(flow.wallet().unwrap().balance.to_string(), "1000");
        assert!(flow.ledger_rows().is_empty());
        assert!(flow.last_receipt().is_none());

        // Still on confirm, so the transfer can be dropped
        flow.cancel().unwrap();
        assert_eq!(flow.screen(), Screen::Dashboard);
    }
}
