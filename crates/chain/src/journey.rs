//! The cosmetic "transaction journey" shown while a transfer executes.

use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::trace;

/// Delay between journey steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(700);

/// One stop on the journey from wallet to ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStep {
    Wallet,
    Network,
    Mempool,
    Validator,
    Block,
}

impl JourneyStep {
    /// Steps in the order they are shown.
    pub const SEQUENCE: [JourneyStep; 5] = [
        JourneyStep::Wallet,
        JourneyStep::Network,
        JourneyStep::Mempool,
        JourneyStep::Validator,
        JourneyStep::Block,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JourneyStep::Wallet => "Signed in your wallet",
            JourneyStep::Network => "Broadcast to the network",
            JourneyStep::Mempool => "Waiting in the mempool",
            JourneyStep::Validator => "Picked up by a validator",
            JourneyStep::Block => "Sealed into a block",
        }
    }
}

impl fmt::Display for JourneyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plays the journey: each step is announced, then held for the step delay.
///
/// There is no cancellation; once started the whole sequence runs.
#[derive(Debug, Clone, Copy)]
pub struct Journey {
    step_delay: Duration,
}

impl Journey {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// A journey with no pauses (tests, non-interactive runs).
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Announce every step in order, sleeping `step_delay` after each.
    pub fn run<F>(&self, mut on_step: F)
    where
        F: FnMut(usize, JourneyStep),
    {
        for (index, step) in JourneyStep::SEQUENCE.into_iter().enumerate() {
            trace!(index, ?step, "journey step");
            on_step(index, step);
            if !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        }
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}
