use pit_core::*;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for table timeouts.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// How long a betting window stays open.
    pub betting: Duration,
    /// How long a player has to answer on their turn.
    pub decision: Duration,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            betting: BETTING_TIMEOUT,
            decision: DECISION_TIMEOUT,
        }
    }
}

/// The betting-window deadline for one table.
///
/// Wraps an `Option<Instant>` so that at most one deadline can exist per
/// table by construction: arming overwrites (cancel-then-arm in one step)
/// and cancelling is idempotent. A cancelled deadline has no observable
/// effect; the room only sleeps on the deadline currently held here.
#[derive(Debug)]
pub struct Window {
    config: WindowConfig,
    deadline: Option<Instant>,
}

impl Window {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(WindowConfig::default())
    }
    /// Opens a fresh betting window, replacing any live deadline.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.config.betting);
    }
    /// Idempotent: cancelling an unarmed window is a no-op.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }
    /// Deadline for one turn decision, measured from now.
    pub fn decision(&self) -> Instant {
        Instant::now() + self.config.decision
    }
}
