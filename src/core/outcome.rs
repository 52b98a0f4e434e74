//! Trigger pull outcomes and per-session history records.
//!
//! A pull resolves to exactly one of three outcomes:
//! - `Rejected`: nothing happened (busy window, terminal state, or the
//!   cylinder was never loaded) - a no-op, not an error
//! - `Survived`: the chamber was empty and the cylinder advanced
//! - `Eliminated`: the live round was struck; terminal until the next load
//!
//! Callers branch on the outcome to drive feedback (keep the trigger
//! disabled, show a miss message, end the game). Accepted pulls are also
//! recorded as `PullRecord`s so observers can replay a session.

use serde::{Deserialize, Serialize};

/// Why a trigger pull was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The cylinder has never been loaded.
    NotLoaded,
    /// The reload spin is still in progress.
    Busy,
    /// The live round has already been struck; reload to continue.
    GameOver,
}

/// Result of a single trigger pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PullOutcome {
    /// The pull was a no-op; no state changed.
    Rejected(RejectReason),
    /// The chamber was empty; the cylinder advanced one position.
    Survived,
    /// The live round was struck; the game is over.
    Eliminated,
}

impl PullOutcome {
    /// Check if the pull was rejected.
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, PullOutcome::Rejected(_))
    }

    /// Check if the pull mutated engine state.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !self.is_rejected()
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reject_reason(self) -> Option<RejectReason> {
        match self {
            PullOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A recorded accepted pull.
///
/// Used for:
/// - Session history shown by presentation layers
/// - Replay/debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRecord {
    /// The chamber that was probed.
    pub position: usize,

    /// What happened: `Survived` or `Eliminated` (rejected pulls are not
    /// recorded - they change nothing).
    pub outcome: PullOutcome,

    /// 1-based pull number within the loaded session.
    pub sequence: u32,
}

impl PullRecord {
    /// Create a new pull record.
    #[must_use]
    pub fn new(position: usize, outcome: PullOutcome, sequence: u32) -> Self {
        Self {
            position,
            outcome,
            sequence,
        }
    }
}
