//! Observable engine state.
//!
//! ## Phase
//!
//! The engine's lifecycle as a four-state machine:
//! `Fresh -> Busy -> Armed -> Eliminated`, with `load()` returning to `Busy`
//! from any phase.
//!
//! ## PublicState
//!
//! The snapshot handed to presentation layers. It carries everything a
//! renderer needs (current chamber, busy flag, miss/loss flags) and nothing
//! it must not see: the live chamber index is hidden information and is
//! deliberately absent, the same way a face-down card stays out of a public
//! game state.

use serde::{Deserialize, Serialize};

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed but never loaded; trigger pulls are rejected.
    Fresh,
    /// Reload spin in progress; trigger pulls are rejected.
    Busy,
    /// Loaded and accepting trigger pulls.
    Armed,
    /// Live round struck; terminal until the next load.
    Eliminated,
}

impl Phase {
    /// Check whether the engine accepts a trigger pull in this phase.
    #[must_use]
    pub fn accepts_pulls(self) -> bool {
        matches!(self, Phase::Armed)
    }
}

/// Public snapshot of the engine for observers.
///
/// Cheap to produce and fully serializable, so a presentation layer can poll
/// it every frame or forward it across a process boundary as JSON. Mutating
/// the snapshot has no effect on the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Current lifecycle phase.
    pub phase: Phase,

    /// Number of chambers in the cylinder.
    pub chamber_count: usize,

    /// Chamber currently aligned with the firing pin.
    pub current_position: usize,

    /// True while the reload spin is in progress.
    pub busy: bool,

    /// True if at least one pull has occurred since the last load.
    pub fired: bool,

    /// True once the live round has been struck.
    pub game_over: bool,

    /// Accepted pulls since the last load.
    pub pulls: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_armed_accepts_pulls() {
        assert!(Phase::Armed.accepts_pulls());
        assert!(!Phase::Fresh.accepts_pulls());
        assert!(!Phase::Busy.accepts_pulls());
        assert!(!Phase::Eliminated.accepts_pulls());
    }

    #[test]
    fn test_state_serialization() {
        let state = PublicState {
            phase: Phase::Armed,
            chamber_count: 9,
            current_position: 3,
            busy: false,
            fired: true,
            game_over: false,
            pulls: 3,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PublicState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
