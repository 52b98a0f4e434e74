//! Core engine types: configuration, RNG, clock, outcomes, observable state.
//!
//! This module contains the building blocks the engine is assembled from.
//! Callers configure these via `EngineConfig` rather than modifying the
//! engine.

pub mod clock;
pub mod config;
pub mod outcome;
pub mod rng;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EngineConfig, DEFAULT_CHAMBER_COUNT, DEFAULT_COOLDOWN};
pub use outcome::{PullOutcome, PullRecord, RejectReason};
pub use rng::{GameRng, GameRngState};
pub use state::{Phase, PublicState};
