//! # rust-roulette
//!
//! A game-state engine for a single-player revolving-chamber elimination
//! game: one live round among N chambers, one position advanced per trigger
//! pull, until the live round fires or the player reloads.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The crate owns the rules only. Rendering,
//!    animation, and text are an external consumer that calls `load()` /
//!    `pull_trigger()` and observes state.
//!
//! 2. **Explicit ownership**: `GameEngine` is a plain owned struct - no
//!    globals, no singletons. Multiple independent sessions coexist freely.
//!
//! 3. **Deterministic by injection**: The chamber draw goes through a
//!    seedable `GameRng` and the reload cooldown through a `Clock` trait,
//!    so tests exercise every branch without sleeping or statistical
//!    flakiness.
//!
//! ## Modules
//!
//! - `core`: configuration, RNG, clock, pull outcomes, observable state
//! - `engine`: the `GameEngine` state machine and its builder
//!
//! ## Quick start
//!
//! ```
//! use std::time::Duration;
//! use rust_roulette::{GameEngine, PullOutcome, RejectReason};
//!
//! let mut engine = GameEngine::builder()
//!     .seed(42)
//!     .cooldown(Duration::ZERO)
//!     .build();
//!
//! // Trigger pulls are rejected until the cylinder is loaded.
//! assert_eq!(
//!     engine.pull_trigger(),
//!     PullOutcome::Rejected(RejectReason::NotLoaded)
//! );
//!
//! engine.load();
//! while engine.pull_trigger() == PullOutcome::Survived {}
//! assert!(engine.game_over());
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Clock, EngineConfig, GameRng, GameRngState, ManualClock, Phase, PublicState, PullOutcome,
    PullRecord, RejectReason, SystemClock, DEFAULT_CHAMBER_COUNT, DEFAULT_COOLDOWN,
};

pub use crate::engine::{GameEngine, GameEngineBuilder};
