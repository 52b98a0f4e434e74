//! The game-state engine.
//!
//! `GameEngine` owns the cylinder: which chamber is live, which chamber is
//! aligned with the firing pin, and whether the reload spin is still in
//! progress. It is deliberately a plain owned struct - no globals, no
//! singletons - so callers can run independent concurrent sessions and unit
//! test the rules without a rendering context.
//!
//! ## Rules
//!
//! - `load()` draws a fresh live chamber, resets the cylinder to position 0,
//!   and opens the busy window. Loading while busy re-randomizes and
//!   restarts the window (last reload wins).
//! - `pull_trigger()` is rejected while busy, after elimination, or before
//!   the first load. An accepted pull either advances the cylinder
//!   (`Survived`) or strikes the live round (`Eliminated`; the cylinder does
//!   not advance - the hammer stops on the live chamber).
//!
//! Within one full revolution from position 0 the live chamber is visited
//! exactly once, so `chamber_count` accepted pulls always contain exactly
//! one elimination.

use std::time::Duration;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{EngineConfig, DEFAULT_CHAMBER_COUNT};
use crate::core::outcome::{PullOutcome, PullRecord, RejectReason};
use crate::core::rng::GameRng;
use crate::core::state::{Phase, PublicState};

/// Single-session game-state engine.
///
/// Single-writer: only the engine mutates its fields. Observers read
/// accessors or a [`PublicState`] snapshot.
///
/// ```
/// use std::time::Duration;
/// use rust_roulette::{GameEngine, PullOutcome};
///
/// let mut engine = GameEngine::builder()
///     .seed(42)
///     .cooldown(Duration::ZERO)
///     .build();
///
/// engine.load();
/// match engine.pull_trigger() {
///     PullOutcome::Survived => assert!(!engine.game_over()),
///     PullOutcome::Eliminated => assert!(engine.game_over()),
///     PullOutcome::Rejected(_) => unreachable!("armed engine accepts pulls"),
/// }
/// ```
#[derive(Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    clock: Box<dyn Clock>,

    /// Position holding the live round. `None` until the first `load()`.
    live_chamber: Option<usize>,

    /// Chamber currently aligned with the firing pin.
    current_position: usize,

    fired: bool,
    game_over: bool,

    /// Deadline for the pending busy-clear, against `clock`. `load()`
    /// overwrites it, so at most one clear is ever outstanding.
    busy_until: Option<Duration>,

    /// Accepted pulls since the last load.
    pulls: u32,
    history: SmallVec<[PullRecord; DEFAULT_CHAMBER_COUNT]>,
}

impl GameEngine {
    /// Create an engine with default configuration, an entropy-seeded RNG,
    /// and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start building an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    // === Operations ===

    /// Load the cylinder: draw a fresh live chamber, reset all session
    /// state, and open the busy window.
    ///
    /// Permitted in every phase. Loading while already busy simply
    /// re-randomizes and restarts the cooldown - the previous pending clear
    /// is superseded, never queued. Cannot fail.
    pub fn load(&mut self) {
        let live = self.rng.draw_index(self.config.chamber_count);

        self.live_chamber = Some(live);
        self.current_position = 0;
        self.fired = false;
        self.game_over = false;
        self.pulls = 0;
        self.history.clear();
        self.busy_until = Some(self.clock.now() + self.config.cooldown);

        debug!(
            "cylinder loaded: {} chambers, busy for {:?}",
            self.config.chamber_count, self.config.cooldown
        );
        trace!("live round in chamber {live}");
    }

    /// Pull the trigger.
    ///
    /// Rejected (a no-op, not an error) while the reload spin is in
    /// progress, after the live round has been struck, or before the first
    /// `load()`. An accepted pull marks the session as fired and either
    /// advances the cylinder or ends the game:
    ///
    /// - miss: `current_position` advances by one, wrapping at
    ///   `chamber_count`; returns [`PullOutcome::Survived`]
    /// - hit: `game_over` becomes true and the position does NOT advance;
    ///   returns [`PullOutcome::Eliminated`]
    pub fn pull_trigger(&mut self) -> PullOutcome {
        let Some(live) = self.live_chamber else {
            return PullOutcome::Rejected(RejectReason::NotLoaded);
        };
        if self.busy() {
            return PullOutcome::Rejected(RejectReason::Busy);
        }
        if self.game_over {
            return PullOutcome::Rejected(RejectReason::GameOver);
        }

        self.fired = true;
        self.pulls += 1;
        let position = self.current_position;

        let outcome = if position == live {
            self.game_over = true;
            PullOutcome::Eliminated
        } else {
            self.current_position = (position + 1) % self.config.chamber_count;
            PullOutcome::Survived
        };

        self.history
            .push(PullRecord::new(position, outcome, self.pulls));
        debug!("trigger pulled at chamber {position}: {outcome:?}");

        outcome
    }

    // === Observability ===

    /// True while the reload spin is in progress.
    ///
    /// Evaluated lazily against the engine's clock; once the deadline
    /// passes the engine accepts trigger pulls again.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy_until
            .map_or(false, |deadline| self.clock.now() < deadline)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.live_chamber.is_none() {
            Phase::Fresh
        } else if self.busy() {
            Phase::Busy
        } else if self.game_over {
            Phase::Eliminated
        } else {
            Phase::Armed
        }
    }

    /// Chamber currently aligned with the firing pin.
    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current_position
    }

    /// True if at least one pull has occurred since the last load.
    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// True once the live round has been struck.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Number of chambers in the cylinder.
    #[must_use]
    pub fn chamber_count(&self) -> usize {
        self.config.chamber_count
    }

    /// Accepted pulls since the last load.
    #[must_use]
    pub fn pulls(&self) -> u32 {
        self.pulls
    }

    /// Accepted pulls this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PullRecord] {
        &self.history
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Position of the live round, if loaded.
    ///
    /// Hidden information: presentation layers must not reveal it (it is
    /// excluded from [`PublicState`] for that reason). Exposed for tests
    /// and tooling, which need to drive both the miss and hit paths
    /// deterministically.
    #[must_use]
    pub fn live_chamber(&self) -> Option<usize> {
        self.live_chamber
    }

    /// Observable snapshot for presentation layers.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            phase: self.phase(),
            chamber_count: self.config.chamber_count,
            current_position: self.current_position,
            busy: self.busy(),
            fired: self.fired,
            game_over: self.game_over,
            pulls: self.pulls,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a [`GameEngine`].
///
/// Everything is optional: by default the engine uses a 9-chamber cylinder,
/// a 1.5 second cooldown, an entropy-seeded RNG, and the system clock.
/// Tests typically pin a seed and swap in a [`crate::core::ManualClock`] to
/// drive time explicitly.
pub struct GameEngineBuilder {
    config: EngineConfig,
    seed: Option<u64>,
    clock: Option<Box<dyn Clock>>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            seed: None,
            clock: None,
        }
    }
}

impl GameEngineBuilder {
    /// Start with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the chamber count. Panics if `count` is zero.
    #[must_use]
    pub fn chamber_count(mut self, count: usize) -> Self {
        self.config = self.config.with_chamber_count(count);
        self
    }

    /// Set the busy window duration.
    #[must_use]
    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.config = self.config.with_cooldown(cooldown);
        self
    }

    /// Pin the RNG seed for deterministic draws.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Supply a clock (a `ManualClock` in tests).
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the engine.
    ///
    /// Panics if the configuration holds a zero chamber count.
    #[must_use]
    pub fn build(self) -> GameEngine {
        self.config.validate();

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()));

        GameEngine {
            config: self.config,
            rng,
            clock,
            live_chamber: None,
            current_position: 0,
            fired: false,
            game_over: false,
            busy_until: None,
            pulls: 0,
            history: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    fn armed_engine(seed: u64) -> GameEngine {
        let mut engine = GameEngine::builder()
            .seed(seed)
            .cooldown(Duration::ZERO)
            .build();
        engine.load();
        engine
    }

    #[test]
    fn test_fresh_engine_rejects_pulls() {
        let mut engine = GameEngine::builder().seed(1).build();

        assert_eq!(engine.phase(), Phase::Fresh);
        assert_eq!(
            engine.pull_trigger(),
            PullOutcome::Rejected(RejectReason::NotLoaded)
        );
        assert!(!engine.fired());
    }

    #[test]
    fn test_load_enters_busy() {
        let clock = ManualClock::new();
        let mut engine = GameEngine::builder().seed(1).clock(clock).build();

        engine.load();
        assert_eq!(engine.phase(), Phase::Busy);
        assert!(engine.busy());
    }

    #[test]
    fn test_zero_cooldown_arms_immediately() {
        let engine = armed_engine(1);
        assert_eq!(engine.phase(), Phase::Armed);
        assert!(!engine.busy());
    }

    #[test]
    fn test_load_draws_exactly_one_live_chamber() {
        let engine = armed_engine(42);
        let live = engine.live_chamber().expect("loaded");

        assert!(live < engine.chamber_count());
        // Repeated inspection never changes it within a session.
        for _ in 0..10 {
            assert_eq!(engine.live_chamber(), Some(live));
        }
    }

    #[test]
    fn test_single_chamber_always_eliminates() {
        let mut engine = GameEngine::builder()
            .seed(3)
            .chamber_count(1)
            .cooldown(Duration::ZERO)
            .build();
        engine.load();

        assert_eq!(engine.live_chamber(), Some(0));
        assert_eq!(engine.pull_trigger(), PullOutcome::Eliminated);
        assert_eq!(engine.phase(), Phase::Eliminated);
    }

    #[test]
    fn test_public_state_hides_live_chamber() {
        let engine = armed_engine(5);
        let state = engine.public_state();

        // Compile-time guarantee is the struct definition; this pins the
        // observable fields.
        assert_eq!(state.phase, Phase::Armed);
        assert_eq!(state.chamber_count, 9);
        assert_eq!(state.current_position, 0);
        assert!(!state.fired);
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("live"));
    }

    #[test]
    #[should_panic(expected = "at least 1 chamber")]
    fn test_builder_rejects_zero_chambers() {
        let _ = GameEngine::builder().chamber_count(0);
    }
}
