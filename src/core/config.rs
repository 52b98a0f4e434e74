//! Engine configuration.
//!
//! Callers configure the engine at construction by providing an
//! `EngineConfig`:
//! - `chamber_count`: how many chambers the cylinder holds
//! - `cooldown`: how long the reload spin keeps the engine busy
//!
//! The engine never hardcodes either value - the defaults are a 9-chamber
//! cylinder and a 1.5 second spin, but any positive chamber count works.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of chambers in the cylinder.
pub const DEFAULT_CHAMBER_COUNT: usize = 9;

/// Default busy window after a reload.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

/// Configuration for a single engine instance.
///
/// Fixed for the lifetime of the engine. The cooldown is a policy constant
/// representing the reload animation, not a correctness requirement - a zero
/// cooldown is valid and disables the busy window entirely (useful for
/// benchmarks and headless simulation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of chambers in the cylinder. Must be positive.
    pub chamber_count: usize,

    /// How long `busy` stays true after a `load()`.
    pub cooldown: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chamber_count: DEFAULT_CHAMBER_COUNT,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default chamber count and cooldown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chamber count.
    ///
    /// Panics if `count` is zero - a zero-chamber cylinder makes the
    /// position modulus undefined, so it is treated as a fatal
    /// configuration error.
    #[must_use]
    pub fn with_chamber_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Cylinder must have at least 1 chamber");
        self.chamber_count = count;
        self
    }

    /// Set the busy window duration.
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Validate the configuration.
    ///
    /// Called by the engine at construction. Panics on a zero chamber
    /// count; configurations built through `with_chamber_count` are
    /// already valid.
    pub(crate) fn validate(&self) {
        assert!(
            self.chamber_count > 0,
            "Cylinder must have at least 1 chamber"
        );
    }
}
