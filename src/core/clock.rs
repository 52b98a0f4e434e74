//! Time source for the reload cooldown.
//!
//! The engine never spawns a timer thread. A `load()` stores a deadline and
//! `busy` is evaluated lazily against a `Clock`, so:
//!
//! - a new `load()` supersedes the previous pending clear (it overwrites the
//!   deadline - no two timers can race),
//! - dropping the engine drops the deadline with it (nothing outlives the
//!   instance),
//! - tests drive time explicitly through `ManualClock` instead of sleeping.
//!
//! `SystemClock` is the production implementation; presentation layers that
//! poll the engine from a frame loop see `busy` flip exactly once, when the
//! deadline passes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// `now()` reports elapsed time since an implementation-defined origin. The
/// engine only ever compares two `now()` values from the same clock, so the
/// origin is irrelevant as long as the value never decreases.
pub trait Clock: fmt::Debug {
    /// Elapsed time since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time via `std::time::Instant`.
///
/// Origin is the moment the clock was created.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually-advanced clock for deterministic tests.
///
/// Clones share the same underlying time, so a test can keep a handle while
/// the engine owns another:
///
/// ```
/// use std::time::Duration;
/// use rust_roulette::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(1500));
/// assert_eq!(clock.now(), Duration::from_millis(1500));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta`.
    ///
    /// Sub-microsecond precision is truncated; the cooldown is a
    /// millisecond-scale policy constant so this never matters in practice.
    pub fn advance(&self, delta: Duration) {
        self.micros
            .fetch_add(delta.as_micros() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advance_accumulates() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(500));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(750));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(1500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }
}
