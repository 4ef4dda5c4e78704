//! # Wall-clock abstraction for test determinism
//!
//! The document records wall-clock timestamps (epoch seconds) for the
//! LISTEN/STARTREC/ENDREC events. This module provides a WallClock trait with
//! a real implementation and a settable test implementation so those fields
//! can be asserted exactly in tests.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Wall-clock source yielding Unix epoch seconds.
pub trait WallClock: Send + Sync {
    /// Current time as whole seconds since the Unix epoch.
    fn epoch_secs(&self) -> i64;
}

/// System wall clock.
pub struct RealWallClock;

impl Default for RealWallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RealWallClock {
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for RealWallClock {
    fn epoch_secs(&self) -> i64 {
        // Pre-epoch system time is not a supported configuration.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// Settable clock for deterministic tests.
pub struct TestWallClock {
    current: Mutex<i64>,
}

impl Default for TestWallClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TestWallClock {
    pub fn new(start: i64) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Advance the clock by the given number of seconds.
    pub fn advance(&self, secs: i64) {
        *self.current.lock() += secs;
    }

    /// Set the clock to an absolute epoch time.
    pub fn set(&self, secs: i64) {
        *self.current.lock() = secs;
    }
}

impl WallClock for TestWallClock {
    fn epoch_secs(&self) -> i64 {
        *self.current.lock()
    }
}

/// Thread-safe clock handle shared across components.
pub type SharedWallClock = Arc<dyn WallClock>;

/// Create a system clock handle.
pub fn real_wall_clock() -> SharedWallClock {
    Arc::new(RealWallClock::new())
}

/// Create a test clock handle starting at the given epoch time.
pub fn test_wall_clock(start: i64) -> SharedWallClock {
    Arc::new(TestWallClock::new(start))
}
