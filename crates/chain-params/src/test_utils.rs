//! Deterministic port implementations for tests.

use crate::ports::{RandomSource, TimeSource};

/// Test-only TimeSource returning a fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub u64);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Fixed random source for deterministic testing.
///
/// Always returns `value % max`.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    value: u64,
}

impl FixedRandomSource {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns 0 for every draw.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Returns `max - 1` for every draw.
    pub fn max() -> Self {
        Self::new(u64::MAX)
    }
}

impl RandomSource for FixedRandomSource {
    fn random_below(&self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        if self.value == u64::MAX {
            max - 1
        } else {
            self.value % max
        }
    }
}
