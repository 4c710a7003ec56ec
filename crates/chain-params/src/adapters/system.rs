//! System clock and thread-local RNG adapters.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::ports::{RandomSource, TimeSource};

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        // A clock before the epoch reads as 0
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Uniform randomness from `rand::thread_rng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn random_below(&self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_is_after_2018() {
        assert!(SystemTimeSource.now() > 1_514_764_800);
    }

    #[test]
    fn test_thread_random_stays_below_bound() {
        let rng = ThreadRandomSource;
        for _ in 0..1_000 {
            assert!(rng.random_below(7) < 7);
        }
        assert_eq!(rng.random_below(0), 0);
    }
}
