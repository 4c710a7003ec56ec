//! # Driven Ports
//!
//! Clock and randomness are injected so seed materialization stays
//! deterministic under test.

/// Abstract interface for the wall clock.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct FixedTimeSource(u64);
///
/// impl TimeSource for FixedTimeSource {
///     fn now(&self) -> u64 {
///         self.0
///     }
/// }
/// ```
pub trait TimeSource: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> u64;
}

/// Abstract interface for uniform random numbers.
pub trait RandomSource: Send + Sync {
    /// A value uniformly drawn from `[0, max)`. Returns 0 when `max` is 0.
    fn random_below(&self, max: u64) -> u64;
}
