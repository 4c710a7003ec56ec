//! Ports (driven interfaces) consumed by parameter construction.

pub mod outbound;

pub use outbound::{RandomSource, TimeSource};
