//! Adapters implementing the driven ports against the host system.

pub mod system;

pub use system::{SystemTimeSource, ThreadRandomSource};
