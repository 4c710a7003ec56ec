//! # Shared Types Crate
//!
//! The block and transaction model consumed by the chain parameter sets and
//! by every consensus-sensitive component of the node.
//!
//! ## Contents
//!
//! - **Hashes**: [`Hash256`] with conventional reversed-hex display.
//! - **Hashing**: double SHA-256 and Bitcoin-style Merkle roots.
//! - **Scripts**: [`Script`] and [`ScriptBuilder`] with minimal push encoding.
//! - **Entities**: transactions, block headers and blocks together with
//!   their consensus serialization.

pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hash;
pub mod hashing;
pub mod script;

pub use encoding::Encodable;
pub use entities::*;
pub use errors::*;
pub use hash::Hash256;
pub use script::{Script, ScriptBuilder};

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;
