//! # Error Types
//!
//! Errors raised while decoding shared primitives.

use thiserror::Error;

/// Errors that can occur when parsing a [`crate::Hash256`] from hex.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// Nothing left after stripping whitespace and the `0x` prefix.
    #[error("Empty hex string")]
    Empty,

    /// More digits than fit in 256 bits.
    #[error("Hex string too long: {len} digits, at most 64 allowed")]
    TooLong { len: usize },

    /// A character outside `[0-9a-fA-F]`.
    #[error("Invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),
}
