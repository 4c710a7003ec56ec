//! Hashing utilities for the block and transaction model
//!
//! Transaction ids, block hashes and Merkle nodes all use double SHA-256.

use sha2::{Digest, Sha256};

use crate::hash::Hash256;

/// Compute SHA-256 hash of data
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 hash (Bitcoin-style)
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first_hash = sha256(data);
    sha256(&first_hash)
}

/// Double SHA-256 wrapped as a [`Hash256`].
#[inline]
pub fn hash256(data: &[u8]) -> Hash256 {
    Hash256::from_bytes(sha256d(data))
}

/// Compute the Merkle root over a list of leaf hashes.
///
/// Levels with an odd number of nodes pair the last node with itself.
/// An empty list yields the zero hash.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }

    let mut level: Vec<Hash256> = leaves.to_vec();

    while level.len() > 1 {
        let mut next_level = Vec::with_capacity(level.len().div_ceil(2));

        for pair in level.chunks(2) {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);

            let mut concat = [0u8; 64];
            concat[..32].copy_from_slice(left.as_bytes());
            concat[32..].copy_from_slice(right.as_bytes());
            next_level.push(hash256(&concat));
        }

        level = next_level;
    }

    level[0]
}
