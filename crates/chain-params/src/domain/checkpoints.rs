//! # Checkpoint Table
//!
//! Known-good block hashes at fixed heights, plus the statistics used to
//! estimate verification progress. The table is data only: enforcing it
//! against incoming blocks belongs to block validation.

use std::collections::BTreeMap;

use serde::Serialize;
use shared_types::Hash256;

use super::error::CheckpointError;

/// Progress-estimation metadata attached to a checkpoint table.
///
/// The transaction counts are estimates for progress reporting, never
/// consensus rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    /// Unix timestamp of the last checkpointed block.
    pub last_checkpoint_time: i64,
    /// Total transactions up to and including the last checkpoint.
    pub transactions_before_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint.
    pub estimated_transactions_per_day: u64,
}

/// Height to expected block hash, with strictly increasing heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointTable {
    entries: BTreeMap<u32, Hash256>,
    data: CheckpointData,
}

impl CheckpointTable {
    /// Build a table from `(height, display-hex hash)` pairs.
    ///
    /// Heights must be strictly increasing in the given order; a duplicate
    /// or descending height is rejected.
    pub fn from_hex_entries(
        entries: &[(u32, &str)],
        data: CheckpointData,
    ) -> Result<Self, CheckpointError> {
        let mut table = BTreeMap::new();
        let mut previous: Option<u32> = None;

        for &(height, hex) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(CheckpointError::NotIncreasing { previous, height });
                }
            }
            let hash = Hash256::from_hex(hex)
                .map_err(|source| CheckpointError::InvalidHash { height, source })?;
            table.insert(height, hash);
            previous = Some(height);
        }

        Ok(Self {
            entries: table,
            data,
        })
    }

    /// Expected hash at `height`, if that height is checkpointed.
    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.entries.get(&height)
    }

    /// Highest checkpointed height.
    pub fn last_height(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }

    /// Highest checkpoint as `(height, hash)`.
    pub fn last(&self) -> Option<(u32, &Hash256)> {
        self.entries.iter().next_back().map(|(h, hash)| (*h, hash))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> {
        self.entries.iter().map(|(h, hash)| (*h, hash))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn data(&self) -> &CheckpointData {
        &self.data
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.data.last_checkpoint_time
    }

    pub fn transactions_before_last_checkpoint(&self) -> u64 {
        self.data.transactions_before_last_checkpoint
    }

    pub fn estimated_transactions_per_day(&self) -> u64 {
        self.data.estimated_transactions_per_day
    }
}
