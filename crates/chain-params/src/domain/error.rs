//! Error types for parameter construction and the registry.

use shared_types::{Hash256, HexError};
use thiserror::Error;

use super::network::NetworkId;

/// Rejected checkpoint table entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    #[error("checkpoint height {height} does not increase on {previous}")]
    NotIncreasing { previous: u32, height: u32 },

    #[error("checkpoint at height {height} has an invalid hash: {source}")]
    InvalidHash { height: u32, source: HexError },
}

/// Malformed compact seed table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedTableError {
    #[error("seed table length {len} is not a multiple of {record_len}")]
    TruncatedRecord { len: usize, record_len: usize },
}

/// Genesis block construction or self-verification failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenesisError {
    #[error("genesis reward key is not valid hex: {0}")]
    InvalidRewardKey(#[from] hex::FromHexError),

    #[error("genesis expectation is not a valid hash: {0}")]
    InvalidExpectation(#[from] HexError),

    #[error("genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        expected: Hash256,
        computed: Hash256,
    },

    #[error("genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        expected: Hash256,
        computed: Hash256,
    },
}

/// Failure building the parameter set of one network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainParamsError {
    #[error("{network} genesis block failed verification: {source}")]
    Genesis {
        network: NetworkId,
        source: GenesisError,
    },

    #[error("{network} checkpoint table is invalid: {source}")]
    Checkpoints {
        network: NetworkId,
        source: CheckpointError,
    },

    #[error("{network} fixed seed table is invalid: {source}")]
    SeedTable {
        network: NetworkId,
        source: SeedTableError,
    },

    #[error("{network} {field} is not valid hex: {source}")]
    InvalidKey {
        network: NetworkId,
        field: &'static str,
        source: hex::FromHexError,
    },
}

/// Registry precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no network selected: call select before reading the active parameters")]
    NoNetworkSelected,

    #[error("parameters are only modifiable on the unittest network (active: {active:?})")]
    NotUnitTest { active: Option<NetworkId> },
}
