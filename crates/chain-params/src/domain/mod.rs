//! Domain layer: the parameter-set model and the pure functions that build
//! and verify it.

pub mod checkpoints;
pub mod error;
pub mod genesis;
pub mod network;
pub mod params;
pub mod prefixes;
pub mod seeds;

pub use checkpoints::{CheckpointData, CheckpointTable};
pub use error::{ChainParamsError, CheckpointError, GenesisError, RegistryError, SeedTableError};
pub use genesis::{
    build_genesis_block, sha256d_header_hash, verify_genesis, GenesisSpec, HeaderHashFn,
    VerifiedGenesis,
};
pub use network::{NetworkId, UnknownNetwork};
pub use params::{
    ChainParams, MajorityThresholds, NetworkConstants, ParamsSummary, PolicyFlags,
};
pub use prefixes::{AddressPrefixes, Base58Type};
pub use seeds::{
    decode_seed_table, materialize_seeds, DnsSeed, NetworkAddressRecord, SeedSpec6, NODE_NETWORK,
    ONE_WEEK_SECS, SEED_RECORD_LEN,
};
