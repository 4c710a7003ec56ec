//! # chain-params
//!
//! Consensus parameter sets for the MNPRO networks and the process-wide
//! selection of the active one.
//!
//! ## Architecture
//!
//! ```text
//! networks::{main, testnet, regtest, unittest}   NetworkConstants (plain data)
//!                  │
//!                  ▼  ChainParams::build: verify genesis, validate
//!                  │  checkpoints, materialize fixed seeds
//!                  ▼
//!          ParamsRegistry ── select(id) ──► current() -> Arc<ChainParams>
//!                  │
//!                  ▼
//!        service::global (process-wide LazyLock facade)
//! ```
//!
//! Testnet derives from main, regtest from testnet and unittest from main.
//! Only the unittest parameters can change after construction, through
//! `ModifiableParams`, which exists only with the `test-utils` feature.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chain_params::{params, select_params, NetworkId};
//!
//! select_params(NetworkId::Testnet);
//! let active = params();
//! assert_eq!(active.network_name(), "test");
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod networks;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, NetworkSelection, ParamsConfig};
pub use domain::{
    AddressPrefixes, Base58Type, ChainParams, ChainParamsError, CheckpointData, CheckpointTable,
    DnsSeed, GenesisError, GenesisSpec, MajorityThresholds, NetworkAddressRecord,
    NetworkConstants, NetworkId, ParamsSummary, PolicyFlags, RegistryError,
};
pub use ports::{RandomSource, TimeSource};
pub use service::{
    params, params_for, registry, select_params, select_params_from_env, ParamsRegistry,
};

#[cfg(any(test, feature = "test-utils"))]
pub use service::{modifiable_params, ModifiableParams};
