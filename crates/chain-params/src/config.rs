//! Network selection from environment variables.
//!
//! # Environment Variables
//!
//! - `MNPRO_NETWORK`: network name (`main`, `test`, `regtest`, `unittest`)
//! - `MNPRO_TESTNET`: select testnet (`1`/`true`)
//! - `MNPRO_REGTEST`: select regtest (`1`/`true`)
//!
//! An explicit `MNPRO_NETWORK` wins over the flags. With neither, the node
//! runs on main.

use std::env;

use thiserror::Error;

use crate::domain::{NetworkId, UnknownNetwork};

pub const NETWORK_VAR: &str = "MNPRO_NETWORK";
pub const TESTNET_VAR: &str = "MNPRO_TESTNET";
pub const REGTEST_VAR: &str = "MNPRO_REGTEST";

/// Errors resolving the configured network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid combination of MNPRO_TESTNET and MNPRO_REGTEST")]
    ConflictingNetworkFlags,

    #[error(transparent)]
    UnknownNetwork(#[from] UnknownNetwork),

    #[error("{var} must be a boolean, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// The `testnet` / `regtest` switch pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkSelection {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkSelection {
    /// Both switches set is an error; neither selects main.
    pub fn network_id(&self) -> Result<NetworkId, ConfigError> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(ConfigError::ConflictingNetworkFlags),
            (false, true) => Ok(NetworkId::Regtest),
            (true, false) => Ok(NetworkId::Testnet),
            (false, false) => Ok(NetworkId::Main),
        }
    }
}

/// Parameter-selection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsConfig {
    /// Explicit network; overrides `selection` when set.
    pub network: Option<NetworkId>,
    pub selection: NetworkSelection,
}

impl ParamsConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network = lookup(NETWORK_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<NetworkId>())
            .transpose()?;

        let selection = NetworkSelection {
            testnet: parse_flag(TESTNET_VAR, lookup(TESTNET_VAR))?,
            regtest: parse_flag(REGTEST_VAR, lookup(REGTEST_VAR))?,
        };

        Ok(Self { network, selection })
    }

    /// The network to select.
    pub fn network_id(&self) -> Result<NetworkId, ConfigError> {
        match self.network {
            Some(id) => Ok(id),
            None => self.selection.network_id(),
        }
    }
}

fn parse_flag(var: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
