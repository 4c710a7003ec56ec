//! # Process-wide Parameters
//!
//! The single registry shared by every component of the node. It is built
//! and verified on first use. A network whose genesis block does not verify
//! aborts the process, as does reading parameters before one is selected.

use std::sync::{Arc, LazyLock};

use tracing::error;

use super::registry::ParamsRegistry;
#[cfg(any(test, feature = "test-utils"))]
use super::registry::ModifiableParams;
use crate::adapters::{SystemTimeSource, ThreadRandomSource};
use crate::config::{ConfigError, ParamsConfig};
use crate::domain::{ChainParams, NetworkId};

static REGISTRY: LazyLock<ParamsRegistry> = LazyLock::new(|| {
    match ParamsRegistry::new(&SystemTimeSource, &ThreadRandomSource) {
        Ok(registry) => registry,
        Err(e) => {
            error!("[chainparams] parameter integrity check failed: {}", e);
            panic!("chain parameter integrity check failed: {e}");
        }
    }
});

/// The process-wide registry.
pub fn registry() -> &'static ParamsRegistry {
    &REGISTRY
}

/// Make `id` the active network for the process.
pub fn select_params(id: NetworkId) {
    REGISTRY.select(id);
}

/// Select the network named by the environment and return it.
pub fn select_params_from_env() -> Result<NetworkId, ConfigError> {
    let id = ParamsConfig::from_env()?.network_id()?;
    select_params(id);
    Ok(id)
}

/// Parameters of `id`, regardless of the active selection.
pub fn params_for(id: NetworkId) -> Arc<ChainParams> {
    REGISTRY.lookup(id)
}

/// The active parameters.
///
/// # Panics
///
/// If no network has been selected.
pub fn params() -> Arc<ChainParams> {
    match REGISTRY.current() {
        Ok(params) => params,
        Err(e) => {
            error!("[chainparams] {}", e);
            panic!("{e}");
        }
    }
}

/// Mutation handle for the unit-test parameters.
///
/// # Panics
///
/// If the active network is not the unit-test network.
#[cfg(any(test, feature = "test-utils"))]
pub fn modifiable_params() -> ModifiableParams<'static> {
    match REGISTRY.current_as_mutable() {
        Ok(handle) => handle,
        Err(e) => {
            error!("[chainparams] {}", e);
            panic!("{e}");
        }
    }
}
