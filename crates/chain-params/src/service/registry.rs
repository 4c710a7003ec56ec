//! # Parameter Registry
//!
//! Owns one verified [`ChainParams`] per network and tracks which one is
//! active for the process.
//!
//! Readers get an `Arc` snapshot from [`ParamsRegistry::current`], so a later
//! reselection or unit-test adjustment never changes parameters someone is
//! already holding.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::domain::{ChainParams, ChainParamsError, NetworkId, RegistryError};
use crate::networks;
use crate::ports::{RandomSource, TimeSource};

/// The per-process set of parameter sets plus the active selection.
#[derive(Debug)]
pub struct ParamsRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    /// Replaced copy-on-write by `ModifiableParams`.
    unit_test: RwLock<Arc<ChainParams>>,
    active: RwLock<Option<NetworkId>>,
}

impl ParamsRegistry {
    /// Build and verify every network's parameters. Nothing is selected.
    pub fn new(time: &dyn TimeSource, rng: &dyn RandomSource) -> Result<Self, ChainParamsError> {
        let build = |id| ChainParams::build(&networks::constants(id), time, rng).map(Arc::new);

        let registry = Self {
            main: build(NetworkId::Main)?,
            testnet: build(NetworkId::Testnet)?,
            regtest: build(NetworkId::Regtest)?,
            unit_test: RwLock::new(build(NetworkId::UnitTest)?),
            active: RwLock::new(None),
        };

        info!("[chainparams] registry ready with {} networks", NetworkId::ALL.len());
        Ok(registry)
    }

    /// Parameters of `id`, regardless of the active selection.
    pub fn lookup(&self, id: NetworkId) -> Arc<ChainParams> {
        match id {
            NetworkId::Main => Arc::clone(&self.main),
            NetworkId::Testnet => Arc::clone(&self.testnet),
            NetworkId::Regtest => Arc::clone(&self.regtest),
            NetworkId::UnitTest => self.unit_test.read().clone(),
        }
    }

    /// Make `id` the active network. Reselecting simply replaces the choice.
    pub fn select(&self, id: NetworkId) {
        let previous = self.active.write().replace(id);
        match previous {
            Some(previous) if previous != id => {
                info!("[chainparams] switched active network {} -> {}", previous, id)
            }
            Some(_) => {}
            None => info!("[chainparams] selected {} network", id),
        }
    }

    pub fn active_network(&self) -> Option<NetworkId> {
        *self.active.read()
    }

    /// Snapshot of the active parameters.
    pub fn current(&self) -> Result<Arc<ChainParams>, RegistryError> {
        self.active_network()
            .map(|id| self.lookup(id))
            .ok_or(RegistryError::NoNetworkSelected)
    }

    /// Mutation handle for the unit-test parameters.
    ///
    /// Only available while the unit-test network is active.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn current_as_mutable(&self) -> Result<ModifiableParams<'_>, RegistryError> {
        match self.active_network() {
            Some(NetworkId::UnitTest) => Ok(ModifiableParams {
                slot: &self.unit_test,
            }),
            active => Err(RegistryError::NotUnitTest { active }),
        }
    }
}

/// Setters for the unit-test parameter set.
///
/// Each call publishes a new snapshot; `Arc`s handed out earlier keep the
/// values they were read with.
#[cfg(any(test, feature = "test-utils"))]
pub struct ModifiableParams<'a> {
    slot: &'a RwLock<Arc<ChainParams>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ModifiableParams<'_> {
    fn update(&self, apply: impl FnOnce(&mut ChainParams)) {
        let mut guard = self.slot.write();
        apply(Arc::make_mut(&mut *guard));
    }

    pub fn set_subsidy_halving_interval(&self, interval: u32) {
        self.update(|p| p.subsidy_halving_interval = interval);
    }

    pub fn set_enforce_block_upgrade_majority(&self, majority: u32) {
        self.update(|p| p.majority.enforce_block_upgrade = majority);
    }

    pub fn set_reject_block_outdated_majority(&self, majority: u32) {
        self.update(|p| p.majority.reject_block_outdated = majority);
    }

    pub fn set_to_check_block_upgrade_majority(&self, majority: u32) {
        self.update(|p| p.majority.to_check_block_upgrade = majority);
    }

    pub fn set_default_consistency_checks(&self, enabled: bool) {
        self.update(|p| p.flags.default_consistency_checks = enabled);
    }

    pub fn set_allow_min_difficulty_blocks(&self, allowed: bool) {
        self.update(|p| p.flags.allow_min_difficulty_blocks = allowed);
    }

    pub fn set_skip_proof_of_work_check(&self, skip: bool) {
        self.update(|p| p.flags.skip_proof_of_work_check = skip);
    }
}
