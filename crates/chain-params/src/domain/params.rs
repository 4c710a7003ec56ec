//! # Chain Parameter Set
//!
//! [`NetworkConstants`] is the plain data describing one network. Derived
//! networks start from their parent's constants and override fields with
//! struct-update syntax. [`ChainParams`] is the verified, immutable result
//! of building those constants: genesis block checked, checkpoint table
//! validated, fixed seeds materialized.

use primitive_types::U256;
use serde::Serialize;
use shared_types::{Amount, Block, Hash256};
use tracing::info;

use super::checkpoints::{CheckpointData, CheckpointTable};
use super::error::{ChainParamsError, GenesisError};
use super::genesis::{verify_genesis, GenesisSpec};
use super::network::NetworkId;
use super::prefixes::{AddressPrefixes, Base58Type};
use super::seeds::{decode_seed_table, materialize_seeds, DnsSeed, NetworkAddressRecord};
use crate::ports::{RandomSource, TimeSource};

/// Block version supermajority thresholds, counted over
/// `to_check_block_upgrade` recent blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MajorityThresholds {
    /// Blocks of the new version needed before it is enforced.
    pub enforce_block_upgrade: u32,
    /// Blocks of the new version needed before old versions are rejected.
    pub reject_block_outdated: u32,
    /// Window size.
    pub to_check_block_upgrade: u32,
}

/// Boolean network policy switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Unverified constants for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConstants {
    pub id: NetworkId,
    pub magic: [u8; 4],
    /// Alert system public key, hex.
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    pub pow_limit: U256,
    pub subsidy_halving_interval: u32,
    pub max_reorg_depth: u32,
    pub majority: MajorityThresholds,
    pub miner_threads: u32,
    /// Seconds.
    pub target_timespan: i64,
    /// Seconds.
    pub target_spacing: i64,
    pub last_pow_block: u32,
    pub coinbase_maturity: u32,
    pub masternode_count_drift: u32,
    pub modifier_update_block: u32,
    pub max_money: Amount,
    pub genesis: GenesisSpec,
    pub expected_genesis_hash: &'static str,
    pub expected_merkle_root: &'static str,
    pub dns_seeds: &'static [DnsSeed],
    /// Compact 18-byte-record seed table.
    pub fixed_seeds: &'static [u8],
    pub prefixes: AddressPrefixes,
    pub flags: PolicyFlags,
    pub pool_max_transactions: u32,
    /// Spork signing public key, hex.
    pub spork_pubkey: &'static str,
    pub pool_dummy_address: &'static str,
    /// Unix time at which masternode payments begin.
    pub start_masternode_payments: i64,
    pub budget_fee_confirmations: u32,
    /// `(height, display-hex hash)`, strictly increasing.
    pub checkpoints: &'static [(u32, &'static str)],
    pub checkpoint_data: CheckpointData,
}

/// The consensus parameter set of one network.
///
/// Read-only outside this crate; the unit-test network is adjusted through
/// `ModifiableParams` under the `test-utils` feature.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub(crate) id: NetworkId,
    pub(crate) magic: [u8; 4],
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) pow_limit: U256,
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) max_reorg_depth: u32,
    pub(crate) majority: MajorityThresholds,
    pub(crate) miner_threads: u32,
    pub(crate) target_timespan: i64,
    pub(crate) target_spacing: i64,
    pub(crate) last_pow_block: u32,
    pub(crate) coinbase_maturity: u32,
    pub(crate) masternode_count_drift: u32,
    pub(crate) modifier_update_block: u32,
    pub(crate) max_money: Amount,
    pub(crate) genesis: Block,
    pub(crate) genesis_hash: Hash256,
    pub(crate) dns_seeds: &'static [DnsSeed],
    pub(crate) fixed_seeds: Vec<NetworkAddressRecord>,
    pub(crate) prefixes: AddressPrefixes,
    pub(crate) flags: PolicyFlags,
    pub(crate) pool_max_transactions: u32,
    pub(crate) spork_pubkey: &'static str,
    pub(crate) pool_dummy_address: &'static str,
    pub(crate) start_masternode_payments: i64,
    pub(crate) budget_fee_confirmations: u32,
    pub(crate) checkpoints: CheckpointTable,
}

impl ChainParams {
    /// Verify `constants` and build the parameter set.
    ///
    /// Fails if the genesis block does not reproduce the expected hash and
    /// Merkle root, if the checkpoint table is not strictly increasing, or
    /// if any encoded constant is malformed.
    pub fn build(
        constants: &NetworkConstants,
        time: &dyn TimeSource,
        rng: &dyn RandomSource,
    ) -> Result<Self, ChainParamsError> {
        let network = constants.id;
        let genesis_error = |source: GenesisError| ChainParamsError::Genesis { network, source };

        let expected_hash =
            Hash256::from_hex(constants.expected_genesis_hash).map_err(|e| genesis_error(e.into()))?;
        let expected_merkle =
            Hash256::from_hex(constants.expected_merkle_root).map_err(|e| genesis_error(e.into()))?;
        let genesis = verify_genesis(&constants.genesis, &expected_hash, &expected_merkle)
            .map_err(genesis_error)?;

        let checkpoints =
            CheckpointTable::from_hex_entries(constants.checkpoints, constants.checkpoint_data)
                .map_err(|source| ChainParamsError::Checkpoints { network, source })?;

        let seed_specs = decode_seed_table(constants.fixed_seeds)
            .map_err(|source| ChainParamsError::SeedTable { network, source })?;
        let fixed_seeds = materialize_seeds(&seed_specs, time, rng);

        let alert_pubkey = decode_key(network, "alert public key", constants.alert_pubkey)?;
        decode_key(network, "spork public key", constants.spork_pubkey)?;

        info!(
            "[chainparams] built {} parameters: genesis={}, checkpoints={}, fixed seeds={}",
            network,
            genesis.hash,
            checkpoints.len(),
            fixed_seeds.len()
        );

        Ok(Self {
            id: network,
            magic: constants.magic,
            alert_pubkey,
            default_port: constants.default_port,
            pow_limit: constants.pow_limit,
            subsidy_halving_interval: constants.subsidy_halving_interval,
            max_reorg_depth: constants.max_reorg_depth,
            majority: constants.majority,
            miner_threads: constants.miner_threads,
            target_timespan: constants.target_timespan,
            target_spacing: constants.target_spacing,
            last_pow_block: constants.last_pow_block,
            coinbase_maturity: constants.coinbase_maturity,
            masternode_count_drift: constants.masternode_count_drift,
            modifier_update_block: constants.modifier_update_block,
            max_money: constants.max_money,
            genesis: genesis.block,
            genesis_hash: genesis.hash,
            dns_seeds: constants.dns_seeds,
            fixed_seeds,
            prefixes: constants.prefixes,
            flags: constants.flags,
            pool_max_transactions: constants.pool_max_transactions,
            spork_pubkey: constants.spork_pubkey,
            pool_dummy_address: constants.pool_dummy_address,
            start_masternode_payments: constants.start_masternode_payments,
            budget_fee_confirmations: constants.budget_fee_confirmations,
            checkpoints,
        })
    }

    pub fn network_id(&self) -> NetworkId {
        self.id
    }

    pub fn network_name(&self) -> &'static str {
        self.id.name()
    }

    /// Message start bytes prefixed to every p2p message.
    pub fn magic(&self) -> [u8; 4] {
        self.magic
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Easiest allowed proof-of-work target.
    pub fn pow_limit(&self) -> U256 {
        self.pow_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn max_reorg_depth(&self) -> u32 {
        self.max_reorg_depth
    }

    pub fn majority(&self) -> &MajorityThresholds {
        &self.majority
    }

    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.majority.enforce_block_upgrade
    }

    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.majority.reject_block_outdated
    }

    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.majority.to_check_block_upgrade
    }

    /// Default number of mining threads; 0 lets the miner decide.
    pub fn miner_threads(&self) -> u32 {
        self.miner_threads
    }

    pub fn target_timespan(&self) -> i64 {
        self.target_timespan
    }

    pub fn target_spacing(&self) -> i64 {
        self.target_spacing
    }

    /// Blocks between difficulty retargets (`timespan / spacing`, truncated).
    pub fn retarget_interval(&self) -> i64 {
        self.target_timespan
            .checked_div(self.target_spacing)
            .unwrap_or(0)
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn coinbase_maturity(&self) -> u32 {
        self.coinbase_maturity
    }

    pub fn masternode_count_drift(&self) -> u32 {
        self.masternode_count_drift
    }

    pub fn modifier_update_block(&self) -> u32 {
        self.modifier_update_block
    }

    pub fn max_money(&self) -> Amount {
        self.max_money
    }

    /// Whether `amount` is a valid monetary value on this network.
    pub fn money_range(&self, amount: Amount) -> bool {
        (0..=self.max_money).contains(&amount)
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> &Hash256 {
        &self.genesis_hash
    }

    pub fn dns_seeds(&self) -> &'static [DnsSeed] {
        self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[NetworkAddressRecord] {
        &self.fixed_seeds
    }

    pub fn prefixes(&self) -> &AddressPrefixes {
        &self.prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.prefixes.get(kind)
    }

    pub fn flags(&self) -> &PolicyFlags {
        &self.flags
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.flags.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.flags.allow_min_difficulty_blocks
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.flags.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.flags.skip_proof_of_work_check
    }

    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.flags.testnet_to_be_deprecated_field_rpc
    }

    pub fn headers_first_syncing_active(&self) -> bool {
        self.flags.headers_first_syncing_active
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    pub fn spork_pubkey(&self) -> &'static str {
        self.spork_pubkey
    }

    pub fn pool_dummy_address(&self) -> &'static str {
        self.pool_dummy_address
    }

    pub fn start_masternode_payments(&self) -> i64 {
        self.start_masternode_payments
    }

    pub fn budget_fee_confirmations(&self) -> u32 {
        self.budget_fee_confirmations
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Serializable digest for diagnostics and startup logging.
    pub fn summary(&self) -> ParamsSummary {
        ParamsSummary {
            network: self.id,
            magic: hex::encode(self.magic),
            default_port: self.default_port,
            genesis_hash: self.genesis_hash,
            pow_limit: self.pow_limit,
            subsidy_halving_interval: self.subsidy_halving_interval,
            target_timespan: self.target_timespan,
            target_spacing: self.target_spacing,
            retarget_interval: self.retarget_interval(),
            coinbase_maturity: self.coinbase_maturity,
            last_pow_block: self.last_pow_block,
            max_money: self.max_money,
            last_checkpoint_height: self.checkpoints.last_height(),
            checkpoint_data: *self.checkpoints.data(),
            dns_seeds: self.dns_seeds.len(),
            fixed_seeds: self.fixed_seeds.len(),
            flags: self.flags,
        }
    }
}

/// Digest of a [`ChainParams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamsSummary {
    pub network: NetworkId,
    pub magic: String,
    pub default_port: u16,
    pub genesis_hash: Hash256,
    pub pow_limit: U256,
    pub subsidy_halving_interval: u32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub retarget_interval: i64,
    pub coinbase_maturity: u32,
    pub last_pow_block: u32,
    pub max_money: Amount,
    pub last_checkpoint_height: Option<u32>,
    pub checkpoint_data: CheckpointData,
    pub dns_seeds: usize,
    pub fixed_seeds: usize,
    pub flags: PolicyFlags,
}

fn decode_key(
    network: NetworkId,
    field: &'static str,
    hex_key: &str,
) -> Result<Vec<u8>, ChainParamsError> {
    hex::decode(hex_key).map_err(|source| ChainParamsError::InvalidKey {
        network,
        field,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CheckpointError;
    use crate::networks;
    use crate::test_utils::{FixedRandomSource, FixedTimeSource};
    use shared_types::COIN;

    fn build(constants: &NetworkConstants) -> Result<ChainParams, ChainParamsError> {
        ChainParams::build(
            constants,
            &FixedTimeSource(1_700_000_000),
            &FixedRandomSource::zero(),
        )
    }

    #[test]
    fn test_money_range() {
        let params = build(&networks::constants(NetworkId::Main)).unwrap();
        assert!(params.money_range(0));
        assert!(params.money_range(50_000_000 * COIN));
        assert!(!params.money_range(50_000_000 * COIN + 1));
        assert!(!params.money_range(-1));
    }

    #[test]
    fn test_retarget_interval_truncates() {
        let main = build(&networks::constants(NetworkId::Main)).unwrap();
        assert_eq!(main.retarget_interval(), 2);
        let regtest = build(&networks::constants(NetworkId::Regtest)).unwrap();
        assert_eq!(regtest.retarget_interval(), 720);
    }

    #[test]
    fn test_edited_genesis_fails_construction() {
        let mut constants = networks::constants(NetworkId::Testnet);
        constants.genesis.time += 1;
        let err = build(&constants).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::Genesis {
                network: NetworkId::Testnet,
                source: GenesisError::HashMismatch { .. }
            }
        ));
    }

    #[test]
    fn test_unsorted_checkpoints_fail_construction() {
        let mut constants = networks::constants(NetworkId::Regtest);
        constants.checkpoints = &[(5, "0x01"), (1, "0x02")];
        let err = build(&constants).unwrap_err();
        assert_eq!(
            err,
            ChainParamsError::Checkpoints {
                network: NetworkId::Regtest,
                source: CheckpointError::NotIncreasing {
                    previous: 5,
                    height: 1
                }
            }
        );
    }

    #[test]
    fn test_bad_seed_table_fails_construction() {
        let mut constants = networks::constants(NetworkId::Regtest);
        constants.fixed_seeds = &[0u8; 5];
        assert!(matches!(
            build(&constants),
            Err(ChainParamsError::SeedTable { .. })
        ));
    }

    #[test]
    fn test_bad_spork_key_fails_construction() {
        let mut constants = networks::constants(NetworkId::Main);
        constants.spork_pubkey = "not hex";
        assert!(matches!(
            build(&constants),
            Err(ChainParamsError::InvalidKey {
                field: "spork public key",
                ..
            })
        ));
    }

    #[test]
    fn test_summary_serializes() {
        let params = build(&networks::constants(NetworkId::Main)).unwrap();
        let summary = params.summary();
        assert_eq!(summary.magic, "d49ed3ad");
        assert_eq!(summary.fixed_seeds, params.fixed_seeds().len());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["network"], "main");
        assert_eq!(json["default_port"], 30229);
        assert_eq!(json["genesis_hash"], params.genesis_hash().to_hex());
    }
}
