//! Regression test network, derived from testnet.

use primitive_types::U256;

use super::testnet;
use crate::domain::{
    CheckpointData, GenesisSpec, MajorityThresholds, NetworkConstants, NetworkId, PolicyFlags,
};

/// 230229 in the reference table, truncated to a 16-bit port.
const DEFAULT_PORT: u16 = (230_229u32 & 0xffff) as u16;

static CHECKPOINTS: &[(u32, &str)] = &[(0, "0x001")];

const CHECKPOINT_DATA: CheckpointData = CheckpointData {
    last_checkpoint_time: 1_454_124_731,
    transactions_before_last_checkpoint: 0,
    estimated_transactions_per_day: 100,
};

pub fn constants() -> NetworkConstants {
    let parent = testnet::constants();
    NetworkConstants {
        id: NetworkId::Regtest,
        magic: [0x20, 0xee, 0x32, 0xbc],
        default_port: DEFAULT_PORT,
        pow_limit: U256::MAX >> 1u32,
        subsidy_halving_interval: 150,
        majority: MajorityThresholds {
            enforce_block_upgrade: 750,
            reject_block_outdated: 950,
            to_check_block_upgrade: 1000,
        },
        miner_threads: 1,
        target_timespan: 24 * 60 * 60,
        target_spacing: 2 * 60,
        genesis: GenesisSpec {
            time: testnet::GENESIS_TIME,
            bits: 0x207f_ffff,
            nonce: 0,
            ..parent.genesis
        },
        expected_genesis_hash: "0x82f1db29393157ae5c0d740f24c1c7ca24367952694afdd092417bff00c5eb7a",
        // No DNS or fixed seeds
        dns_seeds: &[],
        fixed_seeds: &[],
        flags: PolicyFlags {
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..parent.flags
        },
        checkpoints: CHECKPOINTS,
        checkpoint_data: CHECKPOINT_DATA,
        ..parent
    }
}
