//! Public test network, derived from main.

use shared_types::COIN;

use super::{main, seeds::TESTNET_SEED_TABLE};
use crate::domain::{
    AddressPrefixes, CheckpointData, GenesisSpec, MajorityThresholds, NetworkConstants, NetworkId,
    PolicyFlags,
};

pub(crate) const GENESIS_TIME: u32 = 1_516_926_684;

/// 130229 in the reference table, truncated to a 16-bit port.
const DEFAULT_PORT: u16 = (130_229u32 & 0xffff) as u16;

static CHECKPOINTS: &[(u32, &str)] = &[(0, "0x001")];

const CHECKPOINT_DATA: CheckpointData = CheckpointData {
    last_checkpoint_time: 1_740_710,
    transactions_before_last_checkpoint: 0,
    estimated_transactions_per_day: 250,
};

pub fn constants() -> NetworkConstants {
    let parent = main::constants();
    NetworkConstants {
        id: NetworkId::Testnet,
        magic: [0x4a, 0x2d, 0x32, 0xbc],
        alert_pubkey: "041b2b4c86273359acac3522471911ed2b303eaab65e8a1de01c06e89f2eab1e55234a4b504f3ce20c6f661f007d0ca15623b4358d9855c7c8ba793a24fa315e22",
        default_port: DEFAULT_PORT,
        majority: MajorityThresholds {
            enforce_block_upgrade: 51,
            reject_block_outdated: 75,
            to_check_block_upgrade: 100,
        },
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 2 * 60,
        last_pow_block: 200,
        coinbase_maturity: 15,
        masternode_count_drift: 4,
        modifier_update_block: 1,
        max_money: 21_000_000 * COIN,
        genesis: GenesisSpec {
            time: GENESIS_TIME,
            nonce: 3_097_091,
            ..parent.genesis
        },
        expected_genesis_hash: "0xecdd116b1a0968b043881b0dac359e2b8694c4ca9ad6c67ef298b108264be163",
        dns_seeds: &[],
        fixed_seeds: TESTNET_SEED_TABLE,
        prefixes: AddressPrefixes {
            pubkey_address: &[98],
            script_address: &[12],
            secret_key: &[108],
            ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
            ext_coin_type: &[0x80, 0x00, 0x00, 0x01],
        },
        flags: PolicyFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            ..parent.flags
        },
        pool_max_transactions: 2,
        spork_pubkey: "04abb5e65280dda6a113fadfb9877f9c399532245fe1acb61de293ab298034d5084277fab3768774a3b68cbbe5021cc5049ec8c9997a13f64da1afa0bcfb156db1",
        pool_dummy_address: "pbJ4Qad4xc77PpLzMx6rUegAs6aUPWkcUq",
        start_masternode_payments: GENESIS_TIME as i64 + 86_400,
        // Short, to fit the 8 block finalization window
        budget_fee_confirmations: 3,
        checkpoints: CHECKPOINTS,
        checkpoint_data: CHECKPOINT_DATA,
        ..parent
    }
}
