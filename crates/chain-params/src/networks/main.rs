//! Main network: the canonical constant set every other network derives from.

use primitive_types::U256;
use shared_types::COIN;

use super::seeds::MAIN_SEED_TABLE;
use crate::domain::genesis::sha256d_header_hash;
use crate::domain::{
    AddressPrefixes, CheckpointData, DnsSeed, GenesisSpec, MajorityThresholds, NetworkConstants,
    NetworkId, PolicyFlags,
};

const GENESIS_TIME: u32 = 1_546_300_800;

pub(crate) static DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("95.179.131.223", "95.179.131.223"),
    DnsSeed::new("217.69.9.93", "217.69.9.93"),
    DnsSeed::new("104.238.177.207", "104.238.177.207"),
    DnsSeed::new("209.250.243.131", "209.250.243.131"),
    DnsSeed::new("209.250.241.176", "209.250.241.176"),
    DnsSeed::new("45.77.239.108", "45.77.239.108"),
    DnsSeed::new("107.191.44.102", "107.191.44.102"),
    DnsSeed::new("45.32.235.211", "45.32.235.211"),
    DnsSeed::new("108.61.188.67", "108.61.188.67"),
    DnsSeed::new("108.61.95.114", "108.61.95.114"),
    DnsSeed::new("45.77.193.238", "45.77.193.238"),
    DnsSeed::new("45.32.133.67", "45.32.133.67"),
    DnsSeed::new("108.160.134.29", "108.160.134.29"),
    DnsSeed::new("207.148.86.107", "207.148.86.107"),
    DnsSeed::new("45.63.114.212", "45.63.114.212"),
    DnsSeed::new("45.32.22.184", "45.32.22.184"),
    DnsSeed::new("63.211.111.86", "63.211.111.86"),
    DnsSeed::new("144.202.70.111", "144.202.70.111"),
];

pub(crate) static CHECKPOINTS: &[(u32, &str)] = &[
    (0, "0xfa19236e5ccaf0161b53388a3ca5c3cbdaabc1d788263ed79fd5c3e5479d41a9"),
    (2, "0x216d87c45867a0907c466ae137fb755ca43478de248411774076f3e599b2d4e4"),
    (1000, "0x0000014f6db585b8219880a79db41ff1d6e7b5383384aaa6e7858e4cde5d3c79"),
    (4000, "0x745a7fb30b5a8985e9ec7bd4a0b88d9cf6b121da6352ad55bb85c8f58cf61d09"),
    (7000, "0x198e4728f0ccd853ffbfbd7a7797a1c903320cf13f6c2385b126edd0336b13c7"),
    (10000, "0xe54729c00d43073a0ac94ad39cdb1c607bc968227f2a9a24d69edbee391df903"),
    (13500, "0xb6790ef9f660b52a823e82453b73f88fcc173d1c436a99a0900bedf8707d36af"),
    (17800, "0xed80e004469de6a9b74188523efa235172221d6960dacae5ec53c51aa97670aa"),
    (23000, "0x4ba7460a703f04c68dc9d3bf17f198d2ae594a7be73f01bde16e44d96361cb51"),
    (27600, "0x0675d936ad73138d9f2b7d726ac8f7ff3d18f34df76a7a74d8295df987d23228"),
    (31000, "0x77288ae6589398cc744ec91ef2f0f6531906cbfe8cdaa16de49d8ea22f7bce8d"),
    (36000, "0x0927f0f9687dc7f3b8620d2dd2f9124c994186447d32075ab10c9b49314dfcda"),
    (38500, "0xfedfad0393323abf54602011fe93c6a689441643ac46be94ce8ef99dbe808f07"),
    (40764, "0x7d119509ac1b2e827104365d532f386b1605b4412a497a3adc8e5cd39ca60386"),
];

pub(crate) const CHECKPOINT_DATA: CheckpointData = CheckpointData {
    last_checkpoint_time: GENESIS_TIME as i64,
    transactions_before_last_checkpoint: 0,
    estimated_transactions_per_day: 2000,
};

pub fn constants() -> NetworkConstants {
    NetworkConstants {
        id: NetworkId::Main,
        magic: [0xd4, 0x9e, 0xd3, 0xad],
        alert_pubkey: "041e2029aed291046d4c7716c1f0698f9396aa7cd9a95ae1e6a463b8a36b6be7ee5b5471857edb0bbadd98c652f724988a83ab6791c15481b9757eb3e732c31ed6",
        default_port: 30229,
        pow_limit: U256::MAX >> 1u32,
        subsidy_halving_interval: 1_050_000,
        max_reorg_depth: 100,
        majority: MajorityThresholds {
            enforce_block_upgrade: 750,
            reject_block_outdated: 950,
            to_check_block_upgrade: 1000,
        },
        miner_threads: 0,
        target_timespan: 2 * 60,
        target_spacing: 60,
        last_pow_block: 1000,
        coinbase_maturity: 50,
        masternode_count_drift: 20,
        modifier_update_block: 1,
        max_money: 50_000_000 * COIN,
        genesis: GenesisSpec {
            timestamp_message:
                "First Time MNPRO is White,merry christmas 25 Desc 2018 and Happy New Year",
            reward_pubkey: "048bdbd33c6be2ddec0e3a235999ef3224b026fda49a06a74d8d36915b486bd9ebb8e8d88796bf11576c20bc265cd84fd7db794219808260de5ea08972ad714237",
            reward: 0,
            version: 1,
            time: GENESIS_TIME,
            bits: 0x1e0f_fff0,
            nonce: 505_475,
            header_hash: sha256d_header_hash,
        },
        expected_genesis_hash: "0xfa19236e5ccaf0161b53388a3ca5c3cbdaabc1d788263ed79fd5c3e5479d41a9",
        expected_merkle_root: "0x59478efc3b9e769017a94de77b28d390f43d29f46b6f9e946f7f1ec74967cf6c",
        dns_seeds: DNS_SEEDS,
        fixed_seeds: MAIN_SEED_TABLE,
        prefixes: AddressPrefixes {
            pubkey_address: &[50],
            script_address: &[110],
            secret_key: &[105],
            ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
            ext_coin_type: &[0x80, 0x00, 0x00, 0xde],
        },
        flags: PolicyFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        pool_max_transactions: 2,
        spork_pubkey: "04a56dbe05bed50b5d1ec673b4b308581984f702e3d0ddb78d681f6f5e33d48eee1c8e069948d19fde1e553ba7db88e38ce31e39d8d7a54b85ad61c8512f40abc3",
        pool_dummy_address: "MAKzgFX8EZt3fwzkPv55Q3sZJauPNdR8DQ",
        // 24 hours after genesis
        start_masternode_payments: GENESIS_TIME as i64 + 86_400,
        budget_fee_confirmations: 6,
        checkpoints: CHECKPOINTS,
        checkpoint_data: CHECKPOINT_DATA,
    }
}
