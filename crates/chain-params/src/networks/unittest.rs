//! Unit test network: main constants on a private port, without seeds.
//!
//! The only network whose parameters may be adjusted after construction.

use super::main;
use crate::domain::{NetworkConstants, NetworkId, PolicyFlags};

pub fn constants() -> NetworkConstants {
    let parent = main::constants();
    NetworkConstants {
        id: NetworkId::UnitTest,
        default_port: 51478,
        dns_seeds: &[],
        fixed_seeds: &[],
        flags: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..parent.flags
        },
        // Shares the main checkpoints
        checkpoints: main::CHECKPOINTS,
        checkpoint_data: main::CHECKPOINT_DATA,
        ..parent
    }
}
