//! Per-network constant sets.
//!
//! Testnet derives from main, regtest from testnet and unittest from main;
//! each module starts from its parent's constants and overrides fields.

pub mod main;
pub mod regtest;
pub mod seeds;
pub mod testnet;
pub mod unittest;

use crate::domain::{NetworkConstants, NetworkId};

/// Unverified constants for `id`.
pub fn constants(id: NetworkId) -> NetworkConstants {
    match id {
        NetworkId::Main => main::constants(),
        NetworkId::Testnet => testnet::constants(),
        NetworkId::Regtest => regtest::constants(),
        NetworkId::UnitTest => unittest::constants(),
    }
}
