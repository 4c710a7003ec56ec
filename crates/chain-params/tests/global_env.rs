//! Selecting the process-wide network from environment variables.
//!
//! Environment variables are process-wide, so every case runs in one test.

use chain_params::config::{NETWORK_VAR, REGTEST_VAR, TESTNET_VAR};
use chain_params::{params, select_params_from_env, ConfigError, NetworkId};

fn clear() {
    for var in [NETWORK_VAR, TESTNET_VAR, REGTEST_VAR] {
        std::env::remove_var(var);
    }
}

#[test]
fn test_select_params_from_env_sequence() {
    clear();
    assert_eq!(select_params_from_env(), Ok(NetworkId::Main));
    assert_eq!(params().network_id(), NetworkId::Main);

    std::env::set_var(REGTEST_VAR, "1");
    assert_eq!(select_params_from_env(), Ok(NetworkId::Regtest));
    assert!(params().mine_blocks_on_demand());

    // A conflict leaves the previous selection in place
    std::env::set_var(TESTNET_VAR, "true");
    assert_eq!(
        select_params_from_env(),
        Err(ConfigError::ConflictingNetworkFlags)
    );
    assert_eq!(params().network_id(), NetworkId::Regtest);

    std::env::set_var(NETWORK_VAR, "testnet");
    assert_eq!(select_params_from_env(), Ok(NetworkId::Testnet));
    assert_eq!(params().default_port(), 64693);

    std::env::set_var(NETWORK_VAR, "signet");
    assert!(matches!(
        select_params_from_env(),
        Err(ConfigError::UnknownNetwork(_))
    ));
    assert_eq!(params().network_id(), NetworkId::Testnet);

    clear();
}
