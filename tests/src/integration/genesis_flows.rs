//! # Genesis Flows
//!
//! Checks the genesis blocks built by `chain-params` against the
//! `shared-types` block model: serialization, identity and coinbase layout.

#[cfg(test)]
mod tests {
    use chain_params::test_utils::{FixedRandomSource, FixedTimeSource};
    use chain_params::{networks, ChainParams, NetworkId};
    use shared_types::script::OP_CHECKSIG;
    use shared_types::{hashing, Encodable, BLOCK_HEADER_SIZE};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn build(id: NetworkId) -> ChainParams {
        ChainParams::build(
            &networks::constants(id),
            &FixedTimeSource(1_600_000_000),
            &FixedRandomSource::zero(),
        )
        .unwrap()
    }

    // =============================================================================
    // TESTS
    // =============================================================================

    #[test]
    fn test_genesis_hash_is_double_sha_of_header() {
        for id in NetworkId::ALL {
            let params = build(id);
            let header = params.genesis_block().header.encode();
            assert_eq!(header.len(), BLOCK_HEADER_SIZE);
            assert_eq!(&hashing::hash256(&header), params.genesis_hash());
        }
    }

    #[test]
    fn test_genesis_block_serialization() {
        let params = build(NetworkId::Main);
        let block = params.genesis_block().encode();
        // header + tx count + one 208-byte coinbase
        assert_eq!(block.len(), BLOCK_HEADER_SIZE + 1 + 208);
    }

    #[test]
    fn test_coinbase_pays_reward_key() {
        let params = build(NetworkId::Main);
        let coinbase = &params.genesis_block().transactions[0];
        let constants = networks::constants(NetworkId::Main);

        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.outputs.len(), 1);
        assert_eq!(coinbase.outputs[0].value, constants.genesis.reward);

        let script = coinbase.outputs[0].script_pubkey.as_bytes();
        assert_eq!(
            &script[1..66],
            hex::decode(constants.genesis.reward_pubkey).unwrap().as_slice()
        );
        assert_eq!(script[66], OP_CHECKSIG);
    }

    #[test]
    fn test_derived_networks_share_coinbase() {
        let main = build(NetworkId::Main);
        for id in [NetworkId::Testnet, NetworkId::Regtest, NetworkId::UnitTest] {
            let other = build(id);
            assert_eq!(
                other.genesis_block().transactions,
                main.genesis_block().transactions
            );
        }
    }
}
