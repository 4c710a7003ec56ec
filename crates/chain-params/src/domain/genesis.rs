//! Genesis Block Creation
//!
//! Builds the genesis block of a network from its coinbase message, reward
//! key and header fields, then checks the result against the hardcoded hash
//! and Merkle root. A mismatch means the constants were edited
//! inconsistently and the node must not start.

use shared_types::script::OP_CHECKSIG;
use shared_types::{
    Amount, Block, BlockHeader, Hash256, OutPoint, ScriptBuilder, Transaction, TxIn, TxOut,
};
use tracing::debug;

use super::error::GenesisError;

/// The first push of every genesis coinbase script: the compact target of
/// the original Bitcoin genesis, kept as an opaque marker.
pub const GENESIS_SCRIPT_BITS: i64 = 486_604_799;

/// Second push of the genesis coinbase script.
pub const GENESIS_SCRIPT_EXTRA_NONCE: i64 = 4;

/// Identity hash of a block header.
pub type HeaderHashFn = fn(&BlockHeader) -> Hash256;

/// Double SHA-256 over the 80-byte header.
pub fn sha256d_header_hash(header: &BlockHeader) -> Hash256 {
    header.hash()
}

/// Inputs to the genesis block of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisSpec {
    pub timestamp_message: &'static str,
    /// Uncompressed public key paid by the coinbase, as hex.
    pub reward_pubkey: &'static str,
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Hash the genesis header is identified by and checked against.
    pub header_hash: HeaderHashFn,
}

/// A genesis block whose hash and Merkle root matched expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedGenesis {
    pub block: Block,
    pub hash: Hash256,
}

/// Assemble the coinbase transaction of the genesis block.
pub fn build_coinbase(spec: &GenesisSpec) -> Result<Transaction, GenesisError> {
    let reward_key = hex::decode(spec.reward_pubkey)?;

    let script_sig = ScriptBuilder::new()
        .push_num(GENESIS_SCRIPT_BITS)
        .push_num(GENESIS_SCRIPT_EXTRA_NONCE)
        .push_slice(spec.timestamp_message.as_bytes())
        .into_script();
    let script_pubkey = ScriptBuilder::new()
        .push_slice(&reward_key)
        .push_opcode(OP_CHECKSIG)
        .into_script();

    Ok(Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: spec.reward,
            script_pubkey,
        }],
        lock_time: 0,
    })
}

/// Build the genesis block without verifying it.
pub fn build_genesis_block(spec: &GenesisSpec) -> Result<Block, GenesisError> {
    let coinbase = build_coinbase(spec)?;

    let header = BlockHeader {
        version: spec.version,
        prev_block_hash: Hash256::ZERO,
        merkle_root: coinbase.txid(),
        time: spec.time,
        bits: spec.bits,
        nonce: spec.nonce,
    };

    Ok(Block {
        header,
        transactions: vec![coinbase],
    })
}

/// Build the genesis block and require its hash and Merkle root to equal
/// the expected values.
pub fn verify_genesis(
    spec: &GenesisSpec,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<VerifiedGenesis, GenesisError> {
    let block = build_genesis_block(spec)?;

    let merkle_root = block.compute_merkle_root();
    if merkle_root != *expected_merkle_root {
        return Err(GenesisError::MerkleRootMismatch {
            expected: *expected_merkle_root,
            computed: merkle_root,
        });
    }

    let hash = (spec.header_hash)(&block.header);
    if hash != *expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: *expected_hash,
            computed: hash,
        });
    }

    debug!("[chainparams] genesis {} verified (time={})", hash, spec.time);
    Ok(VerifiedGenesis { block, hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Encodable;

    const SPEC: GenesisSpec = GenesisSpec {
        timestamp_message:
            "First Time MNPRO is White,merry christmas 25 Desc 2018 and Happy New Year",
        reward_pubkey: "048bdbd33c6be2ddec0e3a235999ef3224b026fda49a06a74d8d36915b486bd9ebb8e8d88796bf11576c20bc265cd84fd7db794219808260de5ea08972ad714237",
        reward: 0,
        version: 1,
        time: 1_546_300_800,
        bits: 0x1e0f_fff0,
        nonce: 505_475,
        header_hash: sha256d_header_hash,
    };

    const MERKLE: &str = "59478efc3b9e769017a94de77b28d390f43d29f46b6f9e946f7f1ec74967cf6c";
    const HASH: &str = "fa19236e5ccaf0161b53388a3ca5c3cbdaabc1d788263ed79fd5c3e5479d41a9";

    fn hash(hex: &str) -> Hash256 {
        Hash256::from_hex(hex).unwrap()
    }

    #[test]
    fn test_coinbase_script_sig_layout() {
        let coinbase = build_coinbase(&SPEC).unwrap();
        let script = coinbase.inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        assert_eq!(script[7] as usize, SPEC.timestamp_message.len());
        assert_eq!(coinbase.encode().len(), 208);
    }

    #[test]
    fn test_genesis_header_links_to_nothing() {
        let block = build_genesis_block(&SPEC).unwrap();
        assert!(block.header.prev_block_hash.is_zero());
        assert_eq!(block.transactions.len(), 1);
        assert!(block.transactions[0].is_coinbase());
        assert_eq!(block.header.merkle_root, block.compute_merkle_root());
    }

    #[test]
    fn test_verify_accepts_matching_expectations() {
        let verified = verify_genesis(&SPEC, &hash(HASH), &hash(MERKLE)).unwrap();
        assert_eq!(verified.hash, hash(HASH));
        assert_eq!(verified.block.header.merkle_root, hash(MERKLE));
    }

    #[test]
    fn test_verify_rejects_wrong_nonce() {
        let spec = GenesisSpec { nonce: 1, ..SPEC };
        let result = verify_genesis(&spec, &hash(HASH), &hash(MERKLE));
        assert!(matches!(
            result,
            Err(GenesisError::HashMismatch { expected, .. }) if expected == hash(HASH)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_message() {
        let spec = GenesisSpec {
            timestamp_message: "edited",
            ..SPEC
        };
        let result = verify_genesis(&spec, &hash(HASH), &hash(MERKLE));
        assert!(matches!(result, Err(GenesisError::MerkleRootMismatch { .. })));
    }

    fn single_sha_header_hash(header: &BlockHeader) -> Hash256 {
        Hash256::from_bytes(shared_types::hashing::sha256(&header.encode()))
    }

    #[test]
    fn test_verify_uses_the_configured_header_hash() {
        let spec = GenesisSpec {
            header_hash: single_sha_header_hash,
            ..SPEC
        };
        let block = build_genesis_block(&spec).unwrap();
        let expected = single_sha_header_hash(&block.header);
        assert_ne!(expected, hash(HASH));

        let verified = verify_genesis(&spec, &expected, &hash(MERKLE)).unwrap();
        assert_eq!(verified.hash, expected);

        let result = verify_genesis(&spec, &hash(HASH), &hash(MERKLE));
        assert!(matches!(
            result,
            Err(GenesisError::HashMismatch { computed, .. }) if computed == expected
        ));
    }

    #[test]
    fn test_bad_reward_key_is_an_error() {
        let spec = GenesisSpec {
            reward_pubkey: "04zz",
            ..SPEC
        };
        assert!(matches!(
            build_genesis_block(&spec),
            Err(GenesisError::InvalidRewardKey(_))
        ));
    }
}
