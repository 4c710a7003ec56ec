//! # Core Domain Entities
//!
//! The UTXO block and transaction model used to assemble and identify
//! genesis blocks.
//!
//! ## Clusters
//!
//! - **Transactions**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`
//! - **Blocks**: `BlockHeader`, `Block`

use serde::{Deserialize, Serialize};

use crate::encoding::{write_compact_size, write_var_bytes, Encodable};
use crate::hash::Hash256;
use crate::hashing::{hash256, merkle_root};
use crate::script::Script;
use primitive_types::U256;

/// Monetary amount in base units.
pub type Amount = i64;

/// Base units per coin.
pub const COIN: Amount = 100_000_000;

/// Serialized size of a block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

// =============================================================================
// CLUSTER A: TRANSACTIONS
// =============================================================================

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.txid.as_bytes());
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl Encodable for TxIn {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.previous_output.encode_to(out);
        write_var_bytes(out, self.script_sig.as_bytes());
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

impl Encodable for TxOut {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        write_var_bytes(out, self.script_pubkey.as_bytes());
    }
}

/// A transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Double SHA-256 of the serialized transaction.
    pub fn txid(&self) -> Hash256 {
        hash256(&self.encode())
    }

    /// A coinbase has exactly one input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(out, self.inputs.len() as u64);
        for input in &self.inputs {
            input.encode_to(out);
        }
        write_compact_size(out, self.outputs.len() as u64);
        for output in &self.outputs {
            output.encode_to(out);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

// =============================================================================
// CLUSTER B: BLOCKS
// =============================================================================

/// The 80-byte block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    /// Unix timestamp in seconds.
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Block identity: double SHA-256 of the 80 serialized header bytes.
    pub fn hash(&self) -> Hash256 {
        hash256(&self.encode())
    }

    /// Decode `bits` into the full 256-bit target.
    ///
    /// Returns `None` for negative or overflowing encodings.
    pub fn target(&self) -> Option<U256> {
        decode_compact(self.bits)
    }
}

impl Encodable for BlockHeader {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.reserve(BLOCK_HEADER_SIZE);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_block_hash.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

/// A block: header plus ordered transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root over the transaction ids, independent of the header field.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }
}

impl Encodable for Block {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.header.encode_to(out);
        write_compact_size(out, self.transactions.len() as u64);
        for tx in &self.transactions {
            tx.encode_to(out);
        }
    }
}

/// Decode a compact target (`nBits`) into a 256-bit integer.
pub fn decode_compact(bits: u32) -> Option<U256> {
    let exponent = bits >> 24;
    let mantissa = bits & 0x007f_ffff;

    if mantissa == 0 {
        return Some(U256::zero());
    }
    if bits & 0x0080_0000 != 0 {
        return None;
    }
    if exponent > 34 || (mantissa > 0xff && exponent > 33) || (mantissa > 0xffff && exponent > 32)
    {
        return None;
    }

    let value = if exponent <= 3 {
        U256::from(mantissa >> (8 * (3 - exponent)))
    } else {
        U256::from(mantissa) << (8 * (exponent - 3))
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ScriptBuilder, OP_CHECKSIG};

    const TIMESTAMP: &str =
        "First Time MNPRO is White,merry christmas 25 Desc 2018 and Happy New Year";
    const PUBKEY: &str = "048bdbd33c6be2ddec0e3a235999ef3224b026fda49a06a74d8d36915b486bd9ebb8e8d88796bf11576c20bc265cd84fd7db794219808260de5ea08972ad714237";

    fn coinbase() -> Transaction {
        let script_sig = ScriptBuilder::new()
            .push_num(486_604_799)
            .push_num(4)
            .push_slice(TIMESTAMP.as_bytes())
            .into_script();
        let script_pubkey = ScriptBuilder::new()
            .push_slice(&hex::decode(PUBKEY).unwrap())
            .push_opcode(OP_CHECKSIG)
            .into_script();
        Transaction {
            version: 1,
            inputs: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: 0,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn test_coinbase_serialization() {
        let tx = coinbase();
        assert!(tx.is_coinbase());
        assert_eq!(tx.inputs[0].script_sig.len(), 81);
        assert_eq!(tx.outputs[0].script_pubkey.len(), 67);
        assert_eq!(tx.encode().len(), 208);
        assert_eq!(
            tx.txid().to_hex(),
            "59478efc3b9e769017a94de77b28d390f43d29f46b6f9e946f7f1ec74967cf6c"
        );
    }

    #[test]
    fn test_block_merkle_root_of_single_tx_is_txid() {
        let tx = coinbase();
        let txid = tx.txid();
        let block = Block {
            header: BlockHeader {
                version: 1,
                prev_block_hash: Hash256::ZERO,
                merkle_root: txid,
                time: 1_546_300_800,
                bits: 0x1e0f_fff0,
                nonce: 505_475,
            },
            transactions: vec![tx],
        };
        assert_eq!(block.compute_merkle_root(), txid);
        assert_eq!(block.header.encode().len(), BLOCK_HEADER_SIZE);
        assert_eq!(block.hash(), block.header.hash());
    }

    #[test]
    fn test_non_coinbase_detection() {
        let mut tx = coinbase();
        tx.inputs[0].previous_output.vout = 0;
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_decode_compact() {
        let expected = U256::from(0xffffu64) << 208u32;
        assert_eq!(decode_compact(0x1d00_ffff), Some(expected));
        assert_eq!(decode_compact(0x207f_ffff), Some(U256::from(0x7f_ffffu64) << 232u32));
        assert_eq!(decode_compact(0x0100_3456), Some(U256::zero()));
        assert_eq!(decode_compact(0x0000_0000), Some(U256::zero()));
        assert_eq!(decode_compact(0x0480_0001), None);
        assert_eq!(decode_compact(0xff12_3456), None);
    }
}
