//! # Script
//!
//! Only the subset of script construction needed to assemble coinbase
//! inputs and pay-to-pubkey outputs.

use serde::{Deserialize, Serialize};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Incremental script builder.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a small integer, using `OP_1NEGATE`/`OP_1..OP_16` where one exists.
    pub fn push_int(self, value: i64) -> Self {
        match value {
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (value as u8 - 1)),
            _ => self.push_num(value),
        }
    }

    /// Push an integer as a minimally encoded number data push.
    pub fn push_num(self, value: i64) -> Self {
        let encoded = encode_script_num(value);
        self.push_slice(&encoded)
    }

    /// Push arbitrary data with the shortest push opcode.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len == 0 {
            self.bytes.push(OP_0);
            return self;
        }
        if len < OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.bytes.push(opcode);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign; add a byte when it is already in use.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
