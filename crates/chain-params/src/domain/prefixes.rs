//! Base58 address version prefixes.

use serde::Serialize;

/// The kinds of Base58-encoded data that carry a version prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    /// BIP44 coin type, hardened.
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

/// Version prefix bytes for every [`Base58Type`] of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressPrefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
    pub ext_coin_type: &'static [u8],
}

impl AddressPrefixes {
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
            Base58Type::ExtCoinType => self.ext_coin_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_maps_each_kind_to_its_field() {
        let prefixes = AddressPrefixes {
            pubkey_address: &[1],
            script_address: &[2],
            secret_key: &[3],
            ext_public_key: &[4, 4],
            ext_secret_key: &[5, 5],
            ext_coin_type: &[6, 6],
        };
        let firsts: Vec<u8> = Base58Type::ALL
            .iter()
            .map(|kind| prefixes.get(*kind)[0])
            .collect();
        assert_eq!(firsts, vec![1, 2, 3, 4, 5, 6]);
    }
}
