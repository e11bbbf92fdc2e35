//! Account addresses and the map keys derived from them.

use crate::hash::{impl_fixed_bytes, Hash256, Key};

/// Domain tag for address to key hashing.
pub const ADDRESS_DOMAIN: &[u8] = b"vaultgate/address/v1";

/// Canonical 32-byte encoding of an account (its ed25519 verifying key).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 32]);

impl_fixed_bytes!(Address);

impl Address {
    /// The map key for this address.
    ///
    /// The same key addresses the allowlist entry and the vault entry.
    pub fn key(&self) -> Key {
        Hash256::sha256_with_domain(ADDRESS_DOMAIN, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_deterministic() {
        let address = Address([7u8; 32]);
        assert_eq!(address.key(), address.key());
    }

    #[test]
    fn test_key_is_domain_separated() {
        let address = Address([7u8; 32]);
        assert_ne!(address.key(), Hash256::sha256(&address.0));
    }

    #[test]
    fn test_different_addresses_different_keys() {
        assert_ne!(Address([1u8; 32]).key(), Address([2u8; 32]).key());
    }

    #[test]
    fn test_address_json_roundtrip() {
        let address = Address([0xab; 32]);
        let json = serde_json::to_string(&address).unwrap();
        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, recovered);
    }
}
