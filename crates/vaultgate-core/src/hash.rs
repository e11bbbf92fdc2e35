//! Fixed-width hash values.
//!
//! Every commitment in the system (map keys, roots, inner nodes) is a
//! 256-bit SHA-256 digest. Bits are numbered from the least significant bit
//! of the big-endian integer encoding, so bit 0 lives in the last byte.

use sha2::{Digest, Sha256};

/// Size of a hash in bytes (SHA256).
pub const HASH_SIZE: usize = 32;

/// Number of addressable bits in a [`Hash256`].
pub const HASH_BITS: usize = HASH_SIZE * 8;

/// Implements hex parsing, display and serde for a 32-byte newtype.
macro_rules! impl_fixed_bytes {
    ($name:ident) => {
        impl $name {
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            pub fn from_slice(bytes: &[u8]) -> $crate::Result<Self> {
                let arr: [u8; 32] =
                    bytes
                        .try_into()
                        .map_err(|_| $crate::Error::InvalidLength {
                            expected: 32,
                            actual: bytes.len(),
                        })?;
                Ok(Self(arr))
            }

            /// Parse from a hex string, with or without a `0x` prefix.
            pub fn from_hex(hex_str: &str) -> $crate::Result<Self> {
                let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
                let bytes = hex::decode(hex_str)?;
                Self::from_slice(&bytes)
            }

            /// Lowercase hex, no `0x` prefix.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "0x{}", self.to_hex())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), self.to_hex())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_fixed_bytes;

/// A 256-bit hash (32 bytes)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash256(pub [u8; 32]);

impl_fixed_bytes!(Hash256);

/// Position of a leaf in a commitment map.
pub type Key = Hash256;

/// Commitment to the full contents of a map.
pub type Root = Hash256;

impl Hash256 {
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Compute SHA-256 hash of data
    pub fn sha256(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Compute SHA-256 with domain separation
    pub fn sha256_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Read bit `index` (0 = least significant).
    ///
    /// Panics if `index >= 256`.
    pub fn bit(&self, index: usize) -> bool {
        let (byte, mask) = bit_position(index);
        self.0[byte] & mask != 0
    }

    /// Return a copy with bit `index` set to `value`.
    pub fn with_bit(mut self, index: usize, value: bool) -> Self {
        let (byte, mask) = bit_position(index);
        if value {
            self.0[byte] |= mask;
        } else {
            self.0[byte] &= !mask;
        }
        self
    }

    /// Return a copy with the `count` least significant bits cleared.
    pub fn clear_low_bits(mut self, count: usize) -> Self {
        let count = count.min(HASH_BITS);
        let full_bytes = count / 8;
        for byte in self.0.iter_mut().rev().take(full_bytes) {
            *byte = 0;
        }
        let rem_bits = count % 8;
        if rem_bits != 0 {
            let rem_mask: u8 = !((1u8 << rem_bits) - 1);
            self.0[HASH_SIZE - 1 - full_bytes] &= rem_mask;
        }
        self
    }
}

fn bit_position(index: usize) -> (usize, u8) {
    assert!(index < HASH_BITS, "bit index {} out of range", index);
    (HASH_SIZE - 1 - index / 8, 1u8 << (index % 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_from_hex() {
        let hex = "abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890";
        let hash = Hash256::from_hex(hex).unwrap();
        assert_eq!(hash.to_hex(), hex);

        let prefixed = Hash256::from_hex(&format!("0x{}", hex)).unwrap();
        assert_eq!(prefixed, hash);
    }

    #[test]
    fn test_hash_from_hex_wrong_length() {
        let result = Hash256::from_hex("abcd");
        assert_eq!(
            result,
            Err(crate::Error::InvalidLength {
                expected: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn test_sha256_domain() {
        let hash1 = Hash256::sha256(b"test");
        let hash2 = Hash256::sha256_with_domain(b"domain", b"test");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_bit_numbering_is_lsb_first() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0b0000_0101;
        bytes[0] = 0b1000_0000;
        let hash = Hash256(bytes);

        assert!(hash.bit(0));
        assert!(!hash.bit(1));
        assert!(hash.bit(2));
        assert!(hash.bit(255));
        assert!(!hash.bit(254));
    }

    #[test]
    fn test_with_bit() {
        let hash = Hash256::zero().with_bit(9, true);
        assert_eq!(hash.0[30], 0b0000_0010);
        assert_eq!(hash.with_bit(9, false), Hash256::zero());
    }

    #[test]
    fn test_clear_low_bits() {
        let hash = Hash256([0xff; 32]);
        let cleared = hash.clear_low_bits(12);
        assert_eq!(cleared.0[31], 0);
        assert_eq!(cleared.0[30], 0xf0);
        assert_eq!(cleared.0[29], 0xff);

        assert_eq!(hash.clear_low_bits(256), Hash256::zero());
        assert_eq!(hash.clear_low_bits(0), hash);
    }

    #[test]
    fn test_hash_serialization() {
        let hash = Hash256::sha256(b"test");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
        let recovered: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, recovered);
    }
}
