//! Witnesses for the sparse commitment map.
//!
//! A witness is the authentication path of one key: one sibling hash per
//! level, ordered from the leaf up, plus the direction bits of the path.
//! The direction bits are the key itself (bit `l` set means the path node
//! at height `l` is a right child), so a witness always implies exactly one
//! key.
//!
//! Given a claimed leaf value, [`compute_root_and_key`] folds the path into
//! the root the map would have if that key held that value. It is pure and
//! needs nothing but the hash function, so a verifier holding a root can
//! authenticate a claimed old value and derive the new root from the same
//! witness.

use serde::{Deserialize, Serialize};
use vaultgate_core::{Hash256, Key, Leaf, Root};

use crate::error::{MapError, Result};
use crate::hasher::{combine, leaf_hash};
use crate::precomputed::TREE_DEPTH;

/// Domain tag for witness digests.
pub const WITNESS_DOMAIN: &[u8] = b"vaultgate/witness/v1";

/// Authentication path for a single key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WitnessParts", into = "WitnessParts")]
pub struct Witness {
    path: Key,
    siblings: Vec<Hash256>,
}

/// Unvalidated wire form of a [`Witness`].
#[derive(Clone, Serialize, Deserialize)]
struct WitnessParts {
    path: Key,
    siblings: Vec<Hash256>,
}

impl Witness {
    /// Build a witness from its parts.
    ///
    /// Fails unless there is exactly one sibling per level.
    pub fn new(path: Key, siblings: Vec<Hash256>) -> Result<Self> {
        if siblings.len() != TREE_DEPTH {
            return Err(MapError::InvalidWitnessLength {
                expected: TREE_DEPTH,
                actual: siblings.len(),
            });
        }
        Ok(Self { path, siblings })
    }

    /// Build a witness whose sibling count is known to match the depth.
    pub(crate) fn from_path(path: Key, siblings: Vec<Hash256>) -> Self {
        debug_assert_eq!(siblings.len(), TREE_DEPTH);
        Self { path, siblings }
    }

    /// The key this witness authenticates.
    pub fn key(&self) -> Key {
        self.path
    }

    /// Sibling hashes, leaf level first.
    pub fn siblings(&self) -> &[Hash256] {
        &self.siblings
    }

    pub fn compute_root_and_key(&self, value: &Leaf) -> (Root, Key) {
        compute_root_and_key(self, value)
    }

    /// Commitment to the whole path, used to bind a witness into a signed payload.
    pub fn digest(&self) -> Hash256 {
        let mut data = Vec::with_capacity((TREE_DEPTH + 1) * 32);
        data.extend_from_slice(self.path.as_bytes());
        for sibling in &self.siblings {
            data.extend_from_slice(sibling.as_bytes());
        }
        Hash256::sha256_with_domain(WITNESS_DOMAIN, &data)
    }

    /// Serialize to bytes using bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| MapError::SerializationError(e.to_string()))
    }

    /// Deserialize from bytes using bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| MapError::DeserializationError(e.to_string()))
    }
}

impl TryFrom<WitnessParts> for Witness {
    type Error = MapError;

    fn try_from(parts: WitnessParts) -> Result<Self> {
        Self::new(parts.path, parts.siblings)
    }
}

impl From<Witness> for WitnessParts {
    fn from(witness: Witness) -> Self {
        Self {
            path: witness.path,
            siblings: witness.siblings,
        }
    }
}

impl std::fmt::Debug for Witness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Witness")
            .field("key", &self.path)
            .field("siblings", &self.siblings.len())
            .finish()
    }
}

/// Fold `witness` with `value` at its leaf into a root, and return the key
/// the path leads to.
///
/// Evaluating one witness against two values always yields the same key;
/// only the root depends on the value.
pub fn compute_root_and_key(witness: &Witness, value: &Leaf) -> (Root, Key) {
    let key = witness.path;
    let node = witness
        .siblings
        .iter()
        .enumerate()
        .fold(leaf_hash(value), |node, (level, sibling)| {
            if key.bit(level) {
                combine(level as u8, &sibling.0, &node)
            } else {
                combine(level as u8, &node, &sibling.0)
            }
        });

    (Hash256(node), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{empty_root, SparseMap};
    use crate::precomputed::EMPTY_NODES;

    fn empty_witness(key: Key) -> Witness {
        let siblings = EMPTY_NODES[..TREE_DEPTH].iter().map(|n| Hash256(*n)).collect();
        Witness::new(key, siblings).unwrap()
    }

    #[test]
    fn test_empty_witness_yields_empty_root() {
        let key = Hash256::sha256(b"key");
        let (root, derived_key) = empty_witness(key).compute_root_and_key(&Leaf::EMPTY);
        assert_eq!(root, empty_root());
        assert_eq!(derived_key, key);
    }

    #[test]
    fn test_key_independent_of_value() {
        let key = Hash256::sha256(b"key");
        let witness = empty_witness(key);
        let (root_empty, key_empty) = witness.compute_root_and_key(&Leaf::EMPTY);
        let (root_present, key_present) = witness.compute_root_and_key(&Leaf::PRESENT);

        assert_eq!(key_empty, key_present);
        assert_ne!(root_empty, root_present);
    }

    #[test]
    fn test_witness_rejects_wrong_length() {
        let result = Witness::new(Hash256::zero(), vec![Hash256::zero(); 10]);
        assert_eq!(
            result,
            Err(MapError::InvalidWitnessLength {
                expected: TREE_DEPTH,
                actual: 10
            })
        );
    }

    #[test]
    fn test_witness_from_other_key_gives_other_root() {
        let mut map = SparseMap::new();
        let key_a = Hash256::sha256(b"a");
        let key_b = Hash256::sha256(b"b");
        map.insert(key_a, Leaf::PRESENT);

        let witness_b = map.witness(&key_b);
        let (root, key) = witness_b.compute_root_and_key(&Leaf::PRESENT);
        assert_eq!(key, key_b);
        assert_ne!(root, map.root());
    }

    #[test]
    fn test_tampered_sibling_changes_root() {
        let mut map = SparseMap::new();
        let key = Hash256::sha256(b"a");
        map.insert(key, Leaf::PRESENT);

        let witness = map.witness(&key);
        let mut siblings = witness.siblings().to_vec();
        siblings[200] = Hash256([9u8; 32]);
        let forged = Witness::new(key, siblings).unwrap();

        assert_eq!(witness.compute_root_and_key(&Leaf::PRESENT).0, map.root());
        assert_ne!(forged.compute_root_and_key(&Leaf::PRESENT).0, map.root());
    }

    #[test]
    fn test_witness_bincode_roundtrip() {
        let witness = empty_witness(Hash256::sha256(b"key"));
        let bytes = witness.to_bytes().unwrap();
        assert_eq!(Witness::from_bytes(&bytes).unwrap(), witness);
    }

    #[test]
    fn test_witness_json_rejects_short_path() {
        let json = format!(
            "{{\"path\":\"{}\",\"siblings\":[\"{}\"]}}",
            Hash256::zero().to_hex(),
            Hash256::zero().to_hex()
        );
        assert!(serde_json::from_str::<Witness>(&json).is_err());
    }

    #[test]
    fn test_digest_binds_siblings() {
        let key = Hash256::sha256(b"key");
        let witness = empty_witness(key);
        let mut siblings = witness.siblings().to_vec();
        siblings[0] = Hash256([1u8; 32]);
        let other = Witness::new(key, siblings).unwrap();
        assert_ne!(witness.digest(), other.digest());
    }
}
