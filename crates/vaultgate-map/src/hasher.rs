//! Node hashing for the sparse commitment map.

use sha2::{Digest, Sha256};
use vaultgate_core::Leaf;

use crate::precomputed::{H256, HASH_SIZE};

/// Hash a leaf value into its height-0 node.
pub fn leaf_hash(value: &Leaf) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

/// Combine two children at `level` into their parent.
///
/// The level is part of the preimage, so equal subtrees at different
/// heights never hash to the same parent.
pub fn combine(level: u8, left: &H256, right: &H256) -> H256 {
    let mut data = Vec::with_capacity(1 + HASH_SIZE + HASH_SIZE);

    data.push(level);
    data.extend_from_slice(left);
    data.extend_from_slice(right);

    let mut hasher = Sha256::new();
    hasher.update(&data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precomputed::{EMPTY_NODES, TREE_DEPTH};

    #[test]
    fn test_precomputed_empty_nodes() {
        let mut node = leaf_hash(&Leaf::EMPTY);
        assert_eq!(node, EMPTY_NODES[0]);

        for level in 0..TREE_DEPTH {
            node = combine(level as u8, &node, &node);
            assert_eq!(node, EMPTY_NODES[level + 1], "empty node mismatch at height {}", level + 1);
        }
    }

    #[test]
    fn test_combine_order_matters() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        assert_ne!(combine(0, &left, &right), combine(0, &right, &left));
    }

    #[test]
    fn test_combine_level_matters() {
        let node = [3u8; 32];
        assert_ne!(combine(0, &node, &node), combine(1, &node, &node));
    }

    #[test]
    fn test_leaf_hash_distinguishes_values() {
        assert_ne!(leaf_hash(&Leaf::EMPTY), leaf_hash(&Leaf::PRESENT));
    }
}
