//! Off-chain replica of a sparse commitment map.
//!
//! Verifiers keep only roots. Clients keep a full replica to produce
//! witnesses against the root they last observed. Only non-empty nodes are
//! stored; every missing node is the precomputed empty node for its height.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use vaultgate_core::{Hash256, Key, Leaf, Root};

use crate::hasher::{combine, leaf_hash};
use crate::precomputed::{EMPTY_NODES, H256, TREE_DEPTH};
use crate::witness::Witness;

/// Root of the map with every key unset.
pub fn empty_root() -> Root {
    Hash256(EMPTY_NODES[TREE_DEPTH])
}

/// Position of a node: its height and the key bits above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId {
    height: u16,
    prefix: Key,
}

impl NodeId {
    /// The node at `height` on the path of `key`.
    fn on_path(key: &Key, height: usize) -> Self {
        Self {
            height: height as u16,
            prefix: key.clear_low_bits(height),
        }
    }

    fn root() -> Self {
        Self::on_path(&Hash256::zero(), TREE_DEPTH)
    }

    /// The other child of this node's parent. Not defined for the root.
    fn sibling(&self) -> Self {
        let height = self.height as usize;
        Self {
            height: self.height,
            prefix: self.prefix.with_bit(height, !self.prefix.bit(height)),
        }
    }
}

/// Sparse Merkle map from [`Key`] to [`Leaf`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "MapSnapshot", into = "MapSnapshot")]
pub struct SparseMap {
    leaves: BTreeMap<Key, Leaf>,
    nodes: HashMap<NodeId, H256>,
}

/// Serialized form of a [`SparseMap`]: its leaves only.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapSnapshot {
    leaves: BTreeMap<Key, Leaf>,
}

impl SparseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a set of entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Leaf)>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }

    /// The current root.
    pub fn root(&self) -> Root {
        Hash256(self.node(&NodeId::root()))
    }

    /// The value at `key`, [`Leaf::EMPTY`] when unset.
    pub fn get(&self, key: &Key) -> Leaf {
        self.leaves.get(key).copied().unwrap_or(Leaf::EMPTY)
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.leaves.contains_key(key)
    }

    /// Number of keys holding a non-empty value.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Iterate over the non-empty entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Leaf)> {
        self.leaves.iter()
    }

    /// Set `key` to `value` and return the new root.
    ///
    /// Setting [`Leaf::EMPTY`] removes the entry.
    pub fn insert(&mut self, key: Key, value: Leaf) -> Root {
        if value.is_empty() {
            self.leaves.remove(&key);
        } else {
            self.leaves.insert(key, value);
        }

        let mut node = leaf_hash(&value);
        for height in 0..TREE_DEPTH {
            let id = NodeId::on_path(&key, height);
            self.put(id, node);

            let sibling = self.node(&id.sibling());
            node = if key.bit(height) {
                combine(height as u8, &sibling, &node)
            } else {
                combine(height as u8, &node, &sibling)
            };
        }
        self.put(NodeId::root(), node);

        Hash256(node)
    }

    /// Authentication path for `key` against the current root.
    pub fn witness(&self, key: &Key) -> Witness {
        let siblings = (0..TREE_DEPTH)
            .map(|height| Hash256(self.node(&NodeId::on_path(key, height).sibling())))
            .collect();

        Witness::from_path(*key, siblings)
    }

    fn node(&self, id: &NodeId) -> H256 {
        self.nodes
            .get(id)
            .copied()
            .unwrap_or(EMPTY_NODES[id.height as usize])
    }

    fn put(&mut self, id: NodeId, node: H256) {
        if node == EMPTY_NODES[id.height as usize] {
            self.nodes.remove(&id);
        } else {
            self.nodes.insert(id, node);
        }
    }
}

impl From<MapSnapshot> for SparseMap {
    fn from(snapshot: MapSnapshot) -> Self {
        Self::from_entries(snapshot.leaves)
    }
}

impl From<SparseMap> for MapSnapshot {
    fn from(map: SparseMap) -> Self {
        Self { leaves: map.leaves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_key(rng: &mut impl Rng) -> Key {
        Hash256(rng.random())
    }

    #[test]
    fn test_empty_map() {
        let map = SparseMap::new();
        assert_eq!(map.root(), empty_root());
        assert!(map.is_empty());
        assert_eq!(map.get(&Hash256::zero()), Leaf::EMPTY);
    }

    #[test]
    fn test_insert_changes_root() {
        let mut map = SparseMap::new();
        let root = map.insert(Hash256::sha256(b"a"), Leaf::PRESENT);
        assert_ne!(root, empty_root());
        assert_eq!(root, map.root());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_empty_restores_root() {
        let mut map = SparseMap::new();
        let key = Hash256::sha256(b"a");
        map.insert(key, Leaf::PRESENT);
        map.insert(key, Leaf::EMPTY);

        assert_eq!(map.root(), empty_root());
        assert!(map.is_empty());
        assert!(map.nodes.is_empty());
    }

    #[test]
    fn test_witness_matches_root_for_every_key() {
        let mut rng = rand::rng();
        let mut map = SparseMap::new();
        let keys: Vec<Key> = (0..32).map(|_| random_key(&mut rng)).collect();
        for (i, key) in keys.iter().enumerate() {
            map.insert(*key, Leaf::from(vaultgate_core::Message::from_u128(i as u128 + 1)));
        }

        for key in &keys {
            let (root, derived) = map.witness(key).compute_root_and_key(&map.get(key));
            assert_eq!(root, map.root());
            assert_eq!(derived, *key);
        }
    }

    #[test]
    fn test_non_membership_witness() {
        let mut map = SparseMap::new();
        map.insert(Hash256::sha256(b"a"), Leaf::PRESENT);

        let absent = Hash256::sha256(b"b");
        let witness = map.witness(&absent);
        assert_eq!(witness.compute_root_and_key(&Leaf::EMPTY).0, map.root());
        assert_ne!(witness.compute_root_and_key(&Leaf::PRESENT).0, map.root());
    }

    #[test]
    fn test_witness_predicts_next_root() {
        let mut map = SparseMap::new();
        map.insert(Hash256::sha256(b"a"), Leaf::PRESENT);

        let key = Hash256::sha256(b"b");
        let witness = map.witness(&key);
        let (predicted, _) = witness.compute_root_and_key(&Leaf::PRESENT);

        assert_eq!(map.insert(key, Leaf::PRESENT), predicted);
    }

    #[test]
    fn test_adjacent_keys() {
        // Keys differing only in the lowest bit share every node but the leaf pair.
        let mut map = SparseMap::new();
        let left = Hash256::zero();
        let right = Hash256::zero().with_bit(0, true);
        map.insert(left, Leaf::PRESENT);
        map.insert(right, Leaf::PRESENT);

        for key in [left, right] {
            let witness = map.witness(&key);
            assert_eq!(witness.siblings()[0].0, leaf_hash(&Leaf::PRESENT));
            assert_eq!(witness.compute_root_and_key(&Leaf::PRESENT).0, map.root());
        }
    }

    #[test]
    fn test_root_independent_of_insertion_order() {
        let mut rng = rand::rng();
        let entries: Vec<(Key, Leaf)> = (0..16).map(|_| (random_key(&mut rng), Leaf::PRESENT)).collect();

        let forward = SparseMap::from_entries(entries.clone());
        let backward = SparseMap::from_entries(entries.into_iter().rev());
        assert_eq!(forward.root(), backward.root());
    }

    #[test]
    fn test_json_roundtrip_rebuilds_nodes() {
        let mut map = SparseMap::new();
        map.insert(Hash256::sha256(b"a"), Leaf::PRESENT);
        map.insert(Hash256::sha256(b"b"), Leaf::PRESENT);

        let json = serde_json::to_string(&map).unwrap();
        let recovered: SparseMap = serde_json::from_str(&json).unwrap();

        assert_eq!(recovered.root(), map.root());
        assert_eq!(recovered.len(), 2);
    }
}
