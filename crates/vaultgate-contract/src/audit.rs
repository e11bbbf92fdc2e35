//! Public verification of vault contents.

use vaultgate_core::{Address, Leaf, Message, Root};
use vaultgate_map::Witness;

use crate::verify::prove_leaf;

/// Whether `message` is the value committed for `address` under
/// `message_root`.
///
/// Reads nothing but its arguments. A failed proof is a `false` answer,
/// not an error.
pub fn check(message_root: &Root, witness: &Witness, address: &Address, message: &Message) -> bool {
    prove_leaf(witness, &address.key(), &Leaf::from(message), message_root).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_map::SparseMap;

    #[test]
    fn test_check_committed_message() {
        let mut vault = SparseMap::new();
        let address = Address([5u8; 32]);
        let message = Message::from_u128(42);
        let root = vault.insert(address.key(), Leaf::from(&message));
        let witness = vault.witness(&address.key());

        assert!(check(&root, &witness, &address, &message));
        assert!(!check(&root, &witness, &address, &Message::from_u128(43)));
        assert!(!check(&root, &witness, &Address([6u8; 32]), &message));
    }

    #[test]
    fn test_check_empty_for_non_depositor() {
        let vault = SparseMap::new();
        let address = Address([5u8; 32]);
        let witness = vault.witness(&address.key());
        assert!(check(&vault.root(), &witness, &address, &Message::default()));
        assert!(!check(&vault.root(), &witness, &address, &Message::from_u128(1)));
    }
}
