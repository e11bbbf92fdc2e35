//! Vaultgate: verifiable, access-gated key-value commitments.
//!
//! This is the main entry point for user applications. It re-exports the
//! core types, the sparse commitment map and the deposit contract.

pub use vaultgate_contract as contract;
pub use vaultgate_core as core;
pub use vaultgate_map as map;

pub use vaultgate_contract::{Ledger, SecureDeposit};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        message::FlagLayout, Address, Flag, FlagRule, Hash256, Key, Leaf, Message, Root,
    };

    pub use crate::map::{empty_root, SparseMap, Witness};

    pub use crate::contract::{
        address_of, auth::contract_id, AddressCommitment, Authorization, ContractConfig,
        ContractError, ContractEvent, ContractState, Ledger, MessageCommitment, Operation,
        Receipt, SecureDeposit, SigningKey, Subscriber, Transaction,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_store_deposit_check() {
        let admin = SigningKey::from_bytes(&[1u8; 32]);
        let alice = SigningKey::from_bytes(&[2u8; 32]);
        let config = ContractConfig::default();
        let id = contract_id(&address_of(&admin), &config);

        let init = Authorization::sign(&admin, &id, &Operation::Init { config: &config });
        let mut contract = SecureDeposit::init(&init, config).unwrap();
        let mut allowlist = SparseMap::new();
        let mut vault = SparseMap::new();
        let address = address_of(&alice);

        let witness = allowlist.witness(&address.key());
        let auth = Authorization::sign(
            &admin,
            &id,
            &Operation::Store {
                witness: &witness,
                address: &address,
            },
        );
        contract.store(&auth, &witness, &address).unwrap();
        allowlist.insert(address.key(), Leaf::PRESENT);

        let message = Message::from_flags(FlagLayout::default(), &[Flag::F2, Flag::F3]);
        let address_witness = allowlist.witness(&address.key());
        let message_witness = vault.witness(&address.key());
        let auth = Authorization::sign(
            &alice,
            &id,
            &Operation::Deposit {
                address_witness: &address_witness,
                message_witness: &message_witness,
                message: &message,
            },
        );
        contract
            .deposit(&auth, &address_witness, &message_witness, &message)
            .unwrap();
        vault.insert(address.key(), Leaf::from(&message));

        assert_eq!(vault.root(), contract.state().message_root());
        assert!(contract.check(&vault.witness(&address.key()), &address, &message));
    }
}
