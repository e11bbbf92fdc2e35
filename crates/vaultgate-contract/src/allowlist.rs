//! Allowlist admission.

use vaultgate_core::{Address, Leaf};
use vaultgate_map::Witness;

use crate::error::{ContractError, ProofFailure, Result};
use crate::state::{ContractState, Transition};
use crate::verify::prove_leaf;

/// Compute the transition that adds `address` to the allowlist.
///
/// `witness` must prove that `address` is absent under the live allowlist
/// root. The caller has already checked the admin's authorization.
pub fn admit(
    live: &ContractState,
    max_addresses: u32,
    witness: &Witness,
    address: &Address,
) -> Result<Transition> {
    if live.address_count() >= max_addresses {
        return Err(ContractError::Capacity { max: max_addresses });
    }

    let key = address.key();
    prove_leaf(witness, &key, &Leaf::EMPTY, &live.address_root()).map_err(|failure| {
        match failure {
            ProofFailure::KeyMismatch { expected, actual } => {
                ContractError::WitnessKeyMismatch { expected, actual }
            }
            root_mismatch => ContractError::StaleWitness(root_mismatch),
        }
    })?;

    let (address_root, _) = witness.compute_root_and_key(&Leaf::PRESENT);
    Ok(Transition::Admit { address_root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_map::SparseMap;

    fn setup() -> (ContractState, SparseMap) {
        (ContractState::new(Address([1u8; 32])), SparseMap::new())
    }

    #[test]
    fn test_admit_matches_replica() {
        let (live, mut replica) = setup();
        let address = Address([2u8; 32]);
        let witness = replica.witness(&address.key());

        let transition = admit(&live, 100, &witness, &address).unwrap();
        let expected = replica.insert(address.key(), Leaf::PRESENT);
        assert_eq!(transition, Transition::Admit { address_root: expected });
    }

    #[test]
    fn test_capacity_checked_first() {
        let (live, replica) = setup();
        let address = Address([2u8; 32]);
        // Wrong key as well, but capacity wins.
        let witness = replica.witness(&Address([3u8; 32]).key());
        assert_eq!(
            admit(&live, 0, &witness, &address),
            Err(ContractError::Capacity { max: 0 })
        );
    }

    #[test]
    fn test_witness_for_other_address() {
        let (live, replica) = setup();
        let address = Address([2u8; 32]);
        let witness = replica.witness(&Address([3u8; 32]).key());
        assert!(matches!(
            admit(&live, 100, &witness, &address),
            Err(ContractError::WitnessKeyMismatch { .. })
        ));
    }

    #[test]
    fn test_stale_root() {
        let (live, mut replica) = setup();
        let address = Address([2u8; 32]);
        replica.insert(Address([9u8; 32]).key(), Leaf::PRESENT);
        let witness = replica.witness(&address.key());
        assert!(matches!(
            admit(&live, 100, &witness, &address),
            Err(ContractError::StaleWitness(ProofFailure::RootMismatch { .. }))
        ));
    }
}
