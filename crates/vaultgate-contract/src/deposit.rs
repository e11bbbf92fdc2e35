//! Vault deposits.
//!
//! A deposit is accepted when the sender is on the allowlist, has no
//! message in the vault yet, and the message passes the flag policy.

use vaultgate_core::message::FlagLayout;
use vaultgate_core::{Address, Leaf, Message};
use vaultgate_map::Witness;

use crate::error::{ContractError, Result};
use crate::state::{ContractState, Transition};
use crate::verify::prove_leaf;

/// Check `message` against the flag policy.
///
/// Every rule is evaluated; the error lists all rules that failed.
pub fn check_policy(message: &Message, layout: FlagLayout) -> Result<()> {
    if message.is_empty() {
        return Err(ContractError::EmptyMessage);
    }
    let report = message.flags(layout).evaluate();
    if !report.is_satisfied() {
        return Err(ContractError::PolicyViolation {
            violated: report.violations(),
        });
    }
    Ok(())
}

/// Compute the transition that records `message` for `sender`.
///
/// The caller has already checked that `sender` authorized the deposit.
pub fn accept(
    live: &ContractState,
    layout: FlagLayout,
    sender: &Address,
    address_witness: &Witness,
    message_witness: &Witness,
    message: &Message,
) -> Result<Transition> {
    let key = sender.key();

    prove_leaf(address_witness, &key, &Leaf::PRESENT, &live.address_root())
        .map_err(ContractError::Ineligible)?;
    prove_leaf(message_witness, &key, &Leaf::EMPTY, &live.message_root())
        .map_err(ContractError::DuplicateDeposit)?;
    check_policy(message, layout)?;

    let (message_root, _) = message_witness.compute_root_and_key(&Leaf::from(message));
    Ok(Transition::Deposit { message_root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_core::{Flag, FlagRule};

    #[test]
    fn test_policy_accepts_valid_messages() {
        let layout = FlagLayout::default();
        for flags in [
            vec![Flag::F1],
            vec![Flag::F2, Flag::F3],
            vec![Flag::F3, Flag::F5, Flag::F6],
            vec![Flag::F4],
        ] {
            assert!(check_policy(&Message::from_flags(layout, &flags), layout).is_ok());
        }
        // Payload bits only, no flags.
        let payload = Message::from_u128(1 << 64);
        assert!(check_policy(&payload, layout).is_ok());
    }

    #[test]
    fn test_policy_reports_every_violation() {
        let layout = FlagLayout::default();
        let message = Message::from_flags(layout, &[Flag::F1, Flag::F2, Flag::F4, Flag::F5]);
        assert_eq!(
            check_policy(&message, layout),
            Err(ContractError::PolicyViolation {
                violated: vec![
                    FlagRule::Flag1Exclusive,
                    FlagRule::Flag2RequiresFlag3,
                    FlagRule::Flag4ExcludesFlags5And6,
                ],
            })
        );
    }

    #[test]
    fn test_policy_rejects_empty_message() {
        assert_eq!(
            check_policy(&Message::default(), FlagLayout::default()),
            Err(ContractError::EmptyMessage)
        );
    }

    #[test]
    fn test_policy_respects_offset() {
        let layout = FlagLayout::new(8).unwrap();
        // f1 and f2 at offset 0 are plain payload under an offset of 8.
        let message = Message::from_flags(FlagLayout::default(), &[Flag::F1, Flag::F2]);
        assert!(check_policy(&message, layout).is_ok());
        let shifted = Message::from_flags(layout, &[Flag::F1, Flag::F2]);
        assert!(check_policy(&shifted, layout).is_err());
    }
}
