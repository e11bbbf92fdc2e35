//! Persisted contract state and its transitions.

use serde::{Deserialize, Serialize};
use vaultgate_core::{Address, Root};
use vaultgate_map::empty_root;

use crate::error::{ContractError, Result};

/// The five persisted fields of a contract.
///
/// Fields are only written through [`ContractState::apply`], and each field
/// has exactly one writing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractState {
    admin: Address,
    address_root: Root,
    address_count: u32,
    message_root: Root,
    message_count: u32,
}

/// Post-state of an accepted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCommitment {
    pub address_root: Root,
    pub address_count: u32,
}

/// Post-state of an accepted deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCommitment {
    pub message_root: Root,
    pub message_count: u32,
}

/// A state change computed against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Admit one address to the allowlist.
    Admit { address_root: Root },
    /// Record one message in the vault.
    Deposit { message_root: Root },
}

impl ContractState {
    /// State of a freshly initialized contract: both maps empty.
    pub fn new(admin: Address) -> Self {
        let empty = empty_root();
        Self {
            admin,
            address_root: empty,
            address_count: 0,
            message_root: empty,
            message_count: 0,
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn address_root(&self) -> Root {
        self.address_root
    }

    pub fn address_count(&self) -> u32 {
        self.address_count
    }

    pub fn message_root(&self) -> Root {
        self.message_root
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    /// Copy of the current state for computing a transition against.
    pub fn snapshot(&self) -> ContractState {
        *self
    }

    /// Apply `transition`, which was computed against `expected`.
    ///
    /// Every field the transition read must still hold the value in
    /// `expected`; otherwise nothing is written.
    pub(crate) fn apply(&mut self, expected: &ContractState, transition: Transition) -> Result<()> {
        if self.admin != expected.admin {
            return Err(ContractError::PreconditionChanged { field: "admin" });
        }
        match transition {
            Transition::Admit { address_root } => {
                if self.address_root != expected.address_root {
                    return Err(ContractError::PreconditionChanged { field: "address_root" });
                }
                if self.address_count != expected.address_count {
                    return Err(ContractError::PreconditionChanged { field: "address_count" });
                }
                self.address_root = address_root;
                self.address_count += 1;
            }
            Transition::Deposit { message_root } => {
                if self.address_root != expected.address_root {
                    return Err(ContractError::PreconditionChanged { field: "address_root" });
                }
                if self.message_root != expected.message_root {
                    return Err(ContractError::PreconditionChanged { field: "message_root" });
                }
                if self.message_count != expected.message_count {
                    return Err(ContractError::PreconditionChanged { field: "message_count" });
                }
                self.message_root = message_root;
                self.message_count += 1;
            }
        }
        Ok(())
    }

    pub fn address_commitment(&self) -> AddressCommitment {
        AddressCommitment {
            address_root: self.address_root,
            address_count: self.address_count,
        }
    }

    pub fn message_commitment(&self) -> MessageCommitment {
        MessageCommitment {
            message_root: self.message_root,
            message_count: self.message_count,
        }
    }
}
