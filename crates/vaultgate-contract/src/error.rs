//! Error types for contract operations.
//!
//! Every error aborts the whole operation; the contract state is exactly
//! what it was before the call.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;
use vaultgate_core::{Address, FlagRule, Key, Root};

/// Why a witness failed to authenticate a claimed leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofFailure {
    /// The witness leads to a different key.
    KeyMismatch { expected: Key, actual: Key },
    /// The witness and claimed value do not produce the live root.
    RootMismatch { expected: Root, actual: Root },
}

impl fmt::Display for ProofFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofFailure::KeyMismatch { expected, actual } => {
                write!(f, "witness is for key {}, expected {}", actual, expected)
            }
            ProofFailure::RootMismatch { expected, actual } => {
                write!(f, "witness yields root {}, live root is {}", actual, expected)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The proven key is not the key the operation requires.
    #[error("Authorization failed: operation requires {expected}, proven key is {actual}")]
    Authorization { expected: Address, actual: Address },

    /// The authorization proof does not verify.
    #[error("Invalid authorization signature")]
    InvalidSignature,

    #[error("Allowlist is full ({max} addresses)")]
    Capacity { max: u32 },

    /// The non-membership witness does not match the live allowlist root:
    /// the address is already present or the witness predates another store.
    #[error("Stale witness: address already present or allowlist changed ({0})")]
    StaleWitness(ProofFailure),

    #[error("Witness is for key {actual}, expected {expected}")]
    WitnessKeyMismatch { expected: Key, actual: Key },

    #[error("Sender is not on the allowlist: {0}")]
    Ineligible(ProofFailure),

    #[error("Sender has already deposited: {0}")]
    DuplicateDeposit(ProofFailure),

    #[error("Message violates flag policy: {}", .violated.iter().join(", "))]
    PolicyViolation { violated: Vec<FlagRule> },

    #[error("Message must not be empty")]
    EmptyMessage,

    /// A transition was applied against a snapshot that no longer matches.
    #[error("Contract state changed since snapshot ({field})")]
    PreconditionChanged { field: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
