//! Allowlist-gated one-time deposit vault.
//!
//! This crate provides:
//! - Admin-controlled allowlist admission
//! - One message per allowlisted address, checked against a flag policy
//! - Stateless audit of committed messages
//! - An in-process ledger that linearizes transactions
//!
//! The contract keeps only the roots of its two maps and two counters.
//! Clients keep the full maps off-chain and send witnesses.

pub mod allowlist;
pub mod audit;
pub mod auth;
pub mod config;
pub mod contract;
pub mod deposit;
pub mod error;
pub mod events;
pub mod ledger;
pub mod state;
pub mod verify;


pub use auth::{address_of, require_key, Authorization, ContractId, Operation, ProvenKey};
pub use config::ContractConfig;
pub use contract::SecureDeposit;
pub use error::{ContractError, ProofFailure, Result};
pub use events::{ContractEvent, JsonSubscriber, NoOpSubscriber, RecordingSubscriber, Subscriber};
pub use ledger::{Ledger, Receipt, Transaction};
pub use state::{AddressCommitment, ContractState, MessageCommitment};

// Re-export the signing key type clients need to build authorizations
pub use ed25519_dalek::SigningKey;
