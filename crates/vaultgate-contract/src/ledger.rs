//! In-process transaction host.
//!
//! Submissions are executed one at a time against a single contract, so two
//! transactions built from the same state linearize: the first commits and
//! the second fails its witness check.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vaultgate_core::{Address, Message};
use vaultgate_map::Witness;

use crate::auth::Authorization;
use crate::contract::SecureDeposit;
use crate::error::Result;
use crate::state::{AddressCommitment, ContractState, MessageCommitment};

/// A signed contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transaction {
    Store {
        authorization: Authorization,
        witness: Witness,
        address: Address,
    },
    Deposit {
        authorization: Authorization,
        address_witness: Witness,
        message_witness: Witness,
        message: Message,
    },
}

impl Transaction {
    pub fn name(&self) -> &'static str {
        match self {
            Transaction::Store { .. } => "store",
            Transaction::Deposit { .. } => "deposit",
        }
    }
}

/// Result of a committed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Receipt {
    Store(AddressCommitment),
    Deposit(MessageCommitment),
}

pub struct Ledger {
    contract: Mutex<SecureDeposit>,
}

impl Ledger {
    pub fn new(contract: SecureDeposit) -> Self {
        Self {
            contract: Mutex::new(contract),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SecureDeposit> {
        self.contract.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Execute one transaction atomically.
    pub fn submit(&self, transaction: &Transaction) -> Result<Receipt> {
        let mut contract = self.lock();
        debug!(op = transaction.name(), "executing transaction");
        match transaction {
            Transaction::Store {
                authorization,
                witness,
                address,
            } => contract
                .store(authorization, witness, address)
                .map(Receipt::Store),
            Transaction::Deposit {
                authorization,
                address_witness,
                message_witness,
                message,
            } => contract
                .deposit(authorization, address_witness, message_witness, message)
                .map(Receipt::Deposit),
        }
    }

    /// Current persisted state.
    pub fn state(&self) -> ContractState {
        *self.lock().state()
    }

    pub fn check(&self, message_witness: &Witness, address: &Address, message: &Message) -> bool {
        self.lock().check(message_witness, address, message)
    }

    pub fn into_contract(self) -> SecureDeposit {
        self.contract.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
