//! The secure deposit contract.

use std::sync::Arc;

use tracing::{info, warn};
use vaultgate_core::{Address, Message};
use vaultgate_map::Witness;

use crate::allowlist;
use crate::audit;
use crate::auth::{contract_id, require_key, Authorization, ContractId, Operation};
use crate::config::ContractConfig;
use crate::deposit;
use crate::error::Result;
use crate::events::{ContractEvent, NoOpSubscriber, Subscriber};
use crate::state::{AddressCommitment, ContractState, MessageCommitment};

/// An allowlist of up to `max_addresses` addresses and a vault holding at
/// most one message per allowlisted address.
///
/// Only the roots of both maps are kept. Every mutation carries a witness
/// for the prior leaf and either commits completely or leaves the state
/// untouched.
pub struct SecureDeposit {
    id: ContractId,
    config: ContractConfig,
    state: ContractState,
    subscriber: Arc<dyn Subscriber>,
}

impl SecureDeposit {
    /// Create a contract administered by the signer of `authorization`.
    pub fn init(authorization: &Authorization, config: ContractConfig) -> Result<Self> {
        config.validate()?;
        let id = contract_id(&authorization.signer, &config);
        let proven = authorization.verify(&id, &Operation::Init { config: &config })?;

        info!(admin = %proven.address(), contract = %id, "contract initialized");
        Ok(Self {
            id,
            config,
            state: ContractState::new(proven.address()),
            subscriber: Arc::new(NoOpSubscriber),
        })
    }

    /// Resume a contract from persisted state.
    pub fn restore(config: ContractConfig, state: ContractState) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            id: contract_id(&state.admin(), &config),
            config,
            state,
            subscriber: Arc::new(NoOpSubscriber),
        })
    }

    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscriber>) -> Self {
        self.subscriber = subscriber;
        self
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn state(&self) -> &ContractState {
        &self.state
    }

    /// Add `address` to the allowlist. Admin only.
    ///
    /// `witness` proves `address` is absent from the current allowlist.
    pub fn store(
        &mut self,
        authorization: &Authorization,
        witness: &Witness,
        address: &Address,
    ) -> Result<AddressCommitment> {
        let result = self.try_store(authorization, witness, address);
        match &result {
            Ok(commitment) => info!(
                address = %address,
                address_count = commitment.address_count,
                address_root = %commitment.address_root,
                "address stored"
            ),
            Err(e) => warn!(address = %address, error = %e, "store rejected"),
        }
        result
    }

    fn try_store(
        &mut self,
        authorization: &Authorization,
        witness: &Witness,
        address: &Address,
    ) -> Result<AddressCommitment> {
        let operation = Operation::Store { witness, address };
        let proven = authorization.verify(&self.id, &operation)?;
        require_key(&proven, &self.state.admin())?;

        let snapshot = self.state.snapshot();
        let transition = allowlist::admit(&snapshot, self.config.max_addresses, witness, address)?;
        self.state.apply(&snapshot, transition)?;
        Ok(self.state.address_commitment())
    }

    /// Record `message` for the signer of `authorization`.
    ///
    /// `address_witness` proves the signer is allowlisted and
    /// `message_witness` proves the signer has no message yet.
    pub fn deposit(
        &mut self,
        authorization: &Authorization,
        address_witness: &Witness,
        message_witness: &Witness,
        message: &Message,
    ) -> Result<MessageCommitment> {
        let result = self.try_deposit(authorization, address_witness, message_witness, message);
        match &result {
            Ok(commitment) => info!(
                sender = %authorization.signer,
                message_count = commitment.message_count,
                message_root = %commitment.message_root,
                "message deposited"
            ),
            Err(e) => warn!(sender = %authorization.signer, error = %e, "deposit rejected"),
        }
        result
    }

    fn try_deposit(
        &mut self,
        authorization: &Authorization,
        address_witness: &Witness,
        message_witness: &Witness,
        message: &Message,
    ) -> Result<MessageCommitment> {
        let operation = Operation::Deposit {
            address_witness,
            message_witness,
            message,
        };
        let sender = authorization.verify(&self.id, &operation)?.address();

        let snapshot = self.state.snapshot();
        let transition = deposit::accept(
            &snapshot,
            self.config.flag_layout,
            &sender,
            address_witness,
            message_witness,
            message,
        )?;
        self.state.apply(&snapshot, transition)?;

        self.subscriber.on_event(&ContractEvent::MessageReceived {
            sequence_number: snapshot.message_count(),
        });
        Ok(self.state.message_commitment())
    }

    /// Whether `message` is the committed vault entry of `address`.
    pub fn check(&self, message_witness: &Witness, address: &Address, message: &Message) -> bool {
        audit::check(&self.state.message_root(), message_witness, address, message)
    }
}

impl std::fmt::Debug for SecureDeposit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureDeposit")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
