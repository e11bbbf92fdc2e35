//! Proof that an operation was authorized by the holder of a key.
//!
//! An [`Authorization`] is an ed25519 signature over a domain-separated
//! digest of the operation, its arguments and the contract identity.
//! Verifying it yields a [`ProvenKey`], which the contract compares against
//! the key an operation requires with [`require_key`].

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use vaultgate_core::{Address, Hash256, Message};
use vaultgate_map::Witness;

use crate::config::ContractConfig;
use crate::error::{ContractError, Result};

/// Domain tag for operation digests.
pub const OPERATION_DOMAIN: &[u8] = b"vaultgate/operation/v1";

/// Domain tag for contract identities.
pub const CONTRACT_DOMAIN: &[u8] = b"vaultgate/contract/v1";

/// Identity of one contract instance.
pub type ContractId = Hash256;

/// Identity of the contract deployed by `admin` with `config`.
pub fn contract_id(admin: &Address, config: &ContractConfig) -> ContractId {
    let mut data = Vec::with_capacity(32 + 4 + 2);
    data.extend_from_slice(admin.as_bytes());
    data.extend_from_slice(&config.max_addresses.to_be_bytes());
    data.extend_from_slice(&config.flag_layout.offset().to_be_bytes());
    Hash256::sha256_with_domain(CONTRACT_DOMAIN, &data)
}

/// The address controlled by a signing key.
pub fn address_of(key: &SigningKey) -> Address {
    Address(key.verifying_key().to_bytes())
}

/// An operation together with every argument it commits to.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    Init {
        config: &'a ContractConfig,
    },
    Store {
        witness: &'a Witness,
        address: &'a Address,
    },
    Deposit {
        address_witness: &'a Witness,
        message_witness: &'a Witness,
        message: &'a Message,
    },
}

impl Operation<'_> {
    fn tag(&self) -> u8 {
        match self {
            Operation::Init { .. } => 0,
            Operation::Store { .. } => 1,
            Operation::Deposit { .. } => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init { .. } => "init",
            Operation::Store { .. } => "store",
            Operation::Deposit { .. } => "deposit",
        }
    }

    /// The bytes an authorization signs.
    pub fn digest(&self, contract: &ContractId) -> Hash256 {
        let mut hasher = Sha256::new();
        hasher.update(OPERATION_DOMAIN);
        hasher.update(contract.as_bytes());
        hasher.update([self.tag()]);
        match self {
            Operation::Init { config } => {
                hasher.update(config.max_addresses.to_be_bytes());
                hasher.update(config.flag_layout.offset().to_be_bytes());
            }
            Operation::Store { witness, address } => {
                hasher.update(witness.digest().as_bytes());
                hasher.update(address.as_bytes());
            }
            Operation::Deposit {
                address_witness,
                message_witness,
                message,
            } => {
                hasher.update(address_witness.digest().as_bytes());
                hasher.update(message_witness.digest().as_bytes());
                hasher.update(message.as_bytes());
            }
        }
        Hash256(hasher.finalize().into())
    }
}

/// A key whose possession has been proven for the current operation.
///
/// Only [`Authorization::verify`] constructs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvenKey(Address);

impl ProvenKey {
    pub fn address(&self) -> Address {
        self.0
    }
}

/// Fail unless the proven key is `required`.
pub fn require_key(proven: &ProvenKey, required: &Address) -> Result<()> {
    if proven.0 != *required {
        return Err(ContractError::Authorization {
            expected: *required,
            actual: proven.0,
        });
    }
    Ok(())
}

/// Signature by `signer` over one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub signer: Address,
    #[serde(with = "signature_hex")]
    pub signature: Signature,
}

impl Authorization {
    pub fn sign(key: &SigningKey, contract: &ContractId, operation: &Operation<'_>) -> Self {
        let digest = operation.digest(contract);
        Self {
            signer: address_of(key),
            signature: key.sign(digest.as_bytes()),
        }
    }

    /// Check the signature and return the key it proves.
    pub fn verify(&self, contract: &ContractId, operation: &Operation<'_>) -> Result<ProvenKey> {
        let verifying_key = VerifyingKey::from_bytes(self.signer.as_bytes())
            .map_err(|_| ContractError::InvalidSignature)?;
        let digest = operation.digest(contract);
        verifying_key
            .verify_strict(digest.as_bytes(), &self.signature)
            .map_err(|_| ContractError::InvalidSignature)?;
        Ok(ProvenKey(self.signer))
    }
}

mod signature_hex {
    use ed25519_dalek::{Signature, SIGNATURE_LENGTH};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(signature: &Signature, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(signature.to_bytes()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Signature, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(s.trim_start_matches("0x")).map_err(D::Error::custom)?;
        let bytes: [u8; SIGNATURE_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            D::Error::custom(format!(
                "expected {} signature bytes, got {}",
                SIGNATURE_LENGTH,
                b.len()
            ))
        })?;
        Ok(Signature::from_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_map::SparseMap;

    fn key(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32])
    }

    fn fixture() -> (ContractId, Witness, Address) {
        let config = ContractConfig::default();
        let id = contract_id(&address_of(&key(1)), &config);
        let target = address_of(&key(2));
        let witness = SparseMap::new().witness(&target.key());
        (id, witness, target)
    }

    #[test]
    fn test_sign_and_verify() {
        let (id, witness, target) = fixture();
        let op = Operation::Store {
            witness: &witness,
            address: &target,
        };
        let auth = Authorization::sign(&key(1), &id, &op);
        let proven = auth.verify(&id, &op).unwrap();
        assert_eq!(proven.address(), address_of(&key(1)));
        assert!(require_key(&proven, &address_of(&key(1))).is_ok());
    }

    #[test]
    fn test_require_key_rejects_other_key() {
        let (id, witness, target) = fixture();
        let op = Operation::Store {
            witness: &witness,
            address: &target,
        };
        let proven = Authorization::sign(&key(3), &id, &op).verify(&id, &op).unwrap();
        assert!(matches!(
            require_key(&proven, &address_of(&key(1))),
            Err(ContractError::Authorization { .. })
        ));
    }

    #[test]
    fn test_signature_binds_arguments() {
        let (id, witness, target) = fixture();
        let op = Operation::Store {
            witness: &witness,
            address: &target,
        };
        let auth = Authorization::sign(&key(1), &id, &op);

        let other = address_of(&key(4));
        let tampered = Operation::Store {
            witness: &witness,
            address: &other,
        };
        assert_eq!(auth.verify(&id, &tampered), Err(ContractError::InvalidSignature));
    }

    #[test]
    fn test_signature_binds_contract() {
        let (id, witness, target) = fixture();
        let op = Operation::Store {
            witness: &witness,
            address: &target,
        };
        let auth = Authorization::sign(&key(1), &id, &op);
        let other_id = contract_id(&address_of(&key(9)), &ContractConfig::default());
        assert_eq!(auth.verify(&other_id, &op), Err(ContractError::InvalidSignature));
    }

    #[test]
    fn test_forged_signer_rejected() {
        let (id, witness, target) = fixture();
        let op = Operation::Store {
            witness: &witness,
            address: &target,
        };
        let mut auth = Authorization::sign(&key(3), &id, &op);
        auth.signer = address_of(&key(1));
        assert_eq!(auth.verify(&id, &op), Err(ContractError::InvalidSignature));
    }

    #[test]
    fn test_operation_tags_differ() {
        let config = ContractConfig::default();
        let id = contract_id(&address_of(&key(1)), &config);
        let witness = SparseMap::new().witness(&address_of(&key(2)).key());
        let message = Message::from_u128(7);
        let init = Operation::Init { config: &config };
        let deposit = Operation::Deposit {
            address_witness: &witness,
            message_witness: &witness,
            message: &message,
        };
        assert_ne!(init.digest(&id), deposit.digest(&id));
    }

    #[test]
    fn test_authorization_json_roundtrip() {
        let config = ContractConfig::default();
        let id = contract_id(&address_of(&key(1)), &config);
        let auth = Authorization::sign(&key(1), &id, &Operation::Init { config: &config });
        let json = serde_json::to_string(&auth).unwrap();
        let back: Authorization = serde_json::from_str(&json).unwrap();
        assert_eq!(back, auth);
    }
}
