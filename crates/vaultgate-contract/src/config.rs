//! Deployment parameters of a contract instance.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vaultgate_core::message::FlagLayout;

use crate::error::{ContractError, Result};

/// Parameters fixed at initialization.
///
/// These are not part of the persisted contract state; a host supplies the
/// same configuration whenever it restores a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    /// Maximum number of allowlisted addresses, at most 100.
    pub max_addresses: u32,

    /// Bit index of flag f1 inside a message.
    #[serde(rename = "flag_offset")]
    pub flag_layout: FlagLayout,
}

impl ContractConfig {
    pub const DEFAULT_MAX_ADDRESSES: u32 = 100;

    pub fn validate(&self) -> Result<()> {
        if self.max_addresses == 0 {
            return Err(ContractError::InvalidConfig(
                "max_addresses must be at least 1".to_string(),
            ));
        }
        if self.max_addresses > Self::DEFAULT_MAX_ADDRESSES {
            return Err(ContractError::InvalidConfig(format!(
                "max_addresses must be at most {}, got {}",
                Self::DEFAULT_MAX_ADDRESSES,
                self.max_addresses
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ContractError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ContractError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            max_addresses: Self::DEFAULT_MAX_ADDRESSES,
            flag_layout: FlagLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContractConfig::default();
        assert_eq!(config.max_addresses, 100);
        assert_eq!(config.flag_layout.offset(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ContractConfig::from_json(r#"{"flag_offset": 8}"#).unwrap();
        assert_eq!(config.max_addresses, 100);
        assert_eq!(config.flag_layout.offset(), 8);
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        assert!(matches!(
            ContractConfig::from_json(r#"{"flag_offset": 251}"#),
            Err(ContractError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(matches!(
            ContractConfig::from_json(r#"{"max_addresses": 0}"#),
            Err(ContractError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_capacity_above_limit() {
        assert!(matches!(
            ContractConfig::from_json(r#"{"max_addresses": 150}"#),
            Err(ContractError::InvalidConfig(_))
        ));
        assert!(ContractConfig::from_json(r#"{"max_addresses": 100}"#).is_ok());
        assert!(ContractConfig::from_json(r#"{"max_addresses": 10}"#).is_ok());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(ContractConfig::from_json(r#"{"max_address": 5}"#).is_err());
    }
}
