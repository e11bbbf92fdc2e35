//! The local ledger file.
//!
//! Holds the persisted contract fields, the configuration the contract was
//! deployed with, full replicas of both maps and every emitted event.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use vaultgate_contract::{ContractConfig, ContractEvent, ContractState, SecureDeposit};
use vaultgate_map::SparseMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerFile {
    pub config: ContractConfig,
    pub state: ContractState,
    pub allowlist: SparseMap,
    pub vault: SparseMap,
    #[serde(default)]
    pub events: Vec<ContractEvent>,
}

impl LedgerFile {
    /// A ledger for a freshly initialized contract.
    pub fn new(contract: &SecureDeposit) -> Self {
        Self {
            config: *contract.config(),
            state: *contract.state(),
            allowlist: SparseMap::new(),
            vault: SparseMap::new(),
            events: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read ledger {} (run `vaultgate init` first)",
                path.display()
            )
        })?;
        let ledger: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse ledger {}", path.display()))?;
        ledger.config.validate()?;
        Ok(ledger)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize ledger")?;
        fs::write(path, json).with_context(|| format!("Failed to write ledger {}", path.display()))
    }

    /// Fail unless both replicas match the committed roots and counts.
    ///
    /// Witnesses built from a replica that disagrees with the contract
    /// would be rejected anyway.
    pub fn ensure_agreement(&self) -> Result<()> {
        if self.allowlist.root() != self.state.address_root() {
            bail!(
                "Allowlist replica root {} does not match committed root {}",
                self.allowlist.root(),
                self.state.address_root()
            );
        }
        if self.vault.root() != self.state.message_root() {
            bail!(
                "Vault replica root {} does not match committed root {}",
                self.vault.root(),
                self.state.message_root()
            );
        }
        if self.allowlist.len() != self.state.address_count() as usize {
            bail!(
                "Allowlist replica has {} entries, contract counts {}",
                self.allowlist.len(),
                self.state.address_count()
            );
        }
        if self.vault.len() != self.state.message_count() as usize {
            bail!(
                "Vault replica has {} entries, contract counts {}",
                self.vault.len(),
                self.state.message_count()
            );
        }
        Ok(())
    }

    pub fn contract(&self) -> Result<SecureDeposit> {
        Ok(SecureDeposit::restore(self.config, self.state)?)
    }
}
