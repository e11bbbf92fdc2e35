//! Command implementations for the vaultgate CLI.

mod keys;
mod ledger_file;

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::debug;
use vaultgate_contract::{
    address_of, auth::contract_id, Authorization, ContractConfig, JsonSubscriber, Ledger,
    Operation, Receipt, RecordingSubscriber, SecureDeposit, Subscriber, Transaction,
};
use vaultgate_core::{Address, Flag, Leaf, Message};

use crate::MapKind;
use ledger_file::LedgerFile;

/// Get the output directory for artifacts.
fn output_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("target")
        .join("vaultgate")
}

pub fn default_ledger_path() -> PathBuf {
    output_dir().join("ledger.json")
}

fn parse_address(s: &str) -> Result<Address> {
    Address::from_hex(s).with_context(|| format!("Invalid address '{}'", s))
}

fn parse_message(s: &str) -> Result<Message> {
    Message::from_hex(s).with_context(|| format!("Invalid message '{}'", s))
}

/// Load the ledger and make sure its replicas can be trusted for witnesses.
fn load_ledger(path: &Path) -> Result<LedgerFile> {
    let ledger = LedgerFile::load(path)?;
    ledger
        .ensure_agreement()
        .context("Local replicas disagree with the contract state")?;
    Ok(ledger)
}

/// Submit one transaction and fold its effects back into the ledger file.
fn submit(path: &Path, mut file: LedgerFile, transaction: Transaction) -> Result<Receipt> {
    let recorder = Arc::new(RecordingSubscriber::new());
    let contract = file.contract()?.with_subscriber(recorder.clone());
    let ledger = Ledger::new(contract);

    debug!(op = transaction.name(), "submitting transaction");
    let receipt = ledger
        .submit(&transaction)
        .with_context(|| format!("{} rejected", transaction.name()))?;

    // Replicas only change once the contract has accepted the transaction.
    match &transaction {
        Transaction::Store { address, .. } => {
            file.allowlist.insert(address.key(), Leaf::PRESENT);
        }
        Transaction::Deposit {
            authorization,
            message,
            ..
        } => {
            file.vault.insert(authorization.signer.key(), Leaf::from(message));
        }
    }
    file.state = ledger.state();

    let events = recorder.events();
    let printer = JsonSubscriber::new(std::io::stdout());
    for event in &events {
        printer.on_event(event);
    }
    printer.on_complete();
    file.events.extend(events);

    file.ensure_agreement()
        .context("Replica diverged after applying transaction")?;
    file.save(path)?;
    Ok(receipt)
}

/// Keygen command: write a new signing key and print its address.
pub fn keygen(output: &Path) -> Result<()> {
    let key = keys::generate();
    keys::write_key(output, &key)?;
    println!("Wrote key to {}", output.display());
    println!("  Address: {}", address_of(&key));
    Ok(())
}

/// Init command: deploy a contract with the given admin key.
pub fn init(ledger_path: &Path, key_path: &Path, config: Option<&Path>, force: bool) -> Result<()> {
    if ledger_path.exists() && !force {
        bail!(
            "Ledger {} already exists (use --force to replace it)",
            ledger_path.display()
        );
    }

    let config = match config {
        Some(path) => ContractConfig::from_file(path)?,
        None => ContractConfig::default(),
    };
    let key = keys::read_key(key_path)?;
    let id = contract_id(&address_of(&key), &config);
    let authorization = Authorization::sign(&key, &id, &Operation::Init { config: &config });
    let contract = SecureDeposit::init(&authorization, config)?;

    LedgerFile::new(&contract).save(ledger_path)?;

    println!("Initialized contract {}", contract.id());
    println!("  Admin: {}", contract.state().admin());
    println!("  Max addresses: {}", config.max_addresses);
    println!("  Flag offset: {}", config.flag_layout.offset());
    println!("  Ledger: {}", ledger_path.display());
    Ok(())
}

/// Store command: admit an address to the allowlist.
pub fn store(ledger_path: &Path, key_path: &Path, address: &str) -> Result<()> {
    let address = parse_address(address)?;
    let key = keys::read_key(key_path)?;
    let file = load_ledger(ledger_path)?;
    let id = file.contract()?.id();

    let witness = file.allowlist.witness(&address.key());
    let authorization = Authorization::sign(
        &key,
        &id,
        &Operation::Store {
            witness: &witness,
            address: &address,
        },
    );
    let receipt = submit(
        ledger_path,
        file,
        Transaction::Store {
            authorization,
            witness,
            address,
        },
    )?;

    if let Receipt::Store(commitment) = receipt {
        println!("Stored {}", address);
        println!("  Address root: {}", commitment.address_root);
        println!("  Address count: {}", commitment.address_count);
    }
    Ok(())
}

/// Deposit command: record a message for the key's address.
pub fn deposit(
    ledger_path: &Path,
    key_path: &Path,
    message: Option<&str>,
    flags: &[usize],
) -> Result<()> {
    let key = keys::read_key(key_path)?;
    let sender = address_of(&key);
    let file = load_ledger(ledger_path)?;
    let id = file.contract()?.id();

    let flags = flags
        .iter()
        .map(|n| Flag::from_number(*n))
        .collect::<vaultgate_core::Result<Vec<_>>>()?;
    let message = match message {
        Some(hex) => parse_message(hex)?,
        None => Message::default(),
    }
    .with_flags(file.config.flag_layout, &flags);

    let address_witness = file.allowlist.witness(&sender.key());
    let message_witness = file.vault.witness(&sender.key());
    let authorization = Authorization::sign(
        &key,
        &id,
        &Operation::Deposit {
            address_witness: &address_witness,
            message_witness: &message_witness,
            message: &message,
        },
    );
    let receipt = submit(
        ledger_path,
        file,
        Transaction::Deposit {
            authorization,
            address_witness,
            message_witness,
            message,
        },
    )?;

    if let Receipt::Deposit(commitment) = receipt {
        println!("Deposited {} from {}", message, sender);
        println!("  Message root: {}", commitment.message_root);
        println!("  Message count: {}", commitment.message_count);
    }
    Ok(())
}

/// Check command: audit a vault entry against the committed root.
pub fn check(ledger_path: &Path, address: &str, message: &str) -> Result<()> {
    let address = parse_address(address)?;
    let message = parse_message(message)?;
    let file = load_ledger(ledger_path)?;

    let witness = file.vault.witness(&address.key());
    let committed = file.contract()?.check(&witness, &address, &message);
    println!("{}", committed);
    Ok(())
}

/// Status command: print the committed state.
pub fn status(ledger_path: &Path) -> Result<()> {
    let file = LedgerFile::load(ledger_path)?;
    let contract = file.contract()?;
    let state = contract.state();

    println!("Contract {}", contract.id());
    println!("  Admin: {}", state.admin());
    println!(
        "  Allowlist: {} / {} addresses, root {}",
        state.address_count(),
        file.config.max_addresses,
        state.address_root()
    );
    println!(
        "  Vault: {} messages, root {}",
        state.message_count(),
        state.message_root()
    );
    println!("  Flag offset: {}", file.config.flag_layout.offset());
    println!("  Events: {}", file.events.len());
    match file.ensure_agreement() {
        Ok(()) => println!("  Replicas: in agreement"),
        Err(e) => println!("  Replicas: {}", e),
    }
    Ok(())
}

/// Witness command: print the authentication path for an address.
pub fn witness(ledger_path: &Path, map: MapKind, address: &str, bytes: bool) -> Result<()> {
    let address = parse_address(address)?;
    let file = load_ledger(ledger_path)?;
    let replica = match map {
        MapKind::Allowlist => &file.allowlist,
        MapKind::Vault => &file.vault,
    };

    let witness = replica.witness(&address.key());
    if bytes {
        println!("{}", hex::encode(witness.to_bytes()?));
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(&witness).context("Failed to serialize witness")?
        );
    }
    Ok(())
}
