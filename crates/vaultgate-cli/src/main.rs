//! CLI client for the vaultgate deposit contract.
//!
//! Keeps a local ledger file with the contract state and full replicas of
//! both maps, and builds the witnesses each transaction needs.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vaultgate")]
#[command(about = "Allowlist-gated deposit vault CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Ledger file (default: target/vaultgate/ledger.json)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error); falls back to RUST_LOG, then info
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a signing key
    Keygen {
        /// Where to write the key
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Deploy a contract administered by the given key
    Init {
        /// Admin signing key
        #[arg(long)]
        key: PathBuf,

        /// Contract configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing ledger
        #[arg(long)]
        force: bool,
    },

    /// Add an address to the allowlist
    Store {
        /// Admin signing key
        #[arg(long)]
        key: PathBuf,

        /// Address to admit (hex)
        address: String,
    },

    /// Deposit a message for the key's address
    Deposit {
        /// Depositor signing key
        #[arg(long)]
        key: PathBuf,

        /// Message payload (hex, default: zero)
        #[arg(long)]
        message: Option<String>,

        /// Flag to set, 1 to 6 (repeatable)
        #[arg(long = "flag", short)]
        flags: Vec<usize>,
    },

    /// Check whether a message is committed for an address
    Check {
        /// Address (hex)
        address: String,

        /// Message (hex)
        message: String,
    },

    /// Show the contract state
    Status,

    /// Print the witness for an address
    Witness {
        /// Which map to read
        #[arg(value_enum)]
        map: MapKind,

        /// Address (hex)
        address: String,

        /// Print bincode bytes as hex instead of JSON
        #[arg(long)]
        bytes: bool,
    },
}

/// The two maps a contract commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MapKind {
    /// Address membership
    Allowlist,
    /// Deposited messages
    Vault,
}

/// `--log-level` when given, otherwise `RUST_LOG`, otherwise `info`.
fn log_filter(level: Option<&str>) -> EnvFilter {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    };
    filter.unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(log_filter(cli.log_level.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let ledger = cli.ledger.unwrap_or_else(commands::default_ledger_path);

    match cli.command {
        Commands::Keygen { output } => commands::keygen(&output),
        Commands::Init { key, config, force } => {
            commands::init(&ledger, &key, config.as_deref(), force)
        }
        Commands::Store { key, address } => commands::store(&ledger, &key, &address),
        Commands::Deposit {
            key,
            message,
            flags,
        } => commands::deposit(&ledger, &key, message.as_deref(), &flags),
        Commands::Check { address, message } => commands::check(&ledger, &address, &message),
        Commands::Status => commands::status(&ledger),
        Commands::Witness {
            map,
            address,
            bytes,
        } => commands::witness(&ledger, map, &address, bytes),
    }
}
