//! Core types for the vaultgate commitment system.
//!
//! This crate defines the value types shared by the commitment map, the
//! contract and the client tooling: fixed-width hashes, addresses and the
//! keys derived from them, map leaves and the flag-carrying message
//! encoding. It contains no state.

pub mod address;
pub mod error;
pub mod hash;
pub mod leaf;
pub mod message;
pub mod utils;

pub use address::Address;
pub use error::{Error, Result};
pub use hash::{Hash256, Key, Root};
pub use leaf::Leaf;
pub use message::{Flag, FlagRule, FlagSet, Message, PolicyReport};
