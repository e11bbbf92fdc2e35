//! Sparse commitment map for vaultgate.
//!
//! A fixed-depth (256-level) sparse Merkle map over SHA-256. Every key maps
//! to a leaf; unset keys hold [`vaultgate_core::Leaf::EMPTY`]. Verifiers
//! keep only the root and authenticate changes with a [`Witness`].
//!
//! # Main Components
//!
//! - [`witness::Witness`] - Authentication path with the pure `compute_root_and_key` fold
//! - [`map::SparseMap`] - Off-chain replica used to produce witnesses
//! - [`precomputed`] - Empty subtree hashes for every height
//! - [`error`] - Error types for the library

pub mod error;
pub mod hasher;
pub mod map;
pub mod precomputed;
pub mod witness;

pub use error::{MapError, Result};
pub use map::{empty_root, SparseMap};
pub use witness::Witness;
