//! Authentication of claimed leaves against a live root.

use tracing::debug;
use vaultgate_core::{Key, Leaf, Root};
use vaultgate_map::Witness;

use crate::error::ProofFailure;

/// Check that `witness` proves `key` holds `value` under `live_root`.
///
/// The key is compared before the root, so a witness for another key is
/// always reported as a key mismatch.
pub fn prove_leaf(
    witness: &Witness,
    key: &Key,
    value: &Leaf,
    live_root: &Root,
) -> Result<(), ProofFailure> {
    let (root, derived_key) = witness.compute_root_and_key(value);

    if derived_key != *key {
        debug!(expected = %key, actual = %derived_key, "witness key mismatch");
        return Err(ProofFailure::KeyMismatch {
            expected: *key,
            actual: derived_key,
        });
    }
    if root != *live_root {
        debug!(expected = %live_root, actual = %root, "witness root mismatch");
        return Err(ProofFailure::RootMismatch {
            expected: *live_root,
            actual: root,
        });
    }

    debug!(key = %key, root = %root, "witness verified");
    Ok(())
}
