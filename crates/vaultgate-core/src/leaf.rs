//! Leaf values stored in a commitment map.

use crate::hash::impl_fixed_bytes;
use crate::message::Message;

/// A 32-byte leaf value.
///
/// Unset keys implicitly hold [`Leaf::EMPTY`]. The allowlist only ever
/// stores [`Leaf::PRESENT`]; the vault stores message encodings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Leaf(pub [u8; 32]);

impl_fixed_bytes!(Leaf);

impl Leaf {
    pub const EMPTY: Leaf = Leaf([0u8; 32]);

    /// Membership marker (the integer 1).
    pub const PRESENT: Leaf = {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        Leaf(bytes)
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl From<Message> for Leaf {
    fn from(message: Message) -> Self {
        Leaf(message.0)
    }
}

impl From<&Message> for Leaf {
    fn from(message: &Message) -> Self {
        Leaf(message.0)
    }
}
