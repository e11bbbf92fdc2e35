//! Utility traits for debugging bit-level encodings.

use crate::hash::Hash256;
use crate::message::{FlagSet, Message, FLAG_COUNT};

/// Trait for displaying values in binary format.
pub trait DisplayBinary {
    /// Get the binary representation as a string.
    fn to_binary_string(&self) -> String;
}

impl DisplayBinary for u8 {
    fn to_binary_string(&self) -> String {
        let mut result = String::with_capacity(8);
        for bit in (0..8).rev() {
            if (self >> bit) & 1 == 1 {
                result.push('1');
            } else {
                result.push('0');
            }
        }
        result
    }
}

impl DisplayBinary for Hash256 {
    fn to_binary_string(&self) -> String {
        self.0
            .iter()
            .map(|b| b.to_binary_string())
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl DisplayBinary for Message {
    fn to_binary_string(&self) -> String {
        Hash256(self.0).to_binary_string()
    }
}

/// Flags are printed f6 first so the string reads like the bits of a number.
impl DisplayBinary for FlagSet {
    fn to_binary_string(&self) -> String {
        let bits = self.bits();
        (0..FLAG_COUNT)
            .rev()
            .map(|i| if (bits >> i) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}
