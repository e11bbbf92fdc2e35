//! Vault messages and the flag policy they must satisfy.
//!
//! A message is a 256-bit value. Six consecutive bits starting at the
//! layout offset carry the policy flags f1..f6 in ascending bit order; the
//! remaining bits are free payload. A message is acceptable only when all
//! three flag rules hold at once:
//!
//! - f1 excludes every other flag
//! - f2 requires f3
//! - f4 excludes f5 and f6
//!
//! The rules are evaluated as one boolean expression over all six bits, the
//! same way a circuit would constrain them, so a report always carries the
//! outcome of every rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::{impl_fixed_bytes, Hash256, HASH_BITS};

/// Number of policy flags carried by a message.
pub const FLAG_COUNT: usize = 6;

/// Largest offset that still fits all flags inside a message.
pub const MAX_FLAG_OFFSET: u16 = (HASH_BITS - FLAG_COUNT) as u16;

/// A single policy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
}

impl Flag {
    pub const ALL: [Flag; FLAG_COUNT] = [Flag::F1, Flag::F2, Flag::F3, Flag::F4, Flag::F5, Flag::F6];

    /// One-based flag number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Parse a one-based flag number.
    pub fn from_number(number: usize) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(Error::InvalidFlag(number))
    }

    fn index(self) -> usize {
        match self {
            Flag::F1 => 0,
            Flag::F2 => 1,
            Flag::F3 => 2,
            Flag::F4 => 3,
            Flag::F5 => 4,
            Flag::F6 => 5,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.number())
    }
}

/// Where the flag bits sit inside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FlagLayout(u16);

impl FlagLayout {
    pub fn new(offset: u16) -> Result<Self> {
        if offset > MAX_FLAG_OFFSET {
            return Err(Error::InvalidFlagOffset {
                offset,
                max: MAX_FLAG_OFFSET,
            });
        }
        Ok(Self(offset))
    }

    /// Bit index of f1.
    pub fn offset(&self) -> u16 {
        self.0
    }

    fn bit_index(&self, flag: Flag) -> usize {
        self.0 as usize + flag.index()
    }
}

impl TryFrom<u16> for FlagLayout {
    type Error = Error;

    fn try_from(offset: u16) -> Result<Self> {
        Self::new(offset)
    }
}

impl From<FlagLayout> for u16 {
    fn from(layout: FlagLayout) -> Self {
        layout.0
    }
}

/// A 256-bit message stored in the vault.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Message(pub [u8; 32]);

impl_fixed_bytes!(Message);

impl Message {
    /// Encode an integer as the low 128 bits of a message.
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// A message with exactly the given flags set and no payload.
    pub fn from_flags(layout: FlagLayout, flags: &[Flag]) -> Self {
        Self::default().with_flags(layout, flags)
    }

    /// Return a copy with the given flags set in addition to existing bits.
    pub fn with_flags(self, layout: FlagLayout, flags: &[Flag]) -> Self {
        let hash = flags.iter().fold(Hash256(self.0), |hash, flag| {
            hash.with_bit(layout.bit_index(*flag), true)
        });
        Self(hash.0)
    }

    pub fn bit(&self, index: usize) -> bool {
        Hash256(self.0).bit(index)
    }

    /// Extract the policy flags.
    pub fn flags(&self, layout: FlagLayout) -> FlagSet {
        let mut bits = [false; FLAG_COUNT];
        for flag in Flag::ALL {
            bits[flag.index()] = self.bit(layout.bit_index(flag));
        }
        FlagSet(bits)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// The six flag bits of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet([bool; FLAG_COUNT]);

impl FlagSet {
    pub fn is_set(&self, flag: Flag) -> bool {
        self.0[flag.index()]
    }

    /// Flags packed into the low six bits, f1 first.
    pub fn bits(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, set)| acc | ((*set as u8) << i))
    }

    /// Evaluate all three rules over the same bits.
    pub fn evaluate(&self) -> PolicyReport {
        let [f1, f2, f3, f4, f5, f6] = self.0;

        PolicyReport {
            flag1_exclusive: !f1 | !(f2 | f3 | f4 | f5 | f6),
            flag2_requires_flag3: !f2 | f3,
            flag4_excludes_flags5_and_6: !f4 | !(f5 | f6),
        }
    }
}

/// One of the three flag implications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagRule {
    Flag1Exclusive,
    Flag2RequiresFlag3,
    Flag4ExcludesFlags5And6,
}

impl fmt::Display for FlagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagRule::Flag1Exclusive => write!(f, "f1 excludes all other flags"),
            FlagRule::Flag2RequiresFlag3 => write!(f, "f2 requires f3"),
            FlagRule::Flag4ExcludesFlags5And6 => write!(f, "f4 excludes f5 and f6"),
        }
    }
}

/// Outcome of every flag rule for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyReport {
    pub flag1_exclusive: bool,
    pub flag2_requires_flag3: bool,
    pub flag4_excludes_flags5_and_6: bool,
}

impl PolicyReport {
    pub fn is_satisfied(&self) -> bool {
        self.flag1_exclusive & self.flag2_requires_flag3 & self.flag4_excludes_flags5_and_6
    }

    /// Every rule that does not hold.
    pub fn violations(&self) -> Vec<FlagRule> {
        [
            (self.flag1_exclusive, FlagRule::Flag1Exclusive),
            (self.flag2_requires_flag3, FlagRule::Flag2RequiresFlag3),
            (self.flag4_excludes_flags5_and_6, FlagRule::Flag4ExcludesFlags5And6),
        ]
        .into_iter()
        .filter_map(|(holds, rule)| (!holds).then_some(rule))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(flags: &[Flag]) -> PolicyReport {
        Message::from_flags(FlagLayout::default(), flags)
            .flags(FlagLayout::default())
            .evaluate()
    }

    #[test]
    fn test_flags_occupy_ascending_bits() {
        let message = Message::from_flags(FlagLayout::default(), &[Flag::F1, Flag::F3]);
        assert_eq!(message.0[31], 0b0000_0101);

        let shifted = Message::from_flags(FlagLayout::new(8).unwrap(), &[Flag::F1]);
        assert_eq!(shifted.0[30], 0b0000_0001);
        assert_eq!(shifted.0[31], 0);
    }

    #[test]
    fn test_flags_roundtrip_through_bits() {
        let layout = FlagLayout::new(100).unwrap();
        let message = Message::from_flags(layout, &[Flag::F2, Flag::F3, Flag::F6]);
        let flags = message.flags(layout);

        assert!(!flags.is_set(Flag::F1));
        assert!(flags.is_set(Flag::F2));
        assert!(flags.is_set(Flag::F3));
        assert!(flags.is_set(Flag::F6));
        assert_eq!(flags.bits(), 0b10_0110);
    }

    #[test]
    fn test_payload_bits_do_not_affect_flags() {
        let message = Message::from_u128(0xffff_0000).with_flags(FlagLayout::default(), &[Flag::F4]);
        let flags = message.flags(FlagLayout::default());
        assert_eq!(flags.bits(), 0b00_1000);
        assert!(flags.evaluate().is_satisfied());
    }

    #[test]
    fn test_only_f1_is_accepted() {
        assert!(report(&[Flag::F1]).is_satisfied());
    }

    #[test]
    fn test_f1_with_f2_is_rejected() {
        let report = report(&[Flag::F1, Flag::F2]);
        assert!(!report.is_satisfied());
        // f2 without f3 fails as well; both are reported
        assert_eq!(
            report.violations(),
            vec![FlagRule::Flag1Exclusive, FlagRule::Flag2RequiresFlag3]
        );
    }

    #[test]
    fn test_f1_with_any_other_flag_is_rejected() {
        for other in [Flag::F2, Flag::F3, Flag::F4, Flag::F5, Flag::F6] {
            let report = report(&[Flag::F1, other]);
            assert!(!report.flag1_exclusive, "f1 with {} should be rejected", other);
        }
    }

    #[test]
    fn test_f2_without_f3_is_rejected() {
        assert_eq!(report(&[Flag::F2]).violations(), vec![FlagRule::Flag2RequiresFlag3]);
    }

    #[test]
    fn test_f2_with_f3_is_accepted() {
        assert!(report(&[Flag::F2, Flag::F3]).is_satisfied());
    }

    #[test]
    fn test_f4_with_f5_or_f6_is_rejected() {
        assert_eq!(
            report(&[Flag::F4, Flag::F5]).violations(),
            vec![FlagRule::Flag4ExcludesFlags5And6]
        );
        assert_eq!(
            report(&[Flag::F4, Flag::F6]).violations(),
            vec![FlagRule::Flag4ExcludesFlags5And6]
        );
        assert!(report(&[Flag::F5, Flag::F6]).is_satisfied());
    }

    #[test]
    fn test_all_flag_combinations_match_rules() {
        for bits in 0u8..64 {
            let flags: Vec<Flag> = Flag::ALL
                .into_iter()
                .filter(|flag| bits & (1 << (flag.number() - 1)) != 0)
                .collect();
            let f = |n: u8| bits & (1 << (n - 1)) != 0;

            let expected = (!f(1) || bits == 1) && (!f(2) || f(3)) && (!f(4) || !(f(5) || f(6)));
            assert_eq!(report(&flags).is_satisfied(), expected, "bits {:06b}", bits);
        }
    }

    #[test]
    fn test_no_flags_is_accepted() {
        assert!(report(&[]).is_satisfied());
    }

    #[test]
    fn test_flag_numbers() {
        assert_eq!(Flag::from_number(1), Ok(Flag::F1));
        assert_eq!(Flag::from_number(6), Ok(Flag::F6));
        assert_eq!(Flag::from_number(0), Err(Error::InvalidFlag(0)));
        assert_eq!(Flag::from_number(7), Err(Error::InvalidFlag(7)));
    }

    #[test]
    fn test_layout_bounds() {
        assert!(FlagLayout::new(MAX_FLAG_OFFSET).is_ok());
        assert_eq!(
            FlagLayout::new(MAX_FLAG_OFFSET + 1),
            Err(Error::InvalidFlagOffset {
                offset: MAX_FLAG_OFFSET + 1,
                max: MAX_FLAG_OFFSET,
            })
        );
    }
}
