//! Address family capability set.
//!
//! Both families share one [`Address`](super::Address) implementation; the
//! family marker only supplies bit width, grammar, rendering and the
//! reserved-host policy.

use crate::error::AddressError;
use std::fmt;
use std::hash::Hash;

/// Runtime tag for an address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// 32 bit dotted-quad addresses.
    V4,
    /// 128 bit colon-hex addresses.
    V6,
}

impl Family {
    /// Guess the family of an address text: anything with a colon is IPv6.
    pub fn of(text: &str) -> Family {
        if text.contains(':') {
            Family::V6
        } else {
            Family::V4
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Family-specific rules plugged into the generic address type.
pub trait AddressFamily:
    Copy + fmt::Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// Width of an address in bits.
    const BITS: u8;
    /// Runtime tag.
    const FAMILY: Family;
    /// Whether the all-zeros and all-ones host values are reserved
    /// (network and broadcast) and never handed out by a walk.
    const RESERVES_HOST_EXTREMES: bool;

    /// Parse address text (without prefix length) into its numeric value.
    fn parse_bits(text: &str) -> Result<u128, AddressError>;

    /// Canonical text for a value.
    fn format(value: u128) -> String;

    /// Non-abbreviated text for a value.
    fn format_full(value: u128) -> String {
        Self::format(value)
    }
}

/// Value with the lowest `width` bits set.
pub(crate) fn low_bits(width: u32) -> u128 {
    if width >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Right shift where shifting out every bit yields zero.
pub(crate) fn shr(value: u128, shift: u32) -> u128 {
    value.checked_shr(shift).unwrap_or(0)
}
