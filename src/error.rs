//! Error types for address parsing, arithmetic and set analysis.

use crate::models::Family;
use thiserror::Error;

/// Error type for every fallible address operation.
///
/// Nothing is retried internally; each variant is reported at the call
/// that detects it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Text does not match the family grammar.
    #[error("'{text}' is not a valid {family} address")]
    MalformedAddressFormat {
        /// Family the text was parsed as
        family: Family,
        /// The rejected input
        text: String,
    },

    /// Prefix length outside the range allowed for the operation.
    #[error("mask out of range: {reason}")]
    MaskOutOfRange {
        /// The rejected prefix length, `u8::MAX` when the text does not fit a `u8`
        mask: u8,
        /// Which bound was violated
        reason: String,
    },

    /// Network or broadcast address requested where none exists (IPv4 /31, /32).
    #[error("a /{mask} network has no network or broadcast address")]
    UndefinedNetworkBoundary {
        /// Prefix length of the address
        mask: u8,
    },

    /// A strict walk ran past the end of its segment.
    #[error("address space exhausted after {last}: {bits} bit segment has no further value")]
    AddressSpaceExhausted {
        /// Last address produced (or the walk origin)
        last: String,
        /// Width of the segment being incremented
        bits: u8,
    },

    /// A set-analysis element is outside the asserted network.
    #[error("address {address} does not belong to {network} network")]
    NetworkMismatch {
        /// The first offending element
        address: String,
        /// The network asserted by the first element
        network: String,
    },

    /// Set analysis needs at least two elements.
    #[error("at least 2 elements required, got {count}")]
    InsufficientElements {
        /// Number of elements supplied
        count: usize,
    },

    /// A raw value does not fit the target width.
    #[error("value {value:#x} does not fit in {bits} bits")]
    ValueOutOfRange {
        /// The rejected value
        value: u128,
        /// Available width
        bits: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = AddressError::MalformedAddressFormat {
            family: Family::V4,
            text: "10.0.0.256".to_string(),
        };
        assert_eq!(e.to_string(), "'10.0.0.256' is not a valid IPv4 address");

        let e = AddressError::NetworkMismatch {
            address: "10.0.1.1".to_string(),
            network: "10.0.0.1/24".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "address 10.0.1.1 does not belong to 10.0.0.1/24 network"
        );

        let e = AddressError::MaskOutOfRange {
            mask: 33,
            reason: "/33 is past the IPv4 maximum of /32".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "mask out of range: /33 is past the IPv4 maximum of /32"
        );

        let e = AddressError::ValueOutOfRange {
            value: 0x1_0000_0000,
            bits: 32,
        };
        assert_eq!(e.to_string(), "value 0x100000000 does not fit in 32 bits");
    }
}
