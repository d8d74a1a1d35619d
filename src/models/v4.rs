//! IPv4 grammar and rendering.

use super::family::{AddressFamily, Family};
use crate::error::AddressError;
use regex::Regex;
use std::sync::OnceLock;

/// Marker for the IPv4 family.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct V4;

/// Four decimal octets, no leading zeros.
static OCTETS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octets_regex() -> &'static Regex {
    OCTETS_REGEX.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})$")
            .expect("Invalid Regex")
    })
}

impl AddressFamily for V4 {
    const BITS: u8 = 32;
    const FAMILY: Family = Family::V4;
    const RESERVES_HOST_EXTREMES: bool = true;

    fn parse_bits(text: &str) -> Result<u128, AddressError> {
        let malformed = || AddressError::MalformedAddressFormat {
            family: Family::V4,
            text: text.to_string(),
        };
        let caps = get_octets_regex().captures(text).ok_or_else(malformed)?;

        let mut value = 0u128;
        for group in caps.iter().skip(1) {
            let octet: u8 = group
                .ok_or_else(malformed)?
                .as_str()
                .parse()
                .map_err(|_| malformed())?;
            value = (value << 8) | u128::from(octet);
        }
        Ok(value)
    }

    fn format(value: u128) -> String {
        let [a, b, c, d] = (value as u32).to_be_bytes();
        format!("{a}.{b}.{c}.{d}")
    }
}
