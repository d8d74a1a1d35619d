//! IPv6 grammar and rendering.
//!
//! Parsing expands a single `::` marker to the zero groups needed to reach
//! eight groups. Canonical rendering compresses the longest run (two or
//! more, leftmost on ties) of zero groups back to `::`.

use super::family::{AddressFamily, Family};
use crate::error::AddressError;
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

/// Number of 16 bit groups in an address.
const GROUPS: usize = 8;

/// Marker for the IPv6 family.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct V6;

static GROUP_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_group_regex() -> &'static Regex {
    GROUP_REGEX.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("Invalid Regex"))
}

/// Parse a colon separated run of groups. An empty part has no groups.
fn parse_groups(part: &str) -> Option<Vec<u16>> {
    if part.is_empty() {
        return Some(Vec::new());
    }
    part.split(':')
        .map(|group| {
            if get_group_regex().is_match(group) {
                u16::from_str_radix(group, 16).ok()
            } else {
                None
            }
        })
        .collect()
}

fn segments(value: u128) -> [u16; GROUPS] {
    let mut segments = [0u16; GROUPS];
    for (i, segment) in segments.iter_mut().enumerate() {
        *segment = (value >> (16 * (GROUPS - 1 - i))) as u16;
    }
    segments
}

/// Start and length of the longest run of zero groups, leftmost on ties.
fn longest_zero_run(segments: &[u16]) -> (usize, usize) {
    let mut longest = (0, 0);
    let mut current = (0, 0);
    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current.1 == 0 {
                current.0 = i;
            }
            current.1 += 1;
            if current.1 > longest.1 {
                longest = current;
            }
        } else {
            current = (0, 0);
        }
    }
    longest
}

fn join_hex(segments: &[u16]) -> String {
    segments.iter().map(|s| format!("{s:x}")).join(":")
}

impl AddressFamily for V6 {
    const BITS: u8 = 128;
    const FAMILY: Family = Family::V6;
    const RESERVES_HOST_EXTREMES: bool = false;

    fn parse_bits(text: &str) -> Result<u128, AddressError> {
        let malformed = || AddressError::MalformedAddressFormat {
            family: Family::V6,
            text: text.to_string(),
        };

        let groups = match text.split_once("::") {
            Some((head, tail)) => {
                if tail.contains("::") {
                    return Err(malformed());
                }
                let mut groups = parse_groups(head).ok_or_else(malformed)?;
                let tail = parse_groups(tail).ok_or_else(malformed)?;
                // `::` stands for at least one zero group
                if groups.len() + tail.len() >= GROUPS {
                    return Err(malformed());
                }
                groups.resize(GROUPS - tail.len(), 0);
                groups.extend(tail);
                groups
            }
            None => {
                let groups = parse_groups(text).ok_or_else(malformed)?;
                if groups.len() != GROUPS {
                    return Err(malformed());
                }
                groups
            }
        };

        Ok(groups
            .iter()
            .fold(0u128, |acc, group| (acc << 16) | u128::from(*group)))
    }

    fn format(value: u128) -> String {
        let segments = segments(value);
        let (start, len) = longest_zero_run(&segments);
        if len > 1 {
            format!(
                "{}::{}",
                join_hex(&segments[..start]),
                join_hex(&segments[start + len..])
            )
        } else {
            join_hex(&segments)
        }
    }

    fn format_full(value: u128) -> String {
        segments(value).iter().map(|s| format!("{s:04x}")).join(":")
    }
}
