//! Reconciling address lists against the range they should cover.
//!
//! Finds duplicated entries and, after checking that every entry shares one
//! network, the entries missing between the lowest and highest element.

use super::walker::AddressWalk;
use crate::error::AddressError;
use crate::models::{low_bits, shr, Address, AddressFamily, Ipv6};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};

/// Every value that occurs more than once in `addresses`.
///
/// # Examples
/// ```
/// use ip_subnet_calc::{find_duplicates, Ipv4};
/// let list: Vec<Ipv4> = ["10.0.0.1", "10.0.0.2", "10.0.0.1"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let dups = find_duplicates(&list);
/// assert_eq!(dups.len(), 1);
/// assert!(dups.contains(&"10.0.0.1".parse().unwrap()));
/// ```
pub fn find_duplicates<F: AddressFamily>(addresses: &[Address<F>]) -> BTreeSet<Address<F>> {
    addresses
        .iter()
        .copied()
        .counts()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(address, _)| address)
        .collect()
}

fn first_of_pair<F>(addresses: &[Address<F>]) -> Result<&Address<F>, AddressError> {
    match addresses {
        [first, _, ..] => Ok(first),
        _ => Err(AddressError::InsufficientElements {
            count: addresses.len(),
        }),
    }
}

/// Lowest and highest element; callers have checked there are at least two.
fn bounds<F>(addresses: &[Address<F>]) -> Result<(Address<F>, Address<F>), AddressError> {
    addresses
        .iter()
        .copied()
        .minmax()
        .into_option()
        .ok_or(AddressError::InsufficientElements {
            count: addresses.len(),
        })
}

/// Walked addresses whose `key` is not found in `present`, in walk order.
fn collect_missing<F: AddressFamily>(
    walk: impl Iterator<Item = Result<Address<F>, AddressError>>,
    present: &[Address<F>],
    key: impl Fn(&Address<F>) -> u128,
) -> Result<Vec<Address<F>>, AddressError> {
    let present: HashSet<u128> = present.iter().map(&key).collect();
    walk.filter_ok(|address| !present.contains(&key(address))).collect()
}

/// The prefix itself: network bits in place, host bits cleared.
fn prefix_key<F: AddressFamily>(address: &Address<F>) -> u128 {
    address.value() & address.netmask()
}

fn span_steps(span: u128) -> usize {
    usize::try_from(span).unwrap_or(usize::MAX)
}

/// Addresses absent from `addresses` between its lowest and highest element.
///
/// All elements must share the first element's network (same prefix length
/// and network bits). The lowest element is the walk origin and is never
/// part of the result.
pub fn missing_addresses<F: AddressFamily>(
    addresses: &[Address<F>],
) -> Result<Vec<Address<F>>, AddressError> {
    let first = first_of_pair(addresses)?;

    if let Some(stray) = addresses.iter().find(|a| {
        a.prefix_len() != first.prefix_len() || a.network_bits() != first.network_bits()
    }) {
        log::warn!("{} is outside {}", stray.cidr(), first.cidr());
        return Err(AddressError::NetworkMismatch {
            address: stray.to_string(),
            network: first.cidr(),
        });
    }

    let (lo, hi) = bounds(addresses)?;
    let span = hi.host_bits() - lo.host_bits();
    log::debug!("walking {span} addresses from {} to {}", lo.cidr(), hi);

    let walk = AddressWalk::hosts(lo, span_steps(span), false);
    let missing = collect_missing(walk, addresses, Address::value)?;
    log::debug!("{} of {span} addresses missing", missing.len());
    Ok(missing)
}

/// Network bits between `upper_boundary` and the prefix length.
fn lower_network(prefix: &Ipv6, upper_boundary: u8) -> u128 {
    let width = prefix.prefix_len().saturating_sub(upper_boundary);
    prefix.network_bits() & low_bits(u32::from(width))
}

/// Sibling prefixes absent from `prefixes` between its lowest and highest element.
///
/// Every prefix must share the first one's bits above `upper_boundary`, and
/// `upper_boundary` must be below every prefix length. Prefixes are matched
/// on their network bits only, and the missing ones come back with their
/// host bits cleared.
pub fn missing_prefixes(prefixes: &[Ipv6], upper_boundary: u8) -> Result<Vec<Ipv6>, AddressError> {
    let first = first_of_pair(prefixes)?;
    let upper_shift = u32::from(128 - upper_boundary.min(128));
    let upper_network = shr(first.value(), upper_shift);

    for prefix in prefixes {
        if shr(prefix.value(), upper_shift) != upper_network {
            log::warn!("{} is outside {first}/{upper_boundary}", prefix.cidr());
            return Err(AddressError::NetworkMismatch {
                address: prefix.to_string(),
                network: format!("{first}/{upper_boundary}"),
            });
        }
        if upper_boundary >= prefix.prefix_len() {
            return Err(AddressError::MaskOutOfRange {
                mask: upper_boundary,
                reason: format!(
                    "upper boundary /{upper_boundary} must be below the /{} of {prefix}",
                    prefix.prefix_len()
                ),
            });
        }
    }

    let (lo, hi) = bounds(prefixes)?;
    let span = lower_network(&hi, upper_boundary).saturating_sub(lower_network(&lo, upper_boundary));
    log::debug!("walking {span} prefixes from {} to {}", lo.cidr(), hi.cidr());

    let missing = match AddressWalk::prefixes(lo, upper_boundary, span_steps(span), false) {
        Some(walk) => collect_missing(walk, prefixes, prefix_key)?,
        None => Vec::new(),
    };
    Ok(missing
        .into_iter()
        .map(|prefix| Address::from_parts(prefix_key(&prefix), prefix.prefix_len()))
        .collect())
}
