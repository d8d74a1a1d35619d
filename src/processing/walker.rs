//! Walking successive addresses and sibling prefixes.
//!
//! A walk increments one segment of the address (the host segment, or for
//! IPv6 the lower part of the network segment) and leaves every other bit
//! alone. When the segment cannot be incremented any further the walk is
//! exhausted: strict walks report [`AddressError::AddressSpaceExhausted`],
//! lenient walks just end.

use crate::error::AddressError;
use crate::models::{low_bits, shr, Address, AddressFamily, Ipv6, V6};
use std::fmt;
use std::iter::FusedIterator;

/// Highest upper boundary accepted by a prefix walk.
pub const MAX_UPPER_BOUNDARY: u8 = 63;

/// Lazy, restartable (via `Clone`) walk over successive addresses.
///
/// Yields at most `count` addresses, strictly increasing, never the base
/// itself. A strict walk yields one `Err` at exhaustion and then stops.
#[derive(Clone)]
pub struct AddressWalk<F> {
    current: Address<F>,
    shift: u32,
    width: u32,
    reserve_extremes: bool,
    remaining: usize,
    strict: bool,
    finished: bool,
}

impl<F: AddressFamily> AddressWalk<F> {
    /// Walk the host segment of `base`.
    ///
    /// Families with reserved host values (IPv4) also stop before the
    /// all-zeros or all-ones host value.
    pub fn hosts(base: Address<F>, count: usize, strict: bool) -> Self {
        AddressWalk {
            current: base,
            shift: 0,
            width: u32::from(base.host_len()),
            reserve_extremes: F::RESERVES_HOST_EXTREMES,
            remaining: count,
            strict,
            finished: false,
        }
    }

    /// The value that follows `current`, or `None` once the segment is exhausted.
    fn step(&self) -> Option<Address<F>> {
        let max = low_bits(self.width);
        let segment = shr(self.current.value(), self.shift) & max;
        let next = segment.checked_add(1).filter(|next| *next <= max)?;
        if self.reserve_extremes && (next == 0 || next == max) {
            return None;
        }
        let cleared = self.current.value() & !(max << self.shift);
        Some(Address::from_parts(
            cleared | (next << self.shift),
            self.current.prefix_len(),
        ))
    }
}

impl AddressWalk<V6> {
    /// Walk sibling prefixes of `base`: the network bits between
    /// `upper_boundary` and the prefix length are incremented, the bits
    /// above it and the host bits are kept.
    ///
    /// Returns `None` when `upper_boundary` exceeds [`MAX_UPPER_BOUNDARY`]
    /// or the prefix length of `base`.
    pub fn prefixes(base: Ipv6, upper_boundary: u8, count: usize, strict: bool) -> Option<Self> {
        if upper_boundary > MAX_UPPER_BOUNDARY || upper_boundary > base.prefix_len() {
            return None;
        }
        Some(AddressWalk {
            current: base,
            shift: u32::from(base.host_len()),
            width: u32::from(base.prefix_len() - upper_boundary),
            reserve_extremes: false,
            remaining: count,
            strict,
            finished: false,
        })
    }
}

impl<F: AddressFamily> Iterator for AddressWalk<F> {
    type Item = Result<Address<F>, AddressError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.remaining == 0 {
            return None;
        }
        match self.step() {
            Some(next) => {
                self.current = next;
                self.remaining -= 1;
                Some(Ok(next))
            }
            None => {
                self.finished = true;
                log::debug!(
                    "walk exhausted after {} ({} bit segment, {} steps left, strict={})",
                    self.current.cidr(),
                    self.width,
                    self.remaining,
                    self.strict
                );
                if self.strict {
                    Some(Err(AddressError::AddressSpaceExhausted {
                        last: self.current.cidr(),
                        bits: self.width as u8,
                    }))
                } else {
                    None
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}

impl<F: AddressFamily> fmt::Debug for AddressWalk<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressWalk")
            .field("current", &self.current)
            .field("shift", &self.shift)
            .field("width", &self.width)
            .field("remaining", &self.remaining)
            .field("strict", &self.strict)
            .field("finished", &self.finished)
            .finish()
    }
}

impl<F: AddressFamily> FusedIterator for AddressWalk<F> {}

/// Up to `count` addresses following `base` in its host segment.
///
/// In strict mode running out of host values fails with
/// [`AddressError::AddressSpaceExhausted`]; otherwise the addresses found
/// so far are returned.
///
/// # Examples
/// ```
/// use ip_subnet_calc::{next_addresses, Ipv4};
/// let base = Ipv4::parse("10.0.0.1/30").unwrap();
/// let next = next_addresses(&base, 5, false).unwrap();
/// assert_eq!(next.len(), 1);
/// assert!(next_addresses(&base, 5, true).is_err());
/// ```
pub fn next_addresses<F: AddressFamily>(
    base: &Address<F>,
    count: usize,
    strict: bool,
) -> Result<Vec<Address<F>>, AddressError> {
    AddressWalk::hosts(*base, count, strict).collect()
}

/// Up to `count` sibling prefixes following `base` below `upper_boundary`.
///
/// An `upper_boundary` above 63 or above the prefix length of `base` gives
/// an empty result.
pub fn next_prefixes(
    base: &Ipv6,
    upper_boundary: u8,
    count: usize,
    strict: bool,
) -> Result<Vec<Ipv6>, AddressError> {
    match AddressWalk::prefixes(*base, upper_boundary, count, strict) {
        Some(walk) => walk.collect(),
        None => {
            log::debug!(
                "upper boundary /{upper_boundary} not usable for {}, no prefixes",
                base.cidr()
            );
            Ok(Vec::new())
        }
    }
}
