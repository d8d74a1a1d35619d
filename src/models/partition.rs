//! Network and host boundary derivation.
//!
//! Splits an [`Address`] at its prefix length and derives the addresses at
//! either end of the network.

use super::family::{low_bits, shr, AddressFamily};
use super::{Address, Ipv4};
use crate::error::AddressError;
use std::fmt;

/// Position of an address within its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Host bits all zero, in a family that reserves it.
    Network,
    /// An ordinary host address.
    Host,
    /// Host bits all one, in a family that reserves it.
    Broadcast,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Network => f.write_str("network"),
            AddressKind::Host => f.write_str("host"),
            AddressKind::Broadcast => f.write_str("broadcast"),
        }
    }
}

impl<F: AddressFamily> Address<F> {
    /// Whether the network has distinct network and broadcast addresses.
    ///
    /// Always true for families without reserved host values; IPv4 needs
    /// at least two host bits.
    pub fn has_boundaries(&self) -> bool {
        !F::RESERVES_HOST_EXTREMES || self.host_len() >= 2
    }

    fn check_boundaries(&self) -> Result<(), AddressError> {
        if self.has_boundaries() {
            Ok(())
        } else {
            Err(AddressError::UndefinedNetworkBoundary {
                mask: self.prefix_len(),
            })
        }
    }

    /// Host bits forced to zero, prefix length unchanged.
    ///
    /// Fails with [`AddressError::UndefinedNetworkBoundary`] for IPv4 /31 and /32.
    pub fn network_address(&self) -> Result<Self, AddressError> {
        self.check_boundaries()?;
        Ok(Self::from_parts(self.value() & self.netmask(), self.prefix_len()))
    }

    /// Host bits forced to one. No reserved-host check.
    pub fn last_address(&self) -> Self {
        let host_mask = low_bits(u32::from(self.host_len()));
        Self::from_parts(self.value() | host_mask, self.prefix_len())
    }

    /// Whether `other` lies in this address's network.
    pub fn contains(&self, other: &Self) -> bool {
        shr(other.value(), u32::from(self.host_len())) == self.network_bits()
    }

    /// Number of addresses in the network; `None` when it exceeds `u128`.
    pub fn size(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.host_len()))
    }

    /// Classify this address within its own network.
    pub fn kind(&self) -> AddressKind {
        if !self.has_boundaries() {
            return AddressKind::Host;
        }
        let host = self.host_bits();
        if host == 0 {
            AddressKind::Network
        } else if host == low_bits(u32::from(self.host_len())) {
            AddressKind::Broadcast
        } else {
            AddressKind::Host
        }
    }
}

impl Ipv4 {
    /// Host bits forced to one, prefix length unchanged.
    ///
    /// Fails with [`AddressError::UndefinedNetworkBoundary`] for /31 and /32.
    pub fn broadcast_address(&self) -> Result<Ipv4, AddressError> {
        self.check_boundaries()?;
        Ok(self.last_address())
    }
}
