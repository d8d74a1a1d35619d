//! Generic IP address value with a prefix length.
//!
//! Provides [`Address`] for either family, with the [`Ipv4`] and [`Ipv6`]
//! aliases. An address is an immutable value: every "mutation" returns a
//! new address.

use super::family::{low_bits, shr, AddressFamily, Family};
use super::{V4, V6};
use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IPv4 address with a prefix length.
pub type Ipv4 = Address<V4>;
/// IPv6 address with a prefix length.
pub type Ipv6 = Address<V6>;

/// An address of family `F` together with its declared prefix length.
///
/// Equality, hashing and ordering only look at the numeric value; the
/// prefix length is context carried along for network/host derivations.
pub struct Address<F> {
    value: u128,
    prefix_len: u8,
    family: PhantomData<F>,
}

fn check_prefix_len<F: AddressFamily>(prefix_len: u8) -> Result<(), AddressError> {
    if prefix_len > F::BITS {
        Err(AddressError::MaskOutOfRange {
            mask: prefix_len,
            reason: format!("/{prefix_len} is past the {} maximum of /{}", F::FAMILY, F::BITS),
        })
    } else {
        Ok(())
    }
}

impl<F: AddressFamily> Address<F> {
    /// Parse `addr` or `addr/len`. Without a length the prefix covers the
    /// whole address.
    ///
    /// # Examples
    /// ```
    /// use ip_subnet_calc::Ipv4;
    /// let ip = Ipv4::parse("10.0.0.1/24").unwrap();
    /// assert_eq!(ip.prefix_len(), 24);
    /// assert_eq!(ip.to_string(), "10.0.0.1");
    /// ```
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let text = text.trim();
        match text.split_once('/') {
            Some((addr, mask)) => {
                let value = F::parse_bits(addr)?;
                if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(AddressError::MalformedAddressFormat {
                        family: F::FAMILY,
                        text: text.to_string(),
                    });
                }
                let mask: u8 = mask.parse().map_err(|_| AddressError::MaskOutOfRange {
                    mask: u8::MAX,
                    reason: format!("/{mask} is past the {} maximum of /{}", F::FAMILY, F::BITS),
                })?;
                Self::from_bits(value, mask)
            }
            None => Self::from_bits(F::parse_bits(text)?, F::BITS),
        }
    }

    /// Build an address from its raw numeric value.
    pub fn from_bits(value: u128, prefix_len: u8) -> Result<Self, AddressError> {
        if shr(value, u32::from(F::BITS)) != 0 {
            return Err(AddressError::ValueOutOfRange {
                value,
                bits: F::BITS,
            });
        }
        check_prefix_len::<F>(prefix_len)?;
        Ok(Self::from_parts(value, prefix_len))
    }

    /// Caller guarantees `value` fits the family width and `prefix_len <= F::BITS`.
    pub(crate) fn from_parts(value: u128, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= F::BITS);
        Address {
            value,
            prefix_len,
            family: PhantomData,
        }
    }

    /// Numeric value, most significant bit first.
    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Width of the host segment.
    pub fn host_len(&self) -> u8 {
        F::BITS - self.prefix_len
    }

    pub fn bit_width(&self) -> u8 {
        F::BITS
    }

    pub fn family(&self) -> Family {
        F::FAMILY
    }

    /// Same value under a different prefix length.
    pub fn with_prefix_len(&self, prefix_len: u8) -> Result<Self, AddressError> {
        check_prefix_len::<F>(prefix_len)?;
        Ok(Self::from_parts(self.value, prefix_len))
    }

    /// The top `prefix_len` bits, right aligned.
    pub fn network_bits(&self) -> u128 {
        shr(self.value, u32::from(self.host_len()))
    }

    /// The low `host_len` bits.
    pub fn host_bits(&self) -> u128 {
        self.value & low_bits(u32::from(self.host_len()))
    }

    /// Mask with the network bits set.
    pub fn netmask(&self) -> u128 {
        low_bits(u32::from(F::BITS)) & !low_bits(u32::from(self.host_len()))
    }

    /// Replace the host segment, e.g. with a 48 bit hardware identifier.
    pub fn with_host_bits(&self, host: u128) -> Result<Self, AddressError> {
        let host_len = self.host_len();
        if host & !low_bits(u32::from(host_len)) != 0 {
            return Err(AddressError::ValueOutOfRange {
                value: host,
                bits: host_len,
            });
        }
        Ok(Self::from_parts(
            (self.value & self.netmask()) | host,
            self.prefix_len,
        ))
    }

    /// `addr/len` text.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self, self.prefix_len)
    }

    /// Non-abbreviated text (all IPv6 groups zero padded).
    pub fn full(&self) -> String {
        F::format_full(self.value)
    }
}

impl<F> Clone for Address<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Address<F> {}

impl<F> PartialEq for Address<F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F> Eq for Address<F> {}

impl<F> Hash for Address<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F> PartialOrd for Address<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F> Ord for Address<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<F: AddressFamily> fmt::Display for Address<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&F::format(self.value))
    }
}

impl<F: AddressFamily> fmt::Debug for Address<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", F::FAMILY, self.cidr())
    }
}

impl<F: AddressFamily> FromStr for Address<F> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Ipv4Addr> for Ipv4 {
    /// Host address: the prefix covers all 32 bits.
    fn from(addr: Ipv4Addr) -> Self {
        Address::from_parts(u128::from(u32::from(addr)), V4::BITS)
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(ip: Ipv4) -> Self {
        Ipv4Addr::from(ip.value() as u32)
    }
}

impl From<Ipv6Addr> for Ipv6 {
    /// Host address: the prefix covers all 128 bits.
    fn from(addr: Ipv6Addr) -> Self {
        Address::from_parts(u128::from(addr), V6::BITS)
    }
}

impl From<Ipv6> for Ipv6Addr {
    fn from(ip: Ipv6) -> Self {
        Ipv6Addr::from(ip.value())
    }
}

impl<F: AddressFamily> Serialize for Address<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.cidr())
    }
}

impl<'de, F: AddressFamily> Deserialize<'de> for Address<F> {
    fn deserialize<D>(deserializer: D) -> Result<Address<F>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr() {
        let ip = Ipv4::parse("192.168.1.42/24").unwrap();
        assert_eq!(ip.value(), 0xC0A8012A);
        assert_eq!(ip.prefix_len(), 24);
        assert_eq!(ip.host_len(), 8);
        assert_eq!(ip.network_bits(), 0xC0A801);
        assert_eq!(ip.host_bits(), 42);
        assert_eq!(ip.netmask(), 0xFFFFFF00);

        let ip = Ipv4::parse(" 10.0.0.1 ").unwrap();
        assert_eq!(ip.prefix_len(), 32);
        assert_eq!(ip.host_bits(), 0);

        let ip = Ipv6::parse("2001:db8::1/64").unwrap();
        assert_eq!(ip.network_bits(), 0x2001_0db8_0000_0000);
        assert_eq!(ip.host_bits(), 1);
        assert_eq!(ip.bit_width(), 128);
        assert_eq!(ip.family(), Family::V6);
    }

    #[test]
    fn test_parse_bad_mask() {
        assert!(matches!(
            Ipv4::parse("10.0.0.1/33"),
            Err(AddressError::MaskOutOfRange { mask: 33, .. })
        ));
        assert!(matches!(
            Ipv6::parse("::1/129"),
            Err(AddressError::MaskOutOfRange { mask: 129, .. })
        ));
        let err = Ipv4::parse("10.0.0.1/999").unwrap_err();
        assert!(matches!(err, AddressError::MaskOutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "mask out of range: /999 is past the IPv4 maximum of /32"
        );
        assert!(matches!(
            Ipv4::parse("10.0.0.1/"),
            Err(AddressError::MalformedAddressFormat { .. })
        ));
        assert!(matches!(
            Ipv4::parse("10.0.0.1/-1"),
            Err(AddressError::MalformedAddressFormat { .. })
        ));
    }

    #[test]
    fn test_from_bits() {
        let ip = Ipv4::from_bits(0x0A000001, 8).unwrap();
        assert_eq!(ip.to_string(), "10.0.0.1");
        assert_eq!(
            Ipv4::from_bits(1 << 32, 8).unwrap_err(),
            AddressError::ValueOutOfRange {
                value: 1 << 32,
                bits: 32
            }
        );
        assert!(Ipv6::from_bits(u128::MAX, 128).is_ok());
    }

    #[test]
    fn test_std_net_conversions() {
        let ip = Ipv4::from(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(ip.cidr(), "192.168.1.42/32");
        let subnet = Ipv4::parse("10.1.2.3/8").unwrap();
        assert_eq!(Ipv4Addr::from(subnet), Ipv4Addr::new(10, 1, 2, 3));

        let loopback = Ipv6::from(Ipv6Addr::LOCALHOST);
        assert_eq!(loopback.cidr(), "::1/128");
        let ip = Ipv6::parse("2001:db8::1/64").unwrap();
        assert_eq!(Ipv6Addr::from(ip), Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
        assert_eq!(
            Ipv6Addr::from(ip).to_string(),
            ip.to_string(),
            "canonical text agrees with std"
        );
    }

    #[test]
    fn test_with_prefix_len() {
        let ip = Ipv4::parse("10.1.2.3").unwrap();
        let ip24 = ip.with_prefix_len(24).unwrap();
        assert_eq!(ip24.prefix_len(), 24);
        assert_eq!(ip24.value(), ip.value());
        assert_eq!(ip.prefix_len(), 32, "original is unchanged");
        assert!(matches!(
            ip.with_prefix_len(33),
            Err(AddressError::MaskOutOfRange { mask: 33, .. })
        ));
        assert!(Ipv6::parse("::").unwrap().with_prefix_len(128).is_ok());
    }

    #[test]
    fn test_with_host_bits() {
        let prefix = Ipv6::parse("fe80::/80").unwrap();
        let mac = 0x0011_2233_4455u128;
        let link = prefix.with_host_bits(mac).unwrap();
        assert_eq!(link.to_string(), "fe80::11:2233:4455");
        assert_eq!(link.prefix_len(), 80);

        let small = Ipv6::parse("fe80::/96").unwrap();
        assert_eq!(
            small.with_host_bits(mac).unwrap_err(),
            AddressError::ValueOutOfRange {
                value: mac,
                bits: 32
            }
        );
    }

    #[test]
    fn test_equality_ignores_prefix_len() {
        let a = Ipv4::parse("10.0.0.1/24").unwrap();
        let b = Ipv4::parse("10.0.0.1/16").unwrap();
        let c = Ipv4::parse("10.0.0.2/24").unwrap();
        assert_eq!(a, b);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn test_display_and_debug() {
        let ip = Ipv6::parse("2001:0db8:0000:0000:0000:0000:0000:0001/64").unwrap();
        assert_eq!(ip.to_string(), "2001:db8::1");
        assert_eq!(ip.cidr(), "2001:db8::1/64");
        assert_eq!(ip.full(), "2001:0db8:0000:0000:0000:0000:0000:0001");
        assert_eq!(format!("{ip:?}"), "IPv6(2001:db8::1/64)");
        assert_eq!(format!("[{:>12}]", Ipv4::parse("10.0.0.1").unwrap()), "[    10.0.0.1]");
    }

    #[test]
    fn test_from_str() {
        let ip: Ipv4 = "172.16.0.9/12".parse().unwrap();
        assert_eq!(ip.cidr(), "172.16.0.9/12");
        assert!("172.16.0.300".parse::<Ipv4>().is_err());
    }

    #[test]
    fn test_serde_cidr_string() {
        let ip = Ipv4::parse("10.0.0.1/24").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"10.0.0.1/24\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back.prefix_len(), 24);

        let list: Vec<Ipv6> = serde_json::from_str(r#"["2001:db8::1/64", "::1"]"#).unwrap();
        assert_eq!(list[1].prefix_len(), 128);

        let err = serde_json::from_str::<Ipv4>("\"10.0.0.256/24\"").unwrap_err();
        assert!(err.to_string().contains("not a valid IPv4 address"));
    }
}
