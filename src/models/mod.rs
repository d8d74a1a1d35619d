//! Address values and the arithmetic on a single address.
//!
//! - [`family`] - the [`AddressFamily`] capability set and [`Family`] tag
//! - [`v4`] / [`v6`] - per-family grammar and rendering
//! - [`address`] - the generic [`Address`] value
//! - [`partition`] - network/host boundary derivation

mod address;
mod family;
mod partition;
mod v4;
mod v6;

// Re-export public types
pub use address::{Address, Ipv4, Ipv6};
pub use family::{AddressFamily, Family};
pub(crate) use family::{low_bits, shr};
pub use partition::AddressKind;
pub use v4::V4;
pub use v6::V6;
