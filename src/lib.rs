//! IPv4 and IPv6 address arithmetic.
//!
//! Canonical parsing and rendering for both families, network/host
//! boundary derivation, walking successive addresses and sibling prefixes,
//! and reconciling address lists (duplicates and gaps) against the network
//! they should cover.
//!
//! - [`models`] - the [`Address`] value, family codecs, boundaries
//! - [`processing`] - walking and list analysis
//! - [`output`], [`cli`], [`input`] - pieces of the command-line tool

pub mod cli;
mod commands;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use commands::run;
pub use error::AddressError;
pub use models::{Address, AddressFamily, AddressKind, Family, Ipv4, Ipv6, V4, V6};
pub use processing::{
    find_duplicates, missing_addresses, missing_prefixes, next_addresses, next_prefixes,
    AddressWalk, MAX_UPPER_BOUNDARY,
};
