//! Address range processing.
//!
//! - [`walker`] - walking successive addresses and sibling prefixes
//! - [`analyzer`] - duplicate and gap detection over address lists

mod analyzer;
mod walker;

// Re-export public functions
pub use analyzer::{find_duplicates, missing_addresses, missing_prefixes};
pub use walker::{next_addresses, next_prefixes, AddressWalk, MAX_UPPER_BOUNDARY};
