//! Output formatting for addresses.
//!
//! - [`terminal`] - text rendering with coloured headings

mod terminal;

pub use terminal::{format_field, render_info, render_list};
