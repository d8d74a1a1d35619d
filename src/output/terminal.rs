//! Terminal output utilities.
//!
//! Renders addresses and address lists as text blocks for the command-line
//! tool. Headings are coloured; the caller prints the result.

use crate::models::{Address, AddressFamily, Family};
use colored::Colorize;

/// Width of the label column in [`render_info`].
const LABEL_WIDTH: usize = 9;

/// Format a label as a right-aligned, coloured column followed by `value`.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to show after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label:>width$}");
    format!("{}: {}", label.cyan(), value.to_string())
}

/// Describe one address: its text forms, network boundaries, class and size.
pub fn render_info<F: AddressFamily>(address: &Address<F>) -> String {
    let network = match address.network_address() {
        Ok(network) => network.cidr(),
        Err(e) => format!("none ({e})"),
    };
    let (last_label, last) = match F::FAMILY {
        Family::V4 if address.has_boundaries() => ("broadcast", address.last_address().cidr()),
        Family::V4 => ("broadcast", "none".to_string()),
        Family::V6 => ("last", address.last_address().cidr()),
    };
    let size = address
        .size()
        .map(|size| size.to_string())
        .unwrap_or_else(|| format!("2^{}", address.host_len()));

    [
        format_field("family", address.family(), LABEL_WIDTH),
        format_field("address", address.cidr(), LABEL_WIDTH),
        format_field("full", address.full(), LABEL_WIDTH),
        format_field("network", network, LABEL_WIDTH),
        format_field(last_label, last, LABEL_WIDTH),
        format_field("kind", address.kind(), LABEL_WIDTH),
        format_field("size", size, LABEL_WIDTH),
    ]
    .join("\n")
}

/// A heading with the element count followed by one address per line.
pub fn render_list<'a, F, I>(title: &str, addresses: I) -> String
where
    F: AddressFamily,
    I: IntoIterator<Item = &'a Address<F>>,
{
    let lines: Vec<String> = addresses
        .into_iter()
        .map(|address| format!("  {}", address.cidr()))
        .collect();
    let heading = format!("{title} ({}):", lines.len()).bold();
    if lines.is_empty() {
        format!("{heading}\n  none")
    } else {
        format!("{heading}\n{}", lines.join("\n"))
    }
}
