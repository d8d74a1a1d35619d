//! Command dispatch for the command-line tool.
//!
//! Each command picks the address family from its input text and renders
//! its result as a text block.

use crate::cli::{Command, ListArgs};
use crate::input::{collect_inputs, parse_all};
use crate::models::{Address, AddressFamily, Family, Ipv6, V4, V6};
use crate::output::{render_info, render_list};
use crate::processing::{
    find_duplicates, missing_addresses, missing_prefixes, next_addresses, next_prefixes,
};
use std::error::Error;

fn info<F: AddressFamily>(cidr: &str) -> Result<String, Box<dyn Error>> {
    Ok(render_info(&Address::<F>::parse(cidr)?))
}

fn next<F: AddressFamily>(cidr: &str, count: usize, strict: bool) -> Result<String, Box<dyn Error>> {
    let base = Address::<F>::parse(cidr)?;
    let next = next_addresses(&base, count, strict)?;
    if next.len() < count {
        log::info!("{} has room for only {} of {count} addresses", base.cidr(), next.len());
    }
    Ok(render_list(&format!("after {}", base.cidr()), &next))
}

fn missing<F: AddressFamily>(inputs: &[String]) -> Result<String, Box<dyn Error>> {
    let addresses = parse_all::<F>(inputs)?;
    Ok(render_list("missing", &missing_addresses(&addresses)?))
}

fn duplicates<F: AddressFamily>(inputs: &[String]) -> Result<String, Box<dyn Error>> {
    let addresses = parse_all::<F>(inputs)?;
    Ok(render_list("duplicates", &find_duplicates(&addresses)))
}

/// Family of a list, taken from its first element.
fn list_family(inputs: &[String]) -> Family {
    inputs.first().map_or(Family::V4, |text| Family::of(text))
}

fn read_list(list: &ListArgs) -> Result<(Family, Vec<String>), Box<dyn Error>> {
    let inputs = collect_inputs(list)?;
    log::debug!("{} addresses in list", inputs.len());
    Ok((list_family(&inputs), inputs))
}

/// Run one command and return its rendered output.
///
/// # Returns
/// * `Ok(String)` - Text to print
/// * `Err` - Bad input, unreadable list file, or a failed address operation
pub fn run(command: &Command) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Info { cidr } => match Family::of(cidr) {
            Family::V4 => info::<V4>(cidr),
            Family::V6 => info::<V6>(cidr),
        },
        Command::Next {
            cidr,
            count,
            strict,
        } => match Family::of(cidr) {
            Family::V4 => next::<V4>(cidr, *count, *strict),
            Family::V6 => next::<V6>(cidr, *count, *strict),
        },
        Command::NextPrefixes {
            cidr,
            upper,
            count,
            strict,
        } => {
            let base = Ipv6::parse(cidr)?;
            let prefixes = next_prefixes(&base, *upper, *count, *strict)?;
            Ok(render_list(&format!("after {}", base.cidr()), &prefixes))
        }
        Command::Missing { list } => match read_list(list)? {
            (Family::V4, inputs) => missing::<V4>(&inputs),
            (Family::V6, inputs) => missing::<V6>(&inputs),
        },
        Command::MissingPrefixes { upper, list } => {
            let (_, inputs) = read_list(list)?;
            let prefixes = parse_all::<V6>(&inputs)?;
            Ok(render_list("missing", &missing_prefixes(&prefixes, *upper)?))
        }
        Command::Duplicates { list } => match read_list(list)? {
            (Family::V4, inputs) => duplicates::<V4>(&inputs),
            (Family::V6, inputs) => duplicates::<V6>(&inputs),
        },
    }
}
