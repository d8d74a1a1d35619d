//! Command-line interface definition using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// IPv4/IPv6 subnet calculator
///
/// Derives network boundaries, walks addresses and prefixes, and reconciles
/// address lists against the range they should cover.
#[derive(Debug, Parser)]
#[command(name = "ip-subnet-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the log4rs configuration file
    #[arg(long = "log-config", global = true, default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

/// Subcommands. The address family is taken from the input text.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show network boundaries and classification of an address
    Info {
        /// Address in `addr` or `addr/len` form
        cidr: String,
    },

    /// List the addresses following an address within its network
    Next {
        /// Address in `addr/len` form
        cidr: String,
        /// Number of addresses to produce
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
        /// Fail instead of stopping early when the network runs out
        #[arg(long)]
        strict: bool,
    },

    /// List the sibling IPv6 prefixes following a prefix
    NextPrefixes {
        /// IPv6 prefix in `addr/len` form
        cidr: String,
        /// Prefix length above which bits are kept fixed
        #[arg(long)]
        upper: u8,
        /// Number of prefixes to produce
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
        /// Fail instead of stopping early when the range runs out
        #[arg(long)]
        strict: bool,
    },

    /// List addresses missing between the lowest and highest of a list
    Missing {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List IPv6 prefixes missing between the lowest and highest of a list
    MissingPrefixes {
        /// Prefix length above which all prefixes must agree
        #[arg(long)]
        upper: u8,
        #[command(flatten)]
        list: ListArgs,
    },

    /// List addresses that occur more than once
    Duplicates {
        #[command(flatten)]
        list: ListArgs,
    },
}

/// An address list given on the command line and/or in a JSON file.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Addresses in `addr` or `addr/len` form
    pub addresses: Vec<String>,

    /// JSON file holding an array of address strings
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next() {
        let cli = Cli::try_parse_from(["ip-subnet-calc", "next", "10.0.0.1/24", "-n", "3", "--strict"])
            .unwrap();
        match cli.command {
            Command::Next {
                cidr,
                count,
                strict,
            } => {
                assert_eq!(cidr, "10.0.0.1/24");
                assert_eq!(count, 3);
                assert!(strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_parse_missing_prefixes() {
        let cli = Cli::try_parse_from([
            "ip-subnet-calc",
            "missing-prefixes",
            "--upper",
            "48",
            "2001:db8:0:1::/64",
            "2001:db8:0:4::/64",
            "--file",
            "more.json",
            "--log-config",
            "other.yml",
        ])
        .unwrap();
        match cli.command {
            Command::MissingPrefixes { upper, list } => {
                assert_eq!(upper, 48);
                assert_eq!(list.addresses.len(), 2);
                assert_eq!(list.file, Some(PathBuf::from("more.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_config, PathBuf::from("other.yml"));
    }

    #[test]
    fn test_parse_rejects_missing_upper() {
        assert!(Cli::try_parse_from(["ip-subnet-calc", "next-prefixes", "2001:db8::/64"]).is_err());
    }
}
