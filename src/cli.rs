//! Command line front end.
//!
//! Kept in the library so the command handling can be tested; `main.rs` only
//! sets up logging and prints what [`run`] returns.

use crate::codec::{format_v4, format_v6};
use crate::detect::{detect_address, parse_as, parse_as_v4, parse_as_v6};
use crate::models::{AddressFamily, ParsedAddress};
use crate::network::Network;
use crate::output::{to_json, to_row, Report};
use crate::range::{ipv4_range, ipv6_range};
use clap::{Parser, Subcommand};
use std::error::Error;

/// Convert IP addresses between text and numbers, and expand prefixes to ranges.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Highlight the address family in plain output
    #[arg(long, global = true)]
    pub color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an address into its numeric value
    Parse {
        address: String,
        /// Enforce a family (4/6); prints the bare number
        #[arg(short, long)]
        family: Option<AddressFamily>,
    },
    /// Format a number (decimal or 0x hex) as an address
    Format {
        number: String,
        #[arg(short, long)]
        family: AddressFamily,
    },
    /// First and last address of ADDRESS/PREFIX_LEN
    Range {
        address: String,
        prefix_len: u32,
        #[arg(short, long)]
        family: Option<AddressFamily>,
    },
    /// Check whether ADDRESS lies within NETWORK/PREFIX_LEN
    Contains {
        network: String,
        prefix_len: u32,
        /// Must be of the same family as NETWORK
        address: String,
    },
}

/// Parse a decimal or `0x` prefixed hexadecimal number.
pub fn parse_number(text: &str) -> Result<u128, Box<dyn Error>> {
    let text = text.trim();
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => text.parse::<u128>(),
    };
    parsed.map_err(|e| format!("Invalid number {text}: {e}").into())
}

fn parse_address(
    text: &str,
    family: Option<AddressFamily>,
) -> Result<ParsedAddress, Box<dyn Error>> {
    let address = match family {
        None => detect_address(text)?,
        Some(AddressFamily::V4) => ParsedAddress::V4(parse_as_v4(text)?),
        Some(AddressFamily::V6) => ParsedAddress::V6(parse_as_v6(text)?),
    };
    Ok(address)
}

/// Execute a command and build its [`Report`].
pub fn execute(command: &Command) -> Result<Report, Box<dyn Error>> {
    log::debug!("execute({command:?})");
    let report = match command {
        Command::Parse {
            address,
            family: None,
        } => Report::Detected {
            address: detect_address(address)?,
        },
        Command::Parse {
            address,
            family: Some(family),
        } => Report::Value {
            family: *family,
            value: parse_as(address, *family)?,
        },
        Command::Format { number, family } => {
            let value = parse_number(number)?;
            let text = match family {
                AddressFamily::V4 => {
                    let v4 = u32::try_from(value)
                        .map_err(|_| format!("Number {value} does not fit in 32 bits"))?;
                    format_v4(v4)
                }
                AddressFamily::V6 => format_v6(value),
            };
            Report::Text {
                family: *family,
                text,
            }
        }
        Command::Range {
            address,
            prefix_len,
            family,
        } => match parse_address(address, *family)? {
            ParsedAddress::V4(v) => {
                let r = ipv4_range(v, *prefix_len)?;
                Report::Range {
                    family: AddressFamily::V4,
                    prefix_len: *prefix_len,
                    start: u128::from(r.start),
                    end: u128::from(r.end),
                    start_text: format_v4(r.start),
                    end_text: format_v4(r.end),
                }
            }
            ParsedAddress::V6(v) => {
                let r = ipv6_range(v, *prefix_len)?;
                Report::Range {
                    family: AddressFamily::V6,
                    prefix_len: *prefix_len,
                    start: r.start,
                    end: r.end,
                    start_text: format_v6(r.start),
                    end_text: format_v6(r.end),
                }
            }
        },
        Command::Contains {
            network,
            prefix_len,
            address,
        } => {
            let net = Network::parse(network, *prefix_len)?;
            Report::Contains {
                family: net.family(),
                network: net.to_string(),
                address: address.clone(),
                contained: net.contains(address)?,
            }
        }
    };
    Ok(report)
}

/// Execute the parsed command line and render its output.
pub fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let report = execute(&args.command)?;
    if args.json {
        to_json(&report)
    } else {
        Ok(to_row(&report, args.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrError;

    fn run_line(line: &[&str]) -> Result<String, Box<dyn Error>> {
        let args = Args::try_parse_from(std::iter::once("ipnum").chain(line.iter().copied()))?;
        run(&args)
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("16909060").unwrap(), 16909060);
        assert_eq!(parse_number("0xac100000").unwrap(), 0xac100000);
        assert_eq!(parse_number("0XFF").unwrap(), 255);
        assert!(parse_number("0xg").is_err());
        assert!(parse_number("-1").is_err());
    }

    #[test]
    fn test_run_parse() {
        assert_eq!(run_line(&["parse", "1.2.3.4"]).unwrap(), "\"IPv4\",  \"16909060\"");
        assert_eq!(
            run_line(&["parse", "255.255.0.0", "--family", "4"]).unwrap(),
            "4294901760"
        );
        assert_eq!(
            run_line(&["parse", "ffff::ffff", "-f", "ipv6"]).unwrap(),
            "340277174624079928635746076935439056895"
        );
        assert!(run_line(&["parse", "dead::beef", "-f", "v4"]).is_err());
        assert!(run_line(&["parse", "invalid"]).is_err());
    }

    #[test]
    fn test_run_format() {
        assert_eq!(
            run_line(&["format", "0x01020304", "--family", "v4"]).unwrap(),
            "1.2.3.4"
        );
        assert_eq!(
            run_line(&["format", "0x123400000000000000000000000000ff", "-f", "6"]).unwrap(),
            "1234::ff"
        );
        assert!(run_line(&["format", "0xa1ffff0000", "-f", "4"]).is_err());
    }

    #[test]
    fn test_run_range() {
        assert_eq!(
            run_line(&["range", "172.16.0.0", "12"]).unwrap(),
            r#""IPv4", "12",     "172.16.0.0", "172.31.255.255","2886729728","2887778303""#
        );
        assert!(run_line(&["range", "172.16.0.0", "33"]).is_err());
        assert!(run_line(&["range", "::1", "129"]).is_err());
    }

    #[test]
    fn test_run_range_prefix_beyond_u8() {
        let err = run_line(&["range", "::1", "256"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AddrError>(),
            Some(&AddrError::InvalidPrefixLength {
                prefix_len: 256,
                family: AddressFamily::V6
            })
        );
    }

    #[test]
    fn test_run_contains() {
        assert_eq!(
            run_line(&["contains", "172.16.0.0", "12", "172.20.1.1"]).unwrap(),
            r#""IPv4",     "172.16.0.0/12",     "172.20.1.1", "true""#
        );
        let out = run_line(&["--json", "contains", "2001:db8::", "32", "2001:db9::1"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "contains");
        assert_eq!(value["network"], "2001:db8::/32");
        assert_eq!(value["contained"], false);
    }

    #[test]
    fn test_run_contains_family_mismatch() {
        let err = run_line(&["contains", "10.0.0.0", "8", "::a00:1"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AddrError>(),
            Some(AddrError::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn test_run_range_json() {
        let out = run_line(&["--json", "range", "fe80::1", "64"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["family"], "ipv6");
        assert_eq!(value["start_text"], "fe80::");
        assert_eq!(value["end_text"], "fe80::ffff:ffff:ffff:ffff");
    }
}
