//! IPv4 dotted-quad parsing and formatting.

use crate::error::AddrError;
use crate::models::AddressFamily;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Parse a strict dotted-quad IPv4 literal into its numeric value.
///
/// Exactly four decimal octets, each 0-255, without leading zeros or
/// surrounding whitespace. IPv6 forms are rejected, including ones that
/// embed a dotted quad.
///
/// # Examples
/// ```
/// use ipnum::codec::parse_v4;
/// assert_eq!(parse_v4("174.26.72.88").unwrap(), 2920958040);
/// assert!(parse_v4("999.999.999.999").is_err());
/// ```
pub fn parse_v4(text: &str) -> Result<u32, AddrError> {
    let addr = Ipv4Addr::from_str(text).map_err(|_| {
        log::debug!("parse_v4 rejected {text:?}");
        AddrError::malformed(text, AddressFamily::V4)
    })?;
    Ok(u32::from(addr))
}

/// Render a numeric IPv4 address as four decimal octets joined by `.`.
pub fn format_v4(addr: u32) -> String {
    let [a, b, c, d] = addr.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}
