//! IPv6 colon-hex parsing and canonical shortened formatting.

use crate::error::AddrError;
use crate::models::AddressFamily;
use std::net::Ipv6Addr;
use std::str::FromStr;

const GROUPS: usize = 8;

/// Parse an IPv6 literal into its numeric value.
///
/// Accepts `::` zero compression and an embedded dotted-quad tail
/// (`::ffff:192.168.0.1`). Plain IPv4 literals are rejected.
///
/// # Examples
/// ```
/// use ipnum::codec::parse_v6;
/// assert_eq!(parse_v6("::").unwrap(), 0);
/// assert_eq!(parse_v6("::ffff:192.168.0.1").unwrap(), 281473913978881);
/// assert!(parse_v6("174.26.72.88").is_err());
/// ```
pub fn parse_v6(text: &str) -> Result<u128, AddrError> {
    let addr = Ipv6Addr::from_str(text).map_err(|_| {
        log::debug!("parse_v6 rejected {text:?}");
        AddrError::malformed(text, AddressFamily::V6)
    })?;
    Ok(u128::from(addr))
}

/// Split a 128-bit value into eight big-endian 16-bit groups.
fn groups(addr: u128) -> [u16; GROUPS] {
    let mut out = [0u16; GROUPS];
    for (i, g) in out.iter_mut().enumerate() {
        *g = (addr >> (112 - 16 * i)) as u16;
    }
    out
}

/// Leftmost longest run of zero groups as `(start, len)`.
///
/// A run of a single zero group counts.
fn longest_zero_run(groups: &[u16; GROUPS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < GROUPS {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < GROUPS && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}

fn join_hex(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Render a numeric IPv6 address in canonical shortened form.
///
/// The leftmost longest run of zero groups becomes `::`, every other group
/// is lowercase hex without leading zeros.
///
/// # Examples
/// ```
/// use ipnum::codec::format_v6;
/// assert_eq!(format_v6(0x123400000000000000000000000000ff), "1234::ff");
/// assert_eq!(format_v6(0xffff000000000dead00000beef000000), "ffff::dea:d000:be:ef00:0");
/// ```
pub fn format_v6(addr: u128) -> String {
    let groups = groups(addr);
    match longest_zero_run(&groups) {
        Some((start, len)) => {
            let head = join_hex(&groups[..start]);
            let tail = join_hex(&groups[start + len..]);
            format!("{head}::{tail}")
        }
        None => join_hex(&groups),
    }
}
