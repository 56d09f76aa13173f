//! Address family detection.
//!
//! [`detect_address`] tries IPv4 first and falls back to IPv6 when the caller
//! does not know the family. [`parse_as`] enforces a family the caller does know.

use crate::codec::{parse_v4, parse_v6};
use crate::error::AddrError;
use crate::models::{AddressFamily, ParsedAddress};

/// Parse `text` as whichever family it belongs to.
///
/// IPv4 wins when the text is a valid dotted quad. When neither family
/// accepts it, the IPv6 error is returned.
///
/// # Examples
/// ```
/// use ipnum::{detect_address, ParsedAddress};
/// assert_eq!(detect_address("1.2.3.4").unwrap(), ParsedAddress::V4(16909060));
/// assert!(detect_address("dead::beef").unwrap().is_ipv6());
/// ```
pub fn detect_address(text: &str) -> Result<ParsedAddress, AddrError> {
    match parse_v4(text) {
        Ok(v) => Ok(ParsedAddress::V4(v)),
        Err(_) => {
            log::debug!("{text:?} is not IPv4, trying IPv6");
            parse_v6(text).map(ParsedAddress::V6)
        }
    }
}

/// Parse `text` as the given family and return the bare numeric value,
/// widened to 128 bits for IPv4.
///
/// Fails with [`AddrError::FamilyMismatch`] when the text is a valid address
/// of the other family, and with [`AddrError::MalformedAddress`] otherwise.
pub fn parse_as(text: &str, family: AddressFamily) -> Result<u128, AddrError> {
    let parsed = match family {
        AddressFamily::V4 => parse_v4(text).map(u128::from),
        AddressFamily::V6 => parse_v6(text),
    };
    parsed.map_err(|e| {
        let other = family.other();
        let is_other = match other {
            AddressFamily::V4 => parse_v4(text).is_ok(),
            AddressFamily::V6 => parse_v6(text).is_ok(),
        };
        if is_other {
            log::debug!("{text:?} is {other}, expected {family}");
            AddrError::FamilyMismatch {
                input: text.to_string(),
                expected: family,
                found: other,
            }
        } else {
            e
        }
    })
}

/// [`parse_as`] for IPv4, keeping the 32-bit type.
pub fn parse_as_v4(text: &str) -> Result<u32, AddrError> {
    parse_as(text, AddressFamily::V4).map(|v| v as u32)
}

/// [`parse_as`] for IPv6.
pub fn parse_as_v6(text: &str) -> Result<u128, AddrError> {
    parse_as(text, AddressFamily::V6)
}
