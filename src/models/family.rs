//! Address family and the tagged result of family auto-detection.

use crate::codec::{format_v4, format_v6};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Width of an IPv4 address in bits.
pub const V4_BITS: u8 = 32;
/// Width of an IPv6 address in bits.
pub const V6_BITS: u8 = 128;

/// IP address family.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

impl AddressFamily {
    /// Address width in bits (32 or 128).
    pub fn bits(self) -> u8 {
        match self {
            AddressFamily::V4 => V4_BITS,
            AddressFamily::V6 => V6_BITS,
        }
    }

    /// The other family, used when reporting a family mismatch.
    pub fn other(self) -> AddressFamily {
        match self {
            AddressFamily::V4 => AddressFamily::V6,
            AddressFamily::V6 => AddressFamily::V4,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(AddressFamily::V4),
            "6" | "v6" | "ipv6" => Ok(AddressFamily::V6),
            _ => Err(format!("Unknown address family: {s}")),
        }
    }
}

/// Numeric address tagged with the family it was parsed as.
///
/// IPv6 values serialize as decimal strings; JSON numbers past 64 bits do not
/// survive every deserializer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "family", content = "value")]
pub enum ParsedAddress {
    #[serde(rename = "ipv4")]
    V4(u32),
    #[serde(rename = "ipv6")]
    V6(#[serde(with = "u128_decimal")] u128),
}

mod u128_decimal {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = u128;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an unsigned 128-bit integer or its decimal string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
            Ok(u128::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
            v.parse::<u128>()
                .map_err(|e| E::custom(format!("invalid u128 {v:?}: {e}")))
        }
    }
}

impl ParsedAddress {
    pub fn family(&self) -> AddressFamily {
        match self {
            ParsedAddress::V4(_) => AddressFamily::V4,
            ParsedAddress::V6(_) => AddressFamily::V6,
        }
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, ParsedAddress::V6(_))
    }

    /// Numeric value widened to 128 bits.
    pub fn as_u128(&self) -> u128 {
        match *self {
            ParsedAddress::V4(v) => u128::from(v),
            ParsedAddress::V6(v) => v,
        }
    }
}

/// Render a parsed address with the formatter for its family.
pub fn format_address(addr: &ParsedAddress) -> String {
    match *addr {
        ParsedAddress::V4(v) => format_v4(v),
        ParsedAddress::V6(v) => format_v6(v),
    }
}

impl std::fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", format_address(self))
    }
}
