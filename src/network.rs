//! A network given as an address literal plus a prefix length.
//!
//! The family is detected from the network address once; addresses checked
//! against the network (members, gateways) are then parsed with that family.

use crate::codec::{format_v4, format_v6};
use crate::detect::{detect_address, parse_as};
use crate::error::AddrError;
use crate::models::{AddressFamily, Ipv6Range, ParsedAddress};
use crate::range::{ipv4_range, ipv6_range};

/// Network with its family, prefix length and precomputed range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    address: ParsedAddress,
    prefix_len: u32,
    // widened to 128 bits for IPv4
    range: Ipv6Range,
}

impl Network {
    /// Parse `net_text` (either family) and compute the range of `net_text/prefix_len`.
    ///
    /// # Examples
    /// ```
    /// use ipnum::network::Network;
    /// let net = Network::parse("172.16.0.0", 12).unwrap();
    /// assert_eq!(net.range_text(), ("172.16.0.0".to_string(), "172.31.255.255".to_string()));
    /// assert!(net.contains("172.20.1.1").unwrap());
    /// ```
    pub fn parse(net_text: &str, prefix_len: u32) -> Result<Network, AddrError> {
        let address = detect_address(net_text)?;
        let range = match address {
            ParsedAddress::V4(v) => {
                let r = ipv4_range(v, prefix_len)?;
                Ipv6Range {
                    start: u128::from(r.start),
                    end: u128::from(r.end),
                }
            }
            ParsedAddress::V6(v) => ipv6_range(v, prefix_len)?,
        };
        log::trace!("Network::parse({net_text}/{prefix_len}) -> {range:?}");
        Ok(Network {
            address,
            prefix_len,
            range,
        })
    }

    pub fn family(&self) -> AddressFamily {
        self.address.family()
    }

    /// The network address as given, host bits included.
    pub fn address(&self) -> ParsedAddress {
        self.address
    }

    pub fn prefix_len(&self) -> u32 {
        self.prefix_len
    }

    /// First and last address, widened to 128 bits.
    pub fn numeric_range(&self) -> Ipv6Range {
        self.range
    }

    /// First and last address in text form.
    pub fn range_text(&self) -> (String, String) {
        let Ipv6Range { start, end } = self.range;
        match self.family() {
            AddressFamily::V4 => (format_v4(start as u32), format_v4(end as u32)),
            AddressFamily::V6 => (format_v6(start), format_v6(end)),
        }
    }

    /// Parse an address that must belong to this network's family,
    /// e.g. its gateway.
    pub fn parse_member(&self, addr_text: &str) -> Result<u128, AddrError> {
        parse_as(addr_text, self.family())
    }

    /// True when `addr_text` lies within the network.
    ///
    /// An address of the other family is a [`AddrError::FamilyMismatch`],
    /// not `false`.
    pub fn contains(&self, addr_text: &str) -> Result<bool, AddrError> {
        let addr = self.parse_member(addr_text)?;
        Ok(self.range.contains(addr))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

/// Check whether `addr_text` lies within `net_text/prefix_len`.
pub fn network_contains(
    net_text: &str,
    prefix_len: u32,
    addr_text: &str,
) -> Result<bool, AddrError> {
    Network::parse(net_text, prefix_len)?.contains(addr_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v4_network() {
        let net = Network::parse("172.16.5.4", 12).unwrap();
        assert_eq!(net.family(), AddressFamily::V4);
        assert_eq!(net.prefix_len(), 12);
        assert_eq!(net.address(), ParsedAddress::V4(0xac100504));
        assert_eq!(net.numeric_range().as_tuple(), (2886729728, 2887778303));
        assert_eq!(net.to_string(), "172.16.5.4/12");
    }

    #[test]
    fn test_parse_v6_network() {
        let net = Network::parse("fe80::1", 64).unwrap();
        assert_eq!(net.family(), AddressFamily::V6);
        assert_eq!(
            net.range_text(),
            (
                "fe80::".to_string(),
                "fe80::ffff:ffff:ffff:ffff".to_string()
            )
        );
    }

    #[test]
    fn test_parse_invalid_network() {
        assert_eq!(
            Network::parse("invalid", 8).unwrap_err(),
            AddrError::malformed("invalid", AddressFamily::V6)
        );
        assert_eq!(
            Network::parse("10.0.0.0", 33).unwrap_err(),
            AddrError::InvalidPrefixLength {
                prefix_len: 33,
                family: AddressFamily::V4
            }
        );
    }

    #[test]
    fn test_contains() {
        let net = Network::parse("192.168.0.0", 24).unwrap();
        assert!(net.contains("192.168.0.0").unwrap());
        assert!(net.contains("192.168.0.255").unwrap());
        assert!(!net.contains("192.168.1.0").unwrap());
        assert!(!net.contains("10.0.0.1").unwrap());

        let net = Network::parse("2001:db8::", 32).unwrap();
        assert!(net.contains("2001:db8:ffff::1").unwrap());
        assert!(!net.contains("2001:db9::").unwrap());
    }

    #[test]
    fn test_contains_other_family() {
        let net = Network::parse("192.168.0.0", 24).unwrap();
        assert_eq!(
            net.contains("::ffff:192.168.0.1").unwrap_err(),
            AddrError::FamilyMismatch {
                input: "::ffff:192.168.0.1".to_string(),
                expected: AddressFamily::V4,
                found: AddressFamily::V6,
            }
        );
        assert!(matches!(
            network_contains("::", 0, "1.2.3.4"),
            Err(AddrError::FamilyMismatch { .. })
        ));
        assert!(matches!(
            network_contains("10.0.0.0", 8, "10.0.0.256"),
            Err(AddrError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn test_parse_member_gateway() {
        let net = Network::parse("10.0.0.0", 8).unwrap();
        assert_eq!(net.parse_member("10.0.0.1").unwrap(), 0x0a000001);
        assert!(net.parse_member("fe80::1").is_err());
        assert!(network_contains("0.0.0.0", 0, "255.255.255.255").unwrap());
    }
}
