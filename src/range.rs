//! Network range calculation from a numeric address and prefix length.

use crate::error::AddrError;
use crate::models::{AddressFamily, Ipv4Range, Ipv6Range, V4_BITS, V6_BITS};

/// Convert an IPv4 prefix length to its network mask.
///
/// # Examples
/// ```
/// use ipnum::range::cidr_mask_v4;
/// assert_eq!(cidr_mask_v4(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(cidr_mask_v4(0).unwrap(), 0);
/// ```
pub fn cidr_mask_v4(prefix_len: u32) -> Result<u32, AddrError> {
    if prefix_len > u32::from(V4_BITS) {
        return Err(AddrError::InvalidPrefixLength {
            prefix_len,
            family: AddressFamily::V4,
        });
    }
    // shifting by the full width is not defined, /0 is an empty mask
    let host_bits = u32::from(V4_BITS) - prefix_len;
    Ok(u32::MAX.checked_shl(host_bits).unwrap_or(0))
}

/// Convert an IPv6 prefix length to its network mask.
pub fn cidr_mask_v6(prefix_len: u32) -> Result<u128, AddrError> {
    if prefix_len > u32::from(V6_BITS) {
        return Err(AddrError::InvalidPrefixLength {
            prefix_len,
            family: AddressFamily::V6,
        });
    }
    let host_bits = u32::from(V6_BITS) - prefix_len;
    Ok(u128::MAX.checked_shl(host_bits).unwrap_or(0))
}

/// First and last IPv4 address of the network `net_addr/prefix_len`.
///
/// Host bits of `net_addr` are ignored.
///
/// # Examples
/// ```
/// use ipnum::range::ipv4_range;
/// let r = ipv4_range(0xac100000, 12).unwrap();
/// assert_eq!((r.start, r.end), (2886729728, 2887778303));
/// ```
pub fn ipv4_range(net_addr: u32, prefix_len: u32) -> Result<Ipv4Range, AddrError> {
    let mask = cidr_mask_v4(prefix_len)?;
    let start = net_addr & mask;
    let end = start | !mask;
    log::trace!("ipv4_range({net_addr:#010x}/{prefix_len}) mask={mask:#010x} -> {start}..={end}");
    Ok(Ipv4Range { start, end })
}

/// First and last IPv6 address of the network `net_addr/prefix_len`.
pub fn ipv6_range(net_addr: u128, prefix_len: u32) -> Result<Ipv6Range, AddrError> {
    let mask = cidr_mask_v6(prefix_len)?;
    let start = net_addr & mask;
    let end = start | !mask;
    log::trace!("ipv6_range({net_addr:#034x}/{prefix_len}) mask={mask:#034x} -> {start}..={end}");
    Ok(Ipv6Range { start, end })
}
