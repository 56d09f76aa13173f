//! Inclusive numeric address range.

use crate::codec::{format_v4, format_v6};
use serde::{Deserialize, Serialize};

/// First and last address of a network, both inclusive.
///
/// Built by [`crate::range::ipv4_range`] and [`crate::range::ipv6_range`],
/// which guarantee `start <= end`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressRange<T> {
    /// Lowest (network) address.
    pub start: T,
    /// Highest (broadcast) address.
    pub end: T,
}

/// IPv4 range over 32-bit values.
pub type Ipv4Range = AddressRange<u32>;
/// IPv6 range over 128-bit values.
pub type Ipv6Range = AddressRange<u128>;

impl<T: Copy + PartialOrd> AddressRange<T> {
    /// True when `addr` lies between `start` and `end`.
    pub fn contains(&self, addr: T) -> bool {
        self.start <= addr && addr <= self.end
    }

    /// The range as a `(start, end)` tuple.
    pub fn as_tuple(&self) -> (T, T) {
        (self.start, self.end)
    }
}

impl AddressRange<u32> {
    /// Number of addresses after `start`; `end - start`.
    pub fn len_minus_one(&self) -> u32 {
        self.end - self.start
    }
}

impl AddressRange<u128> {
    /// Number of addresses after `start`; `end - start`.
    pub fn len_minus_one(&self) -> u128 {
        self.end - self.start
    }
}

impl std::fmt::Display for AddressRange<u32> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", format_v4(self.start), format_v4(self.end))
    }
}

impl std::fmt::Display for AddressRange<u128> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", format_v6(self.start), format_v6(self.end))
    }
}
