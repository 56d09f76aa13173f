//! Conversion between textual IPv4/IPv6 addresses and their numeric form,
//! and expansion of a network prefix to its inclusive address range.
//!
//! - [`codec`] - parse and format addresses (`u32` for IPv4, `u128` for IPv6)
//! - [`detect`] - family auto-detection and family-enforced parsing
//! - [`range`] - first/last address of `net_addr/prefix_len`
//! - [`network`] - textual network with membership checks
//! - [`models`] - value types shared by the above

pub mod cli;
pub mod codec;
pub mod detect;
pub mod error;
pub mod models;
pub mod network;
pub mod output;
pub mod range;

pub use codec::{format_v4, format_v6, parse_v4, parse_v6};
pub use detect::{detect_address, parse_as, parse_as_v4, parse_as_v6};
pub use error::AddrError;
pub use models::{format_address, AddressFamily, AddressRange, ParsedAddress};
pub use network::{network_contains, Network};
pub use range::{ipv4_range, ipv6_range};
