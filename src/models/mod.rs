//! Value types shared by the codec, detector and range calculator.
//!
//! - [`AddressFamily`] and [`ParsedAddress`] - family tag and tagged numeric address
//! - [`AddressRange`] - inclusive first/last address of a network

mod family;
mod range;

// Re-export public types
pub use family::{format_address, AddressFamily, ParsedAddress, V4_BITS, V6_BITS};
pub use range::{AddressRange, Ipv4Range, Ipv6Range};
