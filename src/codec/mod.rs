//! Conversion between textual addresses and their numeric form.
//!
//! - [`ipv4`] - dotted-quad text to and from `u32`
//! - [`ipv6`] - colon-hex text to and from `u128`

mod ipv4;
mod ipv6;

pub use ipv4::{format_v4, parse_v4};
pub use ipv6::{format_v6, parse_v6};
