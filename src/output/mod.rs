//! Output formatting for command results.
//!
//! - [`Report`] - the result of one command, independent of rendering
//! - [`json`] - JSON output
//! - [`terminal`] - quoted CSV-style rows with optional colors

mod json;
mod terminal;

use crate::models::{AddressFamily, ParsedAddress};
use serde::Serialize;

pub use json::to_json;
pub use terminal::{format_family, format_field, to_row};

/// Result of a single command, ready to be rendered.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Address parsed without a family hint.
    Detected { address: ParsedAddress },
    /// Address parsed with a known family; bare numeric value.
    Value { family: AddressFamily, value: u128 },
    /// Numeric value rendered as text.
    Text { family: AddressFamily, text: String },
    /// First and last address of a network.
    Range {
        family: AddressFamily,
        prefix_len: u32,
        start: u128,
        end: u128,
        start_text: String,
        end_text: String,
    },
    /// Membership of an address in a network.
    Contains {
        family: AddressFamily,
        network: String,
        address: String,
        contained: bool,
    },
}
