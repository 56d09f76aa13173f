//! Error type shared by the codec, detector and range calculator.

use crate::models::AddressFamily;

/// Errors returned by address parsing and range calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("Malformed {family} address: {input:?}")]
    MalformedAddress {
        input: String,
        family: AddressFamily,
    },

    #[error("Expected an {expected} address but {input:?} is {found}")]
    FamilyMismatch {
        input: String,
        expected: AddressFamily,
        found: AddressFamily,
    },

    #[error("Prefix length {prefix_len} is out of range for {family} (0-{})", .family.bits())]
    InvalidPrefixLength { prefix_len: u32, family: AddressFamily },
}

impl AddrError {
    pub(crate) fn malformed(input: &str, family: AddressFamily) -> Self {
        AddrError::MalformedAddress {
            input: input.to_string(),
            family,
        }
    }
}
