//! Byte-buffer helpers shared by the tagtext crates.
//!
//! # Overview
//!
//! - [`print_octets`] / [`to_hex`] - format byte runs as `"ff fe 00"`
//! - [`from_hex`] - parse that format back into bytes
//! - [`string_to_byte_buffer`] - build raw legacy single-byte runs
//!
//! # Example
//!
//! ```
//! use tagtext_buffers::{from_hex, to_hex};
//!
//! let bytes = from_hex("ff fe 49 00").unwrap();
//! assert_eq!(to_hex(&bytes), "ff fe 49 00");
//! ```

mod hex;
mod print_octets;
mod strings;

pub use hex::from_hex;
pub use print_octets::{print_octets, to_hex};
pub use strings::string_to_byte_buffer;

/// Error type for hex parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// An octet did not have exactly two digits.
    BadOctet { position: usize, len: usize },
    /// A character outside `0-9a-fA-F`.
    InvalidDigit { position: usize, found: char },
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::BadOctet { position, len } => {
                write!(f, "octet {} has {} digits, expected 2", position, len)
            }
            HexError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {:?} in octet {}", found, position)
            }
        }
    }
}

impl std::error::Error for HexError {}
