//! Parsing of space-separated hex octet strings.

use crate::HexError;

/// Parses a string such as `"ff fe 54 00"` into bytes.
///
/// Octets are two hex digits (either case) separated by ASCII whitespace.
///
/// # Example
///
/// ```
/// use tagtext_buffers::from_hex;
///
/// assert_eq!(from_hex("48 45 4c 4c 4f").unwrap(), b"HELLO".to_vec());
/// assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
/// ```
pub fn from_hex(hex: &str) -> Result<Vec<u8>, HexError> {
    let mut out = Vec::with_capacity((hex.len() + 1) / 3);
    let mut position = 0;
    for octet in hex.split_ascii_whitespace() {
        let digits = octet.as_bytes();
        if digits.len() != 2 {
            return Err(HexError::BadOctet {
                position,
                len: digits.len(),
            });
        }
        let hi = digit(digits[0], position)?;
        let lo = digit(digits[1], position)?;
        out.push((hi << 4) | lo);
        position += 1;
    }
    Ok(out)
}

fn digit(c: u8, position: usize) -> Result<u8, HexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(HexError::InvalidDigit {
            position,
            found: c as char,
        }),
    }
}
