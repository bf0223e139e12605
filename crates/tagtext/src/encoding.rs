//! The closed set of text encodings a tag record may declare.

use std::fmt;
use std::str::FromStr;

use crate::registry::{entry_for, EncodingEntry};
use crate::EncodedTextError;

/// Text encoding declared by a tag frame header.
///
/// The discriminants are the one-byte identifiers stored in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum TextEncoding {
    /// Latin-1, one byte per character, no BOM.
    Iso8859_1 = 0,
    /// UTF-16 little-endian, written with a `FF FE` BOM.
    Utf16 = 1,
    /// UTF-16 big-endian, BOM `FE FF` optional.
    Utf16Be = 2,
    Utf8 = 3,
}

impl TextEncoding {
    /// All encodings in identifier order.
    pub const ALL: [TextEncoding; 4] = [
        TextEncoding::Iso8859_1,
        TextEncoding::Utf16,
        TextEncoding::Utf16Be,
        TextEncoding::Utf8,
    ];

    /// Resolves a frame-header identifier.
    ///
    /// ```
    /// use tagtext::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::from_id(2).unwrap(), TextEncoding::Utf16Be);
    /// assert_eq!(
    ///     TextEncoding::from_id(4).unwrap_err().to_string(),
    ///     "Invalid text encoding 4"
    /// );
    /// ```
    pub fn from_id(id: u8) -> Result<Self, EncodedTextError> {
        match id {
            0 => Ok(TextEncoding::Iso8859_1),
            1 => Ok(TextEncoding::Utf16),
            2 => Ok(TextEncoding::Utf16Be),
            3 => Ok(TextEncoding::Utf8),
            _ => Err(EncodedTextError::InvalidEncoding(id)),
        }
    }

    /// The frame-header identifier.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Registry entry describing this encoding's byte layout.
    pub fn entry(self) -> &'static EncodingEntry {
        entry_for(self)
    }

    /// Charset name, e.g. `"UTF-16LE"`.
    pub fn charset(self) -> &'static str {
        self.entry().charset
    }

    /// Bytes per code unit: 1 for ISO-8859-1 and UTF-8, 2 for UTF-16.
    pub fn unit_width(self) -> usize {
        self.entry().unit_width
    }

    pub fn is_utf16(self) -> bool {
        matches!(self, TextEncoding::Utf16 | TextEncoding::Utf16Be)
    }
}

impl TryFrom<u8> for TextEncoding {
    type Error = EncodedTextError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        TextEncoding::from_id(id)
    }
}

impl From<TextEncoding> for u8 {
    fn from(encoding: TextEncoding) -> u8 {
        encoding.id()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.charset())
    }
}

impl FromStr for TextEncoding {
    type Err = EncodedTextError;

    /// Parses a charset name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso-8859-1" | "iso8859-1" | "latin1" => Ok(TextEncoding::Iso8859_1),
            "utf-16le" | "utf-16" => Ok(TextEncoding::Utf16),
            "utf-16be" => Ok(TextEncoding::Utf16Be),
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            _ => Err(EncodedTextError::UnknownCharset(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for encoding in TextEncoding::ALL {
            assert_eq!(TextEncoding::from_id(encoding.id()), Ok(encoding));
            assert_eq!(TextEncoding::try_from(u8::from(encoding)), Ok(encoding));
        }
    }

    #[test]
    fn test_invalid_ids() {
        for id in [4u8, 5, 0x7f, 0xff] {
            assert_eq!(
                TextEncoding::from_id(id),
                Err(EncodedTextError::InvalidEncoding(id))
            );
        }
    }

    #[test]
    fn test_display_is_charset() {
        assert_eq!(TextEncoding::Iso8859_1.to_string(), "ISO-8859-1");
        assert_eq!(TextEncoding::Utf16.to_string(), "UTF-16LE");
        assert_eq!(TextEncoding::Utf16Be.to_string(), "UTF-16BE");
        assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("utf-8".parse(), Ok(TextEncoding::Utf8));
        assert_eq!("UTF-16BE".parse(), Ok(TextEncoding::Utf16Be));
        assert_eq!("Latin1".parse(), Ok(TextEncoding::Iso8859_1));
        assert_eq!("utf-16".parse(), Ok(TextEncoding::Utf16));
        assert_eq!(
            "koi8-r".parse::<TextEncoding>(),
            Err(EncodedTextError::UnknownCharset("koi8-r".to_owned()))
        );
    }

    #[test]
    fn test_unit_width() {
        assert_eq!(TextEncoding::Iso8859_1.unit_width(), 1);
        assert_eq!(TextEncoding::Utf8.unit_width(), 1);
        assert_eq!(TextEncoding::Utf16.unit_width(), 2);
        assert_eq!(TextEncoding::Utf16Be.unit_width(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_ids() {
        assert_eq!(serde_json::to_string(&TextEncoding::Utf16Be).unwrap(), "2");
        let parsed: TextEncoding = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, TextEncoding::Utf8);
        assert!(serde_json::from_str::<TextEncoding>("4").is_err());
    }
}
