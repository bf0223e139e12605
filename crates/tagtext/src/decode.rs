//! Byte run to text.
//!
//! Decoding never fails: bytes that are malformed for their encoding decode
//! to `None`, so a corrupt frame does not abort reading the rest of a tag.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use tracing::debug;

use crate::registry::{payload, sniff_bom};
use crate::TextEncoding;

/// Result of decoding a byte run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The declared encoding, or the one inferred from the BOM.
    pub encoding: TextEncoding,
    /// `None` when the bytes are malformed for `encoding`.
    pub text: Option<String>,
}

/// Picks the encoding of an undeclared byte run.
///
/// Without a recognizable BOM the run is assumed to be ISO-8859-1.
pub fn infer_encoding(bytes: &[u8]) -> TextEncoding {
    sniff_bom(bytes).unwrap_or(TextEncoding::Iso8859_1)
}

/// Decodes a byte run, inferring the encoding when `declared` is `None`.
///
/// ```
/// use tagtext::{decode, TextEncoding};
///
/// let decoded = decode(&[0xFF, 0xFE, 0x48, 0x00, 0x69, 0x00, 0x00, 0x00], None);
/// assert_eq!(decoded.encoding, TextEncoding::Utf16);
/// assert_eq!(decoded.text.as_deref(), Some("Hi"));
/// ```
pub fn decode(bytes: &[u8], declared: Option<TextEncoding>) -> Decoded {
    let encoding = declared.unwrap_or_else(|| infer_encoding(bytes));
    Decoded {
        encoding,
        text: decode_text(bytes, encoding),
    }
}

/// Decodes a byte run under a declared encoding.
///
/// A leading BOM matching `encoding` and a single trailing terminator are
/// dropped before decoding.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    let text = decode_payload(payload(bytes, encoding), encoding);
    if text.is_none() {
        debug!(%encoding, len = bytes.len(), "byte run is malformed for its encoding");
    }
    text
}

/// Decodes bytes that carry no BOM or terminator.
pub(crate) fn decode_payload(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    match codec(encoding) {
        Some(codec) => codec
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned()),
        // Latin-1 maps every byte to the code point of the same value.
        None => Some(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

// encoding_rs resolves "ISO-8859-1" to windows-1252, which remaps 0x80..=0x9F,
// so Latin-1 is decoded by hand.
fn codec(encoding: TextEncoding) -> Option<&'static Encoding> {
    match encoding {
        TextEncoding::Iso8859_1 => None,
        TextEncoding::Utf16 => Some(UTF_16LE),
        TextEncoding::Utf16Be => Some(UTF_16BE),
        TextEncoding::Utf8 => Some(UTF_8),
    }
}
