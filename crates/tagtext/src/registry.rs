//! Static table of per-encoding byte layout: BOM signature, code-unit width
//! and terminator.

use tracing::trace;

use crate::{EncodedTextError, TextEncoding};

/// Byte layout of one [`TextEncoding`].
#[derive(Debug, PartialEq, Eq)]
pub struct EncodingEntry {
    pub encoding: TextEncoding,
    /// Charset name.
    pub charset: &'static str,
    /// Byte-order mark recognized on decode. Empty when the encoding has none.
    pub bom: &'static [u8],
    /// Whether the encode path writes `bom` when asked to.
    pub emits_bom: bool,
    /// Bytes per code unit.
    pub unit_width: usize,
    /// One code unit of zero bytes.
    pub terminator: &'static [u8],
}

static ISO_8859_1: EncodingEntry = EncodingEntry {
    encoding: TextEncoding::Iso8859_1,
    charset: "ISO-8859-1",
    bom: &[],
    emits_bom: false,
    unit_width: 1,
    terminator: &[0x00],
};

static UTF_16LE: EncodingEntry = EncodingEntry {
    encoding: TextEncoding::Utf16,
    charset: "UTF-16LE",
    bom: &[0xFF, 0xFE],
    emits_bom: true,
    unit_width: 2,
    terminator: &[0x00, 0x00],
};

static UTF_16BE: EncodingEntry = EncodingEntry {
    encoding: TextEncoding::Utf16Be,
    charset: "UTF-16BE",
    bom: &[0xFE, 0xFF],
    emits_bom: true,
    unit_width: 2,
    terminator: &[0x00, 0x00],
};

// The UTF-8 mark is only ever read, tag writers never emit it.
static UTF_8: EncodingEntry = EncodingEntry {
    encoding: TextEncoding::Utf8,
    charset: "UTF-8",
    bom: &[0xEF, 0xBB, 0xBF],
    emits_bom: false,
    unit_width: 1,
    terminator: &[0x00],
};

/// Order in which BOM signatures are tried by [`sniff_bom`].
const SNIFF_ORDER: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Utf16Be,
];

/// Returns the registry entry for an encoding.
pub fn entry_for(encoding: TextEncoding) -> &'static EncodingEntry {
    match encoding {
        TextEncoding::Iso8859_1 => &ISO_8859_1,
        TextEncoding::Utf16 => &UTF_16LE,
        TextEncoding::Utf16Be => &UTF_16BE,
        TextEncoding::Utf8 => &UTF_8,
    }
}

/// Returns the registry entry for a frame-header identifier.
pub fn entry_for_id(id: u8) -> Result<&'static EncodingEntry, EncodedTextError> {
    TextEncoding::from_id(id).map(entry_for)
}

/// Infers an encoding from a leading byte-order mark.
///
/// UTF-8 is tried first, then UTF-16LE, then UTF-16BE.
///
/// ```
/// use tagtext::{sniff_bom, TextEncoding};
///
/// assert_eq!(sniff_bom(&[0xFE, 0xFF, 0x00, 0x41]), Some(TextEncoding::Utf16Be));
/// assert_eq!(sniff_bom(b"plain"), None);
/// ```
pub fn sniff_bom(bytes: &[u8]) -> Option<TextEncoding> {
    let found = SNIFF_ORDER
        .into_iter()
        .find(|&encoding| bytes.starts_with(entry_for(encoding).bom));
    trace!(len = bytes.len(), ?found, "sniffed byte-order mark");
    found
}

/// Removes a leading BOM, but only the resolved encoding's own signature.
pub fn strip_bom(bytes: &[u8], encoding: TextEncoding) -> &[u8] {
    let bom = entry_for(encoding).bom;
    if bom.is_empty() {
        return bytes;
    }
    bytes.strip_prefix(bom).unwrap_or(bytes)
}

/// Removes one trailing code unit of zero bytes, if present.
pub fn strip_terminator(bytes: &[u8], encoding: TextEncoding) -> &[u8] {
    bytes
        .strip_suffix(entry_for(encoding).terminator)
        .unwrap_or(bytes)
}

/// The text payload of a byte run: BOM and terminator removed.
pub fn payload(bytes: &[u8], encoding: TextEncoding) -> &[u8] {
    strip_terminator(strip_bom(bytes, encoding), encoding)
}
