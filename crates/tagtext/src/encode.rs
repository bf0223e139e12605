//! Text to byte run, under a BOM/terminator policy.

use crate::registry::entry_for;
use crate::{EncodedTextError, TextEncoding};

/// Framing policy for encoded byte runs.
///
/// Which flags a frame needs depends on the tag version being written, so the
/// caller decides. Both flags are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Prefix a byte-order mark. Only UTF-16 encodings honor this.
    pub bom: bool,
    /// Append one code unit of zero bytes.
    pub terminator: bool,
}

impl EncodeOptions {
    pub const PLAIN: EncodeOptions = EncodeOptions::new(false, false);
    pub const BOM: EncodeOptions = EncodeOptions::new(true, false);
    pub const TERMINATED: EncodeOptions = EncodeOptions::new(false, true);
    pub const BOM_TERMINATED: EncodeOptions = EncodeOptions::new(true, true);

    pub const fn new(bom: bool, terminator: bool) -> Self {
        Self { bom, terminator }
    }

    pub const fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    pub const fn with_terminator(mut self, terminator: bool) -> Self {
        self.terminator = terminator;
        self
    }
}

/// Encodes `text` as `encoding`.
///
/// Fails with [`EncodedTextError::UnmappableCharacter`] when a character has
/// no representation in the target charset (only possible for ISO-8859-1).
///
/// ```
/// use tagtext::{encode, EncodeOptions, TextEncoding};
///
/// let bytes = encode("Hi", TextEncoding::Utf16Be, EncodeOptions::BOM_TERMINATED).unwrap();
/// assert_eq!(bytes, [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69, 0x00, 0x00]);
///
/// // UTF-8 never gets a BOM.
/// let bytes = encode("Hi", TextEncoding::Utf8, EncodeOptions::BOM).unwrap();
/// assert_eq!(bytes, b"Hi");
/// ```
pub fn encode(
    text: &str,
    encoding: TextEncoding,
    options: EncodeOptions,
) -> Result<Vec<u8>, EncodedTextError> {
    let payload = encode_payload(text, encoding)?;
    Ok(frame(&payload, encoding, options))
}

/// Encodes `text` with no BOM and no terminator.
pub fn encode_payload(text: &str, encoding: TextEncoding) -> Result<Vec<u8>, EncodedTextError> {
    match encoding {
        TextEncoding::Iso8859_1 => text
            .chars()
            .map(|character| {
                u8::try_from(u32::from(character)).map_err(|_| {
                    EncodedTextError::UnmappableCharacter {
                        character,
                        encoding,
                    }
                })
            })
            .collect(),
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Utf16 => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
    }
}

/// Wraps an already-encoded payload with the BOM and terminator `options` ask
/// for.
pub fn frame(payload: &[u8], encoding: TextEncoding, options: EncodeOptions) -> Vec<u8> {
    let entry = entry_for(encoding);
    let bom: &[u8] = if options.bom && entry.emits_bom {
        entry.bom
    } else {
        &[]
    };
    let terminator: &[u8] = if options.terminator {
        entry.terminator
    } else {
        &[]
    };

    let mut out = Vec::with_capacity(bom.len() + payload.len() + terminator.len());
    out.extend_from_slice(bom);
    out.extend_from_slice(payload);
    out.extend_from_slice(terminator);
    out
}
