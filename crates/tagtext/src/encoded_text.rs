//! [`EncodedText`]: a string as stored in a tag frame, paired with the
//! encoding the frame declares.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use tagtext_buffers::print_octets;
use tracing::trace;

use crate::decode::{decode_text, infer_encoding};
use crate::encode::{encode, frame};
use crate::registry::payload;
use crate::{EncodeOptions, EncodedTextError, TextEncoding};

/// A text value bound to one of the four tag text encodings.
///
/// Two values are equal when they declare the same encoding and decode to the
/// same text, so a run written with a BOM equals the same run without one.
/// Values whose bytes do not decode compare by their payload bytes (BOM and
/// terminator excluded).
///
/// `set_encoding` is the only mutator and needs `&mut self`; it replaces the
/// encoding and the bytes together or not at all.
///
/// # Example
///
/// ```
/// use tagtext::{EncodeOptions, EncodedText, TextEncoding};
///
/// let text = EncodedText::from_text(TextEncoding::Utf16, "Hi");
/// let bytes = text.to_bytes(EncodeOptions::BOM).unwrap();
/// assert_eq!(bytes, [0xFF, 0xFE, 0x48, 0x00, 0x69, 0x00]);
///
/// let read_back = EncodedText::sniffed(bytes);
/// assert_eq!(read_back.encoding(), TextEncoding::Utf16);
/// assert_eq!(read_back, text);
/// ```
#[derive(Clone)]
pub struct EncodedText {
    encoding: TextEncoding,
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    /// Built from a string; bytes come from the encode path on demand.
    Text(String),
    /// Built from bytes, kept exactly as supplied.
    Bytes { raw: Vec<u8>, text: Option<String> },
}

impl EncodedText {
    pub fn from_text(encoding: TextEncoding, text: impl Into<String>) -> Self {
        Self {
            encoding,
            repr: Repr::Text(text.into()),
        }
    }

    /// Wraps a byte run read from a frame. The text is decoded right away.
    pub fn from_bytes(encoding: TextEncoding, raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        let text = decode_text(&raw, encoding);
        Self {
            encoding,
            repr: Repr::Bytes { raw, text },
        }
    }

    /// Wraps a byte run whose encoding is not declared.
    ///
    /// The encoding comes from the BOM; runs without one are ISO-8859-1.
    pub fn sniffed(raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        let encoding = infer_encoding(&raw);
        Self::from_bytes(encoding, raw)
    }

    /// Like [`from_text`](Self::from_text), with a frame-header encoding id.
    pub fn from_id_text(id: u8, text: impl Into<String>) -> Result<Self, EncodedTextError> {
        Ok(Self::from_text(TextEncoding::from_id(id)?, text))
    }

    /// Like [`from_bytes`](Self::from_bytes), with a frame-header encoding id.
    pub fn from_id_bytes(id: u8, raw: impl Into<Vec<u8>>) -> Result<Self, EncodedTextError> {
        Ok(Self::from_bytes(TextEncoding::from_id(id)?, raw))
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Charset name of the declared encoding.
    pub fn charset(&self) -> &'static str {
        self.encoding.charset()
    }

    /// The decoded text, or `None` if the bytes are malformed.
    pub fn text(&self) -> Option<&str> {
        match &self.repr {
            Repr::Text(text) => Some(text.as_str()),
            Repr::Bytes { text, .. } => text.as_deref(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.text().is_none()
    }

    /// The bytes as constructed, BOM and terminator included.
    ///
    /// Text-backed values are encoded with the default options, which fails
    /// if the text is not representable in the declared encoding.
    pub fn raw_bytes(&self) -> Result<Cow<'_, [u8]>, EncodedTextError> {
        match &self.repr {
            Repr::Text(text) => {
                encode(text, self.encoding, EncodeOptions::default()).map(Cow::Owned)
            }
            Repr::Bytes { raw, .. } => Ok(Cow::Borrowed(raw.as_slice())),
        }
    }

    /// Serializes the value for a frame.
    ///
    /// Byte-backed values are re-framed, not re-encoded: their payload is
    /// copied as is, so even malformed runs are written back unchanged.
    pub fn to_bytes(&self, options: EncodeOptions) -> Result<Vec<u8>, EncodedTextError> {
        match &self.repr {
            Repr::Text(text) => encode(text, self.encoding, options),
            Repr::Bytes { raw, .. } => {
                Ok(frame(payload(raw, self.encoding), self.encoding, options))
            }
        }
    }

    /// [`to_bytes`](Self::to_bytes) with no BOM and no terminator.
    pub fn to_bytes_plain(&self) -> Result<Vec<u8>, EncodedTextError> {
        self.to_bytes(EncodeOptions::PLAIN)
    }

    /// Re-encodes the text as `target`, strictly.
    ///
    /// Fails with [`EncodedTextError::UnmappableCharacter`] if `target` cannot
    /// represent the text, and with [`EncodedTextError::Undecodable`] if this
    /// value has no text.
    pub fn transcode(&self, target: TextEncoding) -> Result<EncodedText, EncodedTextError> {
        let text = self.text().ok_or(EncodedTextError::Undecodable {
            encoding: self.encoding,
        })?;
        let raw = encode(text, target, EncodeOptions::default())?;
        trace!(from = %self.encoding, to = %target, len = raw.len(), "transcoded text");
        Ok(Self {
            encoding: target,
            repr: Repr::Bytes {
                raw,
                text: Some(text.to_owned()),
            },
        })
    }

    /// Changes the declared encoding.
    ///
    /// With `transcode` the text is kept and the bytes re-encoded (see
    /// [`transcode`](Self::transcode)). Without it the bytes are kept and
    /// decoded again under `target`. On error `self` is unchanged.
    pub fn set_encoding(
        &mut self,
        target: TextEncoding,
        transcode: bool,
    ) -> Result<(), EncodedTextError> {
        let next = if transcode {
            self.transcode(target)?
        } else {
            Self::from_bytes(target, self.raw_bytes()?.into_owned())
        };
        *self = next;
        Ok(())
    }

    /// [`set_encoding`](Self::set_encoding) with a frame-header encoding id.
    pub fn set_encoding_id(&mut self, id: u8, transcode: bool) -> Result<(), EncodedTextError> {
        self.set_encoding(TextEncoding::from_id(id)?, transcode)
    }

    /// Payload bytes used to compare values that have no text.
    fn malformed_payload(&self) -> &[u8] {
        match &self.repr {
            Repr::Bytes { raw, text: None } => payload(raw, self.encoding),
            _ => &[],
        }
    }
}

impl PartialEq for EncodedText {
    fn eq(&self, other: &Self) -> bool {
        if self.encoding != other.encoding {
            return false;
        }
        match (self.text(), other.text()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.malformed_payload() == other.malformed_payload(),
            _ => false,
        }
    }
}

impl Eq for EncodedText {}

impl Hash for EncodedText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encoding.hash(state);
        match self.text() {
            Some(text) => text.hash(state),
            None => self.malformed_payload().hash(state),
        }
    }
}

/// Prints the decoded text; malformed values print nothing.
impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or_default())
    }
}

impl fmt::Debug for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("EncodedText");
        s.field("encoding", &self.encoding);
        s.field("text", &self.text());
        if let Repr::Bytes { raw, .. } = &self.repr {
            s.field("raw", &print_octets(raw, 32));
        }
        s.finish()
    }
}
