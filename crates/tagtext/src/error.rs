//! Error type for encoding lookup, encoding and transcoding.

use thiserror::Error;

use crate::TextEncoding;

/// Errors raised by configuration mistakes or strict transcoding.
///
/// Malformed input bytes are not an error: decoding them yields no text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodedTextError {
    #[error("Invalid text encoding {0}")]
    InvalidEncoding(u8),
    #[error("unknown charset `{0}`")]
    UnknownCharset(String),
    #[error("character {character:?} cannot be encoded as {encoding}")]
    UnmappableCharacter {
        character: char,
        encoding: TextEncoding,
    },
    #[error("bytes are not valid {encoding}, nothing to transcode")]
    Undecodable { encoding: TextEncoding },
}
