//! Text values stored in binary tag records.
//!
//! Tag frames carry strings in one of four encodings, identified by a one-byte
//! id in the frame header, optionally preceded by a byte-order mark and
//! followed by a null terminator. This crate converts between those byte runs
//! and Rust strings.
//!
//! # Overview
//!
//! - [`TextEncoding`] - the four encodings and their frame-header ids
//! - [`registry`] - BOM signature, code-unit width and terminator per encoding
//! - [`decode()`] / [`decode_text`] - byte run to text; malformed runs give `None`
//! - [`encode()`] with [`EncodeOptions`] - text to byte run
//! - [`EncodedText`] - a value pairing an encoding with text or bytes, with
//!   strict transcoding between encodings
//!
//! | Encoding | id | BOM | Terminator |
//! |---|---|---|---|
//! | ISO-8859-1 | 0 | none | `00` |
//! | UTF-16LE | 1 | `FF FE` | `00 00` |
//! | UTF-16BE | 2 | `FE FF` | `00 00` |
//! | UTF-8 | 3 | `EF BB BF`, read only | `00` |
//!
//! # Example
//!
//! ```
//! use tagtext::{EncodeOptions, EncodedText, TextEncoding};
//!
//! let utf8 = EncodedText::from_bytes(TextEncoding::Utf8, "Caf\u{e9}".as_bytes());
//! let latin1 = utf8.transcode(TextEncoding::Iso8859_1).unwrap();
//! assert_eq!(latin1.to_bytes(EncodeOptions::TERMINATED).unwrap(), [0x43, 0x61, 0x66, 0xE9, 0x00]);
//! assert_eq!(latin1, EncodedText::from_text(TextEncoding::Iso8859_1, "Caf\u{e9}"));
//! ```

pub mod decode;
pub mod encode;
mod encoded_text;
mod encoding;
mod error;
pub mod registry;

pub use decode::{decode, decode_text, infer_encoding, Decoded};
pub use encode::{encode, EncodeOptions};
pub use encoded_text::EncodedText;
pub use encoding::TextEncoding;
pub use error::EncodedTextError;
pub use registry::{entry_for, entry_for_id, sniff_bom, EncodingEntry};
