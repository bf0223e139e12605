//! Property tests over arbitrary strings for the encode and decode paths.

use proptest::prelude::*;
use tagtext::{decode, decode_text, encode, EncodeOptions, EncodedText, TextEncoding};

fn encoding() -> impl Strategy<Value = TextEncoding> {
    prop::sample::select(TextEncoding::ALL.to_vec())
}

fn utf16_encoding() -> impl Strategy<Value = TextEncoding> {
    prop::sample::select(vec![TextEncoding::Utf16, TextEncoding::Utf16Be])
}

fn latin1_string() -> impl Strategy<Value = String> {
    "[\\x00-\\xff]*"
}

fn representable(text: &str, encoding: TextEncoding) -> bool {
    encoding != TextEncoding::Iso8859_1 || text.chars().all(|c| u32::from(c) <= 0xff)
}

// A text ending in NUL would lose it to terminator stripping.
fn no_trailing_nul(text: &str) -> bool {
    !text.ends_with('\0')
}

// A leading U+FEFF encodes to the encoding's own BOM and is stripped on decode.
fn no_leading_bom(text: &str) -> bool {
    !text.starts_with('\u{FEFF}')
}

proptest! {
    #[test]
    fn plain_roundtrip(text in any::<String>(), encoding in encoding()) {
        prop_assume!(representable(&text, encoding) && no_trailing_nul(&text) && no_leading_bom(&text));
        let bytes = encode(&text, encoding, EncodeOptions::PLAIN).unwrap();
        prop_assert_eq!(decode_text(&bytes, encoding), Some(text));
    }

    #[test]
    fn latin1_roundtrip(text in latin1_string()) {
        prop_assume!(no_trailing_nul(&text));
        let bytes = encode(&text, TextEncoding::Iso8859_1, EncodeOptions::TERMINATED).unwrap();
        prop_assert_eq!(bytes.len(), text.chars().count() + 1);
        prop_assert_eq!(decode_text(&bytes, TextEncoding::Iso8859_1), Some(text));
    }

    #[test]
    fn utf16_bom_is_sniffed(text in any::<String>(), encoding in utf16_encoding(), terminator in any::<bool>()) {
        let options = EncodeOptions::BOM.with_terminator(terminator);
        let bytes = encode(&text, encoding, options).unwrap();
        let decoded = decode(&bytes, None);
        prop_assert_eq!(decoded.encoding, encoding);
        if terminator || no_trailing_nul(&text) {
            prop_assert_eq!(decoded.text, Some(text));
        }
    }

    #[test]
    fn bom_flag_ignored_for_single_byte_encodings(text in latin1_string(), terminator in any::<bool>()) {
        for encoding in [TextEncoding::Iso8859_1, TextEncoding::Utf8] {
            let with = encode(&text, encoding, EncodeOptions::new(true, terminator)).unwrap();
            let without = encode(&text, encoding, EncodeOptions::new(false, terminator)).unwrap();
            prop_assert_eq!(with, without);
        }
    }

    #[test]
    fn terminator_appends_one_zero_unit(text in any::<String>(), encoding in encoding(), bom in any::<bool>()) {
        prop_assume!(representable(&text, encoding));
        let bare = encode(&text, encoding, EncodeOptions::new(bom, false)).unwrap();
        let terminated = encode(&text, encoding, EncodeOptions::new(bom, true)).unwrap();
        let mut expected = bare;
        expected.extend(std::iter::repeat(0u8).take(encoding.unit_width()));
        prop_assert_eq!(terminated, expected);
    }

    #[test]
    fn equality_ignores_bom(text in any::<String>(), encoding in utf16_encoding()) {
        prop_assume!(no_leading_bom(&text));
        let with = encode(&text, encoding, EncodeOptions::BOM).unwrap();
        let without = encode(&text, encoding, EncodeOptions::PLAIN).unwrap();
        prop_assert_eq!(
            EncodedText::from_bytes(encoding, with),
            EncodedText::from_bytes(encoding, without)
        );
    }

    #[test]
    fn undeclared_bytes_without_bom_are_latin1(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(tagtext::sniff_bom(&bytes).is_none());
        let decoded = decode(&bytes, None);
        prop_assert_eq!(decoded.encoding, TextEncoding::Iso8859_1);
        prop_assert!(decoded.text.is_some());
    }

    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64), encoding in encoding()) {
        let _ = decode_text(&bytes, encoding);
    }
}
