//! Legacy single-byte string helpers.

/// Copies `len` characters of `s`, starting at character `offset`, into a byte
/// buffer holding the low 8 bits of each character.
///
/// This produces the raw, non-Unicode byte runs found in legacy tags. Ranges
/// running past the end of the string are clamped.
///
/// # Example
///
/// ```
/// use tagtext_buffers::string_to_byte_buffer;
///
/// assert_eq!(string_to_byte_buffer("Not unicode", 0, 3), b"Not".to_vec());
/// assert_eq!(string_to_byte_buffer("caf\u{e9}", 3, 1), vec![0xe9]);
/// ```
pub fn string_to_byte_buffer(s: &str, offset: usize, len: usize) -> Vec<u8> {
    s.chars()
        .skip(offset)
        .take(len)
        .map(|c| (c as u32 & 0xff) as u8)
        .collect()
}
