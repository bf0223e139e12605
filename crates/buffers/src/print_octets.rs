//! Hex formatting of byte runs.

/// Formats a byte slice as lower-case hex octets separated by single spaces,
/// showing at most `max` octets.
///
/// # Example
///
/// ```
/// use tagtext_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0xff, 0xfe, 0x54, 0x00], 16), "ff fe 54 00");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = String::with_capacity(octets.len().min(max) * 3);
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&format!("{:02x}", byte));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats the whole byte slice as hex octets, with no truncation.
///
/// This is the format used for frame dumps: `"ce b3 20 00"`.
///
/// ```
/// use tagtext_buffers::to_hex;
///
/// assert_eq!(to_hex(b"Hi"), "48 69");
/// ```
pub fn to_hex(octets: &[u8]) -> String {
    print_octets(octets, octets.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_octets_empty() {
        assert_eq!(print_octets(&[], 16), "");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_print_octets_single() {
        assert_eq!(print_octets(&[0x0a], 16), "0a");
    }

    #[test]
    fn test_print_octets_truncated() {
        let data: Vec<u8> = (0..20).collect();
        let result = print_octets(&data, 10);
        assert!(result.starts_with("00 01 02"));
        assert!(result.ends_with("09... (10 more)"));
    }

    #[test]
    fn test_to_hex_full() {
        let data: Vec<u8> = (0..20).collect();
        let hex = to_hex(&data);
        assert!(hex.ends_with("12 13"));
        assert!(!hex.contains("more"));
    }
}
