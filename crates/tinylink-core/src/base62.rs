//! The base-62 alphabet used by short codes.

/// Digits, then uppercase, then lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const BASE: u64 = ALPHABET.len() as u64;

/// Returns `true` if `c` is one of the 62 alphabet symbols.
pub fn is_base62(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Encodes `value` in the base-62 alphabet, most significant symbol first.
///
/// Zero encodes as `"0"`.
pub fn encode_u64(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(11);
    while value > 0 {
        buf.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    buf.reverse();

    buf.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_has_62_unique_symbols() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|&b| is_base62(b as char)));
    }

    #[test]
    fn alphabet_order() {
        assert_eq!(&ALPHABET[..10], b"0123456789");
        assert_eq!(ALPHABET[10], b'A');
        assert_eq!(ALPHABET[36], b'a');
        assert_eq!(ALPHABET[61], b'z');
    }

    #[test]
    fn encodes_small_values() {
        assert_eq!(encode_u64(0), "0");
        assert_eq!(encode_u64(9), "9");
        assert_eq!(encode_u64(10), "A");
        assert_eq!(encode_u64(61), "z");
        assert_eq!(encode_u64(62), "10");
        assert_eq!(encode_u64(62 * 62 - 1), "zz");
    }

    #[test]
    fn rejects_non_alphabet_symbols() {
        assert!(!is_base62('-'));
        assert!(!is_base62('_'));
        assert!(!is_base62('é'));
    }
}
