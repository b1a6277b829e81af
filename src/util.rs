//! Basic functions.

use std::str::FromStr;

pub const ESCAPE: u8 = b'\\';
pub const DOT: u8 = b'.';
pub const BEGIN_BRACKET: u8 = b'[';
pub const END_BRACKET: u8 = b']';

/// Returns whether the byte has a structural meaning in path notation.
#[inline]
pub fn is_structural(byte: u8) -> bool {
    matches!(byte, ESCAPE | DOT | BEGIN_BRACKET | END_BRACKET)
}

/// Returns whether `token` matches `^(0|[1-9][0-9]*)$`.
#[inline]
pub fn is_index_literal(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.first() {
        None => false,
        Some(b'0') => bytes.len() == 1,
        Some(_) => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Parses an index literal, returning `None` if the token is not one or does not fit in `usize`.
#[inline]
pub fn parse_index(token: &str) -> Option<usize> {
    if is_index_literal(token) {
        usize::from_str(token).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::util::{is_index_literal, parse_index};

    #[test]
    fn test_is_index_literal() {
        assert!(is_index_literal("0"));
        assert!(is_index_literal("7"));
        assert!(is_index_literal("10"));
        assert!(is_index_literal("1234567890"));

        assert!(!is_index_literal(""));
        assert!(!is_index_literal("00"));
        assert!(!is_index_literal("02"));
        assert!(!is_index_literal("-1"));
        assert!(!is_index_literal("+1"));
        assert!(!is_index_literal("0.01"));
        assert!(!is_index_literal("1e3"));
        assert!(!is_index_literal(" 1"));
        assert!(!is_index_literal("١"));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("042"), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("999999999999999999999999999999"), None);
    }
}
