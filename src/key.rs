//! Key literal.

use crate::util::parse_index;
use crate::Number;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single addressing unit of a path: either a string key or a non-negative integer key.
///
/// Converting from a string never tokenizes: `Key::from("a.b")` is the single key `a.b`.
/// Converting from a number yields [`Key::Index`] when the number is a non-negative integer
/// that fits in `usize`, and otherwise a string key holding the number's text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// An object member name.
    String(String),
    /// An array subscript, written as `[n]` in path notation.
    Index(usize),
}

impl Key {
    /// Returns the text of a string key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Index(_) => None,
        }
    }

    /// Returns the value of an integer key.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::String(_) => None,
            Key::Index(index) => Some(*index),
        }
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Empty string keys have no path notation and are never produced by the tokenizer.
    #[inline]
    pub(crate) fn is_empty_string(&self) -> bool {
        matches!(self, Key::String(s) if s.is_empty())
    }
}

impl Display for Key {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => f.write_str(s),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<&String> for Key {
    #[inline]
    fn from(s: &String) -> Self {
        Key::String(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                #[inline]
                fn from(value: $ty) -> Self {
                    match usize::try_from(value) {
                        Ok(index) => Key::Index(index),
                        Err(_) => Key::String(value.to_string()),
                    }
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Returns the index a float stands for, if it is a non-negative integer that fits in `usize`.
#[inline]
fn float_index(value: f64) -> Option<usize> {
    // `usize::MAX as f64` rounds up, so the bound must be exclusive.
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

impl From<f64> for Key {
    #[inline]
    fn from(value: f64) -> Self {
        match float_index(value) {
            Some(index) => Key::Index(index),
            None => Key::String(value.to_string()),
        }
    }
}

impl From<f32> for Key {
    #[inline]
    fn from(value: f32) -> Self {
        // widening keeps integral values exact but not the shortest decimal text
        match float_index(f64::from(value)) {
            Some(index) => Key::Index(index),
            None => Key::String(value.to_string()),
        }
    }
}

impl From<&Number> for Key {
    #[inline]
    fn from(number: &Number) -> Self {
        let text = number.to_string();
        let integral = match text.split_once('.') {
            Some((integral, fraction)) if fraction.bytes().all(|i| i == b'0') => integral,
            Some(_) => return Key::String(text),
            None => text.as_str(),
        };
        match parse_index(integral) {
            Some(index) => Key::Index(index),
            None => Key::String(text),
        }
    }
}

impl From<Number> for Key {
    #[inline]
    fn from(number: Number) -> Self {
        Key::from(&number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_key_from_integer() {
        assert_eq!(Key::from(0u8), Key::Index(0));
        assert_eq!(Key::from(12u32), Key::Index(12));
        assert_eq!(Key::from(7usize), Key::Index(7));
        assert_eq!(Key::from(3i64), Key::Index(3));
        assert_eq!(Key::from(-1i32), Key::String("-1".to_string()));
        assert_eq!(Key::from(-42isize), Key::String("-42".to_string()));
    }

    #[test]
    fn test_key_from_float() {
        assert_eq!(Key::from(2.0f64), Key::Index(2));
        assert_eq!(Key::from(0.0f64), Key::Index(0));
        assert_eq!(Key::from(0.01f64), Key::String("0.01".to_string()));
        assert_eq!(Key::from(-1.0f64), Key::String("-1".to_string()));
        assert_eq!(Key::from(1.5f32), Key::String("1.5".to_string()));
        assert_eq!(Key::from(0.1f32), Key::from("0.1"));
        assert_eq!(Key::from(1.1f32), Key::from("1.1"));
        assert_eq!(Key::from(-2.5f32), Key::from("-2.5"));
        assert_eq!(Key::from(16777216.0f32), Key::Index(16777216));
        assert_eq!(Key::from(f64::NAN), Key::String("NaN".to_string()));
        assert_eq!(Key::from(f64::INFINITY), Key::String("inf".to_string()));
    }

    #[test]
    fn test_key_from_number() {
        let number = |s: &str| Number::from_str(s).unwrap();

        assert_eq!(Key::from(number("0")), Key::Index(0));
        assert_eq!(Key::from(number("123")), Key::Index(123));
        assert_eq!(Key::from(number("2.0")), Key::Index(2));
        assert_eq!(Key::from(number("-5")), Key::String("-5".to_string()));
        assert_eq!(Key::from(number("1.25")), Key::String("1.25".to_string()));
    }

    #[test]
    fn test_key_accessors() {
        let key = Key::from("foo");
        assert_eq!(key.as_str(), Some("foo"));
        assert_eq!(key.as_index(), None);
        assert!(!key.is_index());
        assert_eq!(key.to_string(), "foo");

        let key = Key::Index(3);
        assert_eq!(key.as_str(), None);
        assert_eq!(key.as_index(), Some(3));
        assert!(key.is_index());
        assert_eq!(key.to_string(), "3");

        // no tokenizing when converting from a string
        assert_eq!(Key::from("a.b"), Key::String("a.b".to_string()));
        assert!(Key::from("").is_empty_string());
    }
}
