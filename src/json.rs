//! Json to KeyPath

use crate::arg::{BuildError, BuildResult, JsonKind};
use crate::{Key, KeyPath, Number};
use serde_json::Value;
use std::fmt::Write;
use std::str::FromStr;

impl TryFrom<&serde_json::Value> for KeyPath {
    type Error = BuildError;

    /// Builds a path from a JSON string, number or (nested) array of those.
    ///
    /// Strings are tokenized as path notation, numbers become one key each and arrays are
    /// flattened in order.
    #[inline]
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let mut keys = Vec::new();
        let mut buf = String::new();
        push_keys(value, &mut keys, &mut buf)?;
        Ok(KeyPath::from(keys))
    }
}

impl KeyPath {
    /// Parses a json string to `KeyPath`.
    ///
    /// ```rust
    /// use path_notation::KeyPath;
    ///
    /// let path = KeyPath::from_json_str(r#"["foo.bar", 2, ["baz", "[qux.quux]"]]"#).unwrap();
    /// assert_eq!(path.to_string(), "foo.bar[2].baz[qux.quux]");
    /// ```
    #[inline]
    pub fn from_json_str<T: AsRef<str>>(str: T) -> BuildResult<Self> {
        let json: Value = serde_json::from_str(str.as_ref())?;
        KeyPath::try_from(&json)
    }
}

fn push_keys(value: &Value, keys: &mut Vec<Key>, buf: &mut String) -> BuildResult<()> {
    match value {
        Value::String(val) => keys.extend(KeyPath::tokenize(val)),
        Value::Number(val) => keys.push(number2key(val, buf)),
        Value::Array(val) => {
            for value in val {
                push_keys(value, keys, buf)?;
            }
        }
        Value::Null => return Err(BuildError::UnsupportedJsonValue(JsonKind::Null)),
        Value::Bool(_) => return Err(BuildError::UnsupportedJsonValue(JsonKind::Bool)),
        Value::Object(_) => return Err(BuildError::UnsupportedJsonValue(JsonKind::Object)),
    }
    Ok(())
}

/// Converts a JSON number through `Number` so that `2`, `2.0` and `2e0` all become index 2.
///
/// Numbers that `Number` cannot represent become a string key of their `serde_json` text,
/// which writes exponents with an explicit sign, e.g. `1e+150`.
#[inline]
fn number2key(val: &serde_json::Number, buf: &mut String) -> Key {
    buf.clear();
    // writing into a `String` never fails
    let _ = write!(buf, "{}", val);
    match Number::from_str(buf.as_str()) {
        Ok(number) => Key::from(&number),
        Err(_) => Key::String(buf.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_number(input: &str, expected: Key) {
        let number: serde_json::Number = serde_json::from_str(input).unwrap();
        let mut buf = String::new();
        assert_eq!(number2key(&number, &mut buf), expected, "input: {}", input);
    }

    #[test]
    fn test_number2key() {
        assert_number("0", Key::Index(0));
        assert_number("123", Key::Index(123));
        assert_number("2.0", Key::Index(2));
        assert_number("2e0", Key::Index(2));
        assert_number("-1", Key::from("-1"));
        assert_number("0.01", Key::from("0.01"));
        assert_number("1e150", Key::from("1e+150"));
        assert_number("1e-150", Key::from("1e-150"));
    }
}
