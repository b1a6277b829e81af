//! Key Path.

use crate::{Key, PathArg};
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

pub use format::{format_keys, write_keys};
pub use parse::{tokenize, Keys};

mod format;
mod parse;

/// An immutable, ordered sequence of keys addressing a field in a nested structure.
///
/// Two paths are equal when their keys are equal, no matter how they were constructed. The
/// string form, produced by `Display`, is the canonical path notation of the keys.
///
/// ```rust
/// use path_notation::{Key, KeyPath};
///
/// let path = KeyPath::from(r"foo.bar[2].10[baz.qux]");
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.first_key(), Some(&Key::from("foo")));
/// assert_eq!(path.last_key(), Some(&Key::from("baz.qux")));
/// assert_eq!(path[2], Key::Index(2));
/// assert_eq!(path[3], Key::from("10"));
/// assert_eq!(path.slice(1, Some(3)).to_string(), "bar[2]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    /// Creates an empty path.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a path from heterogeneous arguments, flattening them into one key sequence.
    ///
    /// See [`PathArg`] for how each argument contributes its keys.
    #[inline]
    pub fn from_args<'a, I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<PathArg<'a>>,
    {
        let mut keys = Vec::new();
        for arg in args {
            arg.into().flatten_into(&mut keys);
        }
        Self(keys)
    }

    /// Tokenizes a path notation string into its keys.
    #[inline]
    pub fn tokenize(path: &str) -> Keys<'_> {
        tokenize(path)
    }

    /// Formats keys as a canonical path notation string.
    #[inline]
    pub fn format<I>(keys: I) -> String
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<Key>,
    {
        format_keys(keys)
    }
}

impl KeyPath {
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    #[inline]
    pub fn into_keys(self) -> Vec<Key> {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    /// Returns the number of keys in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Key> {
        self.0.get(index)
    }

    /// Root key of the path.
    #[inline]
    pub fn first_key(&self) -> Option<&Key> {
        self.0.first()
    }

    /// Terminal key of the path.
    #[inline]
    pub fn last_key(&self) -> Option<&Key> {
        self.0.last()
    }

    /// Returns a new path holding the keys from `start` up to, but excluding, `end`.
    ///
    /// Negative positions count back from the end of the path, `None` as `end` means the end of
    /// the path, and positions past either end are clamped.
    #[inline]
    pub fn slice(&self, start: isize, end: Option<isize>) -> KeyPath {
        let len = self.len();
        let start = relative_position(start, len);
        let end = end.map_or(len, |end| relative_position(end, len));
        if start >= end {
            return KeyPath::new();
        }
        KeyPath(self.0[start..end].to_vec())
    }

    /// Returns a copy of the path with `delete_count` keys removed at `start` and `items`
    /// inserted in their place, along with the removed keys.
    ///
    /// `start` follows the same rules as in [`slice`](Self::slice). A `delete_count` of `None`
    /// removes every key from `start` to the end. The path itself is left untouched.
    pub fn splice<I>(&self, start: isize, delete_count: Option<usize>, items: I) -> (KeyPath, KeyPath)
    where
        I: IntoIterator<Item = Key>,
    {
        let len = self.len();
        let start = relative_position(start, len);
        let end = delete_count.map_or(len, |count| start.saturating_add(count).min(len));

        let mut keys = self.0.clone();
        let removed = keys
            .splice(start..end, items.into_iter().filter(|key| !key.is_empty_string()))
            .collect();
        (KeyPath(keys), KeyPath(removed))
    }

    /// Returns a new path with the keys of `args` appended.
    #[inline]
    pub fn concat<'a, I, A>(&self, args: I) -> KeyPath
    where
        I: IntoIterator<Item = A>,
        A: Into<PathArg<'a>>,
    {
        let mut keys = self.0.clone();
        for arg in args {
            arg.into().flatten_into(&mut keys);
        }
        KeyPath(keys)
    }

    /// Writes the path notation of this path into `writer`.
    #[inline]
    pub fn format_to<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        write_keys(&self.0, writer)
    }
}

/// Resolves a possibly negative position against `len`, clamping it into `0..=len`.
#[inline]
fn relative_position(pos: isize, len: usize) -> usize {
    if pos < 0 {
        len.saturating_sub(pos.unsigned_abs())
    } else {
        (pos as usize).min(len)
    }
}

impl fmt::Display for KeyPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_to(f)
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::from(s))
    }
}

impl From<&str> for KeyPath {
    #[inline]
    fn from(s: &str) -> Self {
        KeyPath(tokenize(s).collect())
    }
}

impl From<&String> for KeyPath {
    #[inline]
    fn from(s: &String) -> Self {
        KeyPath::from(s.as_str())
    }
}

impl From<String> for KeyPath {
    #[inline]
    fn from(s: String) -> Self {
        KeyPath::from(s.as_str())
    }
}

impl From<Key> for KeyPath {
    #[inline]
    fn from(key: Key) -> Self {
        KeyPath::from_args([key])
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for KeyPath {
                /// Creates a single-key path, see [`Key`] for how numbers become keys.
                #[inline]
                fn from(value: $ty) -> Self {
                    KeyPath::from(Key::from(value))
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, crate::Number);

impl From<PathArg<'_>> for KeyPath {
    #[inline]
    fn from(arg: PathArg<'_>) -> Self {
        KeyPath::from_args([arg])
    }
}

impl From<Vec<Key>> for KeyPath {
    #[inline]
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<KeyPath> for Vec<Key> {
    #[inline]
    fn from(path: KeyPath) -> Self {
        path.0
    }
}

impl FromIterator<Key> for KeyPath {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        KeyPath(iter.into_iter().filter(|key| !key.is_empty_string()).collect())
    }
}

impl IntoIterator for KeyPath {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for KeyPath {
    type Output = Key;

    #[inline]
    fn index(&self, index: usize) -> &Key {
        &self.0[index]
    }
}

impl AsRef<[Key]> for KeyPath {
    #[inline]
    fn as_ref(&self) -> &[Key] {
        &self.0
    }
}

impl PartialEq<str> for KeyPath {
    /// Compares keys, so any spelling of the same keys is equal to the path.
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.iter().cloned().eq(tokenize(other))
    }
}

impl PartialEq<&str> for KeyPath {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<KeyPath> for str {
    #[inline]
    fn eq(&self, other: &KeyPath) -> bool {
        other == self
    }
}

impl PartialEq<KeyPath> for &str {
    #[inline]
    fn eq(&self, other: &KeyPath) -> bool {
        other == *self
    }
}
