//! Path construction arguments.

use crate::path::tokenize;
use crate::{Key, KeyPath, Number};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One argument accepted when constructing a [`KeyPath`].
///
/// Strings are tokenized as path notation, numbers and keys contribute a single key, and paths
/// and lists are flattened into their keys in order.
///
/// ```rust
/// use path_notation::{KeyPath, PathArg};
///
/// let parent = KeyPath::from("foo.bar");
/// let path = KeyPath::from_args([
///     PathArg::from(&parent),
///     PathArg::from(2),
///     PathArg::from(vec!["baz", r"qux\.quux"]),
/// ]);
/// assert_eq!(path.to_string(), "foo.bar[2].baz[qux.quux]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PathArg<'a> {
    /// A path notation string.
    Notation(Cow<'a, str>),
    /// A single key, appended without tokenizing.
    Key(Key),
    /// Another path, contributing all of its keys.
    Path(Cow<'a, KeyPath>),
    /// Nested arguments.
    List(Vec<PathArg<'a>>),
}

impl PathArg<'_> {
    /// Appends the keys this argument stands for to `keys`.
    pub(crate) fn flatten_into(self, keys: &mut Vec<Key>) {
        match self {
            PathArg::Notation(notation) => keys.extend(tokenize(&notation)),
            PathArg::Key(key) => {
                if !key.is_empty_string() {
                    keys.push(key);
                }
            }
            PathArg::Path(Cow::Borrowed(path)) => keys.extend_from_slice(path.keys()),
            PathArg::Path(Cow::Owned(path)) => keys.extend(path),
            PathArg::List(args) => {
                for arg in args {
                    arg.flatten_into(keys);
                }
            }
        }
    }
}

impl<'a> From<&'a str> for PathArg<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        PathArg::Notation(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        PathArg::Notation(Cow::Borrowed(s))
    }
}

impl From<String> for PathArg<'_> {
    #[inline]
    fn from(s: String) -> Self {
        PathArg::Notation(Cow::Owned(s))
    }
}

impl From<Key> for PathArg<'_> {
    #[inline]
    fn from(key: Key) -> Self {
        PathArg::Key(key)
    }
}

impl<'a> From<&'a KeyPath> for PathArg<'a> {
    #[inline]
    fn from(path: &'a KeyPath) -> Self {
        PathArg::Path(Cow::Borrowed(path))
    }
}

impl From<KeyPath> for PathArg<'_> {
    #[inline]
    fn from(path: KeyPath) -> Self {
        PathArg::Path(Cow::Owned(path))
    }
}

impl<'a, T: Into<PathArg<'a>>> From<Vec<T>> for PathArg<'a> {
    #[inline]
    fn from(args: Vec<T>) -> Self {
        PathArg::List(args.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PathArg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    PathArg::Key(Key::from(value))
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, Number);

/// The kind of a JSON value that cannot be used as a path argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Object,
}

impl Display for JsonKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonKind::Null => write!(f, "null"),
            JsonKind::Bool => write!(f, "bool"),
            JsonKind::Object => write!(f, "object"),
        }
    }
}

/// Possible errors that can arise during building a path from JSON.
#[derive(Debug)]
pub enum BuildError {
    JsonError(serde_json::Error),
    UnsupportedJsonValue(JsonKind),
}

impl Display for BuildError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            BuildError::JsonError(e) => write!(f, "{}", e),
            BuildError::UnsupportedJsonValue(kind) => {
                write!(f, "unsupported path argument, expect string, number or array, but actual {}", kind)
            }
        }
    }
}

impl Error for BuildError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::JsonError(e) => Some(e),
            BuildError::UnsupportedJsonValue(_) => None,
        }
    }
}

impl From<serde_json::Error> for BuildError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        BuildError::JsonError(e)
    }
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
