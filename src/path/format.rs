//! Path Formatter.

use crate::util::{BEGIN_BRACKET, DOT, END_BRACKET, ESCAPE};
use crate::Key;
use std::borrow::Borrow;
use std::fmt;

/// The notation chosen for a single key.
#[derive(Debug, PartialEq)]
enum Notation<'a> {
    /// \[2]
    Index(usize),
    /// .key
    Bare(&'a str),
    /// \[key.with.dots]
    Bracketed(&'a str),
    /// .key\\with\.escapes
    Escaped(&'a str),
    /// empty string key, which has no notation
    Skipped,
}

impl<'a> Notation<'a> {
    #[inline]
    fn of(key: &'a Key) -> Self {
        match key {
            Key::Index(index) => Notation::Index(*index),
            Key::String(s) if s.is_empty() => Notation::Skipped,
            Key::String(s) => {
                let needs_brackets = s.bytes().any(|i| matches!(i, DOT | ESCAPE | BEGIN_BRACKET));
                if !needs_brackets {
                    Notation::Bare(s)
                } else if s.as_bytes().last() == Some(&ESCAPE) {
                    // a trailing backslash would escape the closing bracket
                    Notation::Escaped(s)
                } else {
                    Notation::Bracketed(s)
                }
            }
        }
    }

    #[inline]
    fn is_dotted(&self) -> bool {
        matches!(self, Notation::Bare(_) | Notation::Escaped(_))
    }
}

/// Returns the canonical path notation of `keys`.
///
/// Integer keys and string keys containing `.`, `\` or `[` are written in bracket notation,
/// with every `]` escaped as `\]`. All other string keys are written in dot notation. The
/// result always tokenizes back to the same keys, except that empty string keys are skipped
/// since path notation cannot express them.
///
/// ```rust
/// use path_notation::{format_keys, Key};
///
/// let path = format_keys(&[Key::from("foo"), Key::from("bar.baz"), Key::Index(2)]);
/// assert_eq!(path, "foo[bar.baz][2]");
/// ```
#[inline]
pub fn format_keys<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<Key>,
{
    let mut buf = String::new();
    // writing into a `String` never fails
    let _ = write_keys(keys, &mut buf);
    buf
}

/// Writes the canonical path notation of `keys` into `writer`.
///
/// See [`format_keys`] for the notation rules.
pub fn write_keys<I, W>(keys: I, writer: &mut W) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Borrow<Key>,
    W: fmt::Write,
{
    let mut first = true;
    for key in keys {
        let key = key.borrow();
        let notation = Notation::of(key);
        if notation == Notation::Skipped {
            continue;
        }

        if notation.is_dotted() && !first {
            writer.write_char(DOT as char)?;
        }
        first = false;

        match notation {
            Notation::Index(index) => write!(writer, "[{}]", index)?,
            Notation::Bare(s) => writer.write_str(s)?,
            Notation::Bracketed(s) => {
                writer.write_char(BEGIN_BRACKET as char)?;
                write_escaped::<true, W>(s, writer)?;
                writer.write_char(END_BRACKET as char)?;
            }
            Notation::Escaped(s) => write_escaped::<false, W>(s, writer)?,
            Notation::Skipped => {}
        }
    }
    Ok(())
}

/// Writes `s`, prefixing every character that is structural in the given regime with `\`.
#[inline]
fn write_escaped<const IN_BRACKETS: bool, W: fmt::Write>(s: &str, writer: &mut W) -> fmt::Result {
    let needs_escape = |i: u8| {
        if IN_BRACKETS {
            i == END_BRACKET
        } else {
            matches!(i, DOT | BEGIN_BRACKET | ESCAPE)
        }
    };

    let bytes = s.as_bytes();
    let mut start = 0;
    for (pos, &byte) in bytes.iter().enumerate() {
        if needs_escape(byte) {
            // escapable characters are ASCII, so `pos` is a char boundary
            writer.write_str(&s[start..pos])?;
            writer.write_char(ESCAPE as char)?;
            start = pos;
        }
    }
    writer.write_str(&s[start..])
}
