//! Path Tokenizer.

use crate::util::{is_structural, parse_index, BEGIN_BRACKET, DOT, END_BRACKET, ESCAPE};
use crate::Key;
use std::iter::FusedIterator;

const CTRL_CHAR_LEN: usize = 1;
const ESCAPE_SEQ_LEN: usize = 2;

/// Tokenizes a path notation string into its keys.
///
/// The returned iterator is lazy and holds no state besides the input, so tokenizing the same
/// string again yields the same keys. Tokenizing never fails: unclosed brackets, dangling
/// escapes and empty brackets all degrade to plain characters or to no key at all.
///
/// ```rust
/// use path_notation::{tokenize, Key};
///
/// let keys: Vec<Key> = tokenize(r"foo[2].bar\.baz").collect();
/// assert_eq!(keys, vec![Key::from("foo"), Key::Index(2), Key::from("bar.baz")]);
/// ```
#[inline]
pub fn tokenize(path: &str) -> Keys<'_> {
    Keys::new(path)
}

/// An iterator over the keys of a path notation string, created by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Keys<'a> {
    input: &'a str,
    pos: usize,
    token: String,
    in_brackets: bool,
}

impl<'a> Keys<'a> {
    #[inline]
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token: String::new(),
            in_brackets: false,
        }
    }

    #[inline]
    fn parse_escape(&mut self) {
        debug_assert!(self.peek() == Some(ESCAPE));
        match self.input.as_bytes().get(self.pos + CTRL_CHAR_LEN).copied() {
            // inside brackets only `]` can be escaped
            Some(END_BRACKET) if self.in_brackets => {
                self.token.push(END_BRACKET as char);
                self.advance(ESCAPE_SEQ_LEN);
            }
            Some(next @ (DOT | BEGIN_BRACKET | ESCAPE)) if !self.in_brackets => {
                self.token.push(next as char);
                self.advance(ESCAPE_SEQ_LEN);
            }
            // not an escape sequence, keep the backslash itself
            _ => {
                self.token.push(ESCAPE as char);
                self.advance(CTRL_CHAR_LEN);
            }
        }
    }

    /// Appends the current character and every following non-structural one to the token.
    #[inline]
    fn parse_plain(&mut self) {
        let begin = self.pos;
        self.advance(CTRL_CHAR_LEN);
        self.skip(|i| !is_structural(i));
        // Structural characters are ASCII, so both ends lie on char boundaries.
        self.token.push_str(&self.input[begin..self.pos]);
    }

    #[inline]
    fn take_key<const BRACKETED: bool>(&mut self) -> Option<Key> {
        if self.token.is_empty() {
            return None;
        }
        let token = std::mem::take(&mut self.token);
        if BRACKETED {
            if let Some(index) = parse_index(&token) {
                return Some(Key::Index(index));
            }
        }
        Some(Key::String(token))
    }

    #[inline]
    fn remain(&self) -> Option<&[u8]> {
        if self.pos < self.input.len() {
            Some(&self.input.as_bytes()[self.pos..])
        } else {
            None
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self, step: usize) {
        self.pos += step;
    }

    #[inline]
    fn skip<F: Fn(u8) -> bool>(&mut self, f: F) {
        let count = self.remain().map_or(0, |rem| rem.iter().take_while(|i| f(**i)).count());
        self.advance(count);
    }
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(byte) = self.peek() {
            match byte {
                ESCAPE => self.parse_escape(),
                BEGIN_BRACKET if !self.in_brackets => {
                    self.advance(CTRL_CHAR_LEN);
                    self.in_brackets = true;
                    if let Some(key) = self.take_key::<false>() {
                        return Some(key);
                    }
                }
                END_BRACKET if self.in_brackets => {
                    self.advance(CTRL_CHAR_LEN);
                    self.in_brackets = false;
                    if let Some(key) = self.take_key::<true>() {
                        return Some(key);
                    }
                }
                DOT if !self.in_brackets => {
                    self.advance(CTRL_CHAR_LEN);
                    if let Some(key) = self.take_key::<false>() {
                        return Some(key);
                    }
                }
                _ => self.parse_plain(),
            }
        }

        // an unclosed bracket still yields its content as a string key
        self.take_key::<false>()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.input.len() - self.pos;
        let pending = usize::from(!self.token.is_empty());
        (pending, Some(remain + pending))
    }
}

impl FusedIterator for Keys<'_> {}
