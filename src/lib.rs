//! Conversion between path notation strings and key sequences in Rust.
//!
//! A path notation string addresses a field in a nested structure of objects and arrays with
//! dot notation and square bracket notation, e.g. `foo.bar[2].baz`. This crate converts such
//! strings to an ordered sequence of [`Key`]s and back, losslessly: formatting any key
//! sequence yields a string that tokenizes back to the same keys.
//!
//! This is not a query language: there are no wildcards, predicates or traversal semantics.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `KeyPath` implements the `serde::Serialize` and
//! `serde::Deserialize` traits, using its path notation string.
//!
//! ## Path notation
//!
//! ```BNF
//! path ::= segment ("." segment | bracket)*
//!
//! segment ::= (escaped-char | plain-char)*
//!
//! bracket ::= "[" bracket-body "]"
//! bracket-body ::= (escaped-bracket-char | plain-char)*
//!
//! escaped-char ::= "\" ("." | "[" | "\")  // outside brackets only
//! escaped-bracket-char ::= "\" "]"        // inside brackets only
//!
//! index ::= "0" | [1-9][0-9]*             // a bracket body matching this is an integer key
//! ```
//!
//! A backslash that does not start an escape sequence is kept literally, an empty segment or
//! empty bracket yields no key, and an unclosed bracket yields its content as a string key.
//! Tokenizing never fails.
//!
//! When formatting, integer keys and string keys containing `.`, `\` or `[` use bracket
//! notation, with `]` escaped as `\]`, and other string keys use dot notation. A key that would
//! need brackets but ends with `\` is written in dot notation with `.`, `[` and `\` escaped.
//!
//! ## Usage
//!
//! ### `tokenize` / `format_keys`
//!
//! ```rust
//! use path_notation::{format_keys, tokenize, Key};
//!
//! let keys: Vec<Key> = tokenize(r"foo[0].bar\.baz[qux]").collect();
//! assert_eq!(keys, vec![Key::from("foo"), Key::Index(0), Key::from("bar.baz"), Key::from("qux")]);
//!
//! assert_eq!(format_keys(&keys), "foo[0][bar.baz].qux");
//! ```
//!
//! ### `KeyPath`
//!
//! To build a path from strings, numbers and other paths, use [`KeyPath`]:
//!
//! ```rust
//! use path_notation::{Key, KeyPath, PathArg};
//!
//! let path = KeyPath::from_args([
//!     PathArg::from("foo"),
//!     PathArg::from("bar"),
//!     PathArg::from(2),
//!     PathArg::from("10"),
//!     PathArg::from(r"baz\.qux"),
//! ]);
//! assert_eq!(path.to_string(), "foo.bar[2].10[baz.qux]");
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.first_key(), Some(&Key::from("foo")));
//! assert_eq!(path.last_key(), Some(&Key::from("baz.qux")));
//!
//! let tail = path.slice(-2, None);
//! assert_eq!(tail, "10[baz.qux]");
//! ```
//!

#![cfg_attr(docsrs, feature(doc_cfg))]

mod arg;
mod json;
mod key;
mod path;
mod util;

#[cfg(feature = "serde")]
mod serde;

pub use self::{
    arg::{BuildError, BuildResult, JsonKind, PathArg},
    key::Key,
    path::{format_keys, tokenize, write_keys, KeyPath, Keys},
};
pub use decimal_rs::Decimal as Number;
