//! Single-pass JSON decoding without an intermediate document tree.
//!
//! `jsonforge` decodes an in-memory UTF-8 byte buffer in one forward pass and
//! never builds a generic document model of its own. Instead, the engine is
//! generic over a [`JsonFactory`]: a set of six construction callbacks, one
//! per JSON value kind, supplied by the caller. Whatever a callback returns
//! becomes the materialized node, so consumers decode straight into their own
//! domain types.
//!
//! Numbers are reconstructed exactly: an integer literal that fits a signed
//! 64-bit range is always [`Number::Integer`]; a decimal point or exponent
//! always yields [`Number::Double`]; a bare integer outside the signed 64-bit
//! range is an error rather than a silent float.
//!
//! Failures carry the byte offset at which they were detected:
//! [`ParseError`] pairs a bare [`Reason`] with the cursor position at the
//! moment the parse aborted.
//!
//! # Examples
//!
//! Decoding into the crate's own [`Value`] tree:
//!
//! ```
//! use jsonforge::{Number, ParserOptions, Value, parse_value};
//!
//! let doc = br#"{"id": 7, "tags": ["a", "b"]}"#;
//! let value = parse_value(doc, ParserOptions::default())?;
//!
//! let Value::Object(members) = value else {
//!     panic!("expected an object");
//! };
//! assert_eq!(members[0].0, "id");
//! assert_eq!(members[0].1, Value::Number(Number::Integer(7)));
//! # Ok::<(), jsonforge::ParseError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod factory;
mod number;
mod options;
mod parser;
mod value;

pub use error::{ParseError, Reason};
pub use factory::{JsonFactory, ValueFactory};
pub use number::Number;
pub use options::ParserOptions;
pub use parser::{parse, parse_value};
pub use value::Value;
