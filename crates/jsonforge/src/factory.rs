//! Abstraction over JSON value construction.

use alloc::{string::String, vec::Vec};

use crate::{number::Number, value::Value};

/// Caller-supplied construction callbacks, one per JSON value kind.
///
/// The engine never builds a document tree of its own: every decoded value is
/// passed through exactly one of these methods, and the method's return value
/// becomes the materialized node. Implementations should be pure mappings —
/// the parser's only interaction with a factory is invoking these methods and
/// threading their results, and callback side effects performed before a
/// failure are not rolled back.
///
/// # Examples
///
/// A factory that counts the values in a document instead of keeping them:
///
/// ```
/// use jsonforge::{JsonFactory, Number, ParserOptions, parse};
///
/// struct CountFactory;
///
/// impl JsonFactory for CountFactory {
///     type Value = usize;
///
///     fn new_object(&self, members: Vec<(String, usize)>) -> usize {
///         1 + members.iter().map(|(_, n)| n).sum::<usize>()
///     }
///     fn new_array(&self, elements: Vec<usize>) -> usize {
///         1 + elements.iter().sum::<usize>()
///     }
///     fn new_null(&self) -> usize {
///         1
///     }
///     fn new_bool(&self, _value: bool) -> usize {
///         1
///     }
///     fn new_string(&self, _value: String) -> usize {
///         1
///     }
///     fn new_number(&self, _value: Number) -> usize {
///         1
///     }
/// }
///
/// let count = parse(b"[1, [2, 3], null]", ParserOptions::default(), &CountFactory)?;
/// assert_eq!(count, 6);
/// # Ok::<(), jsonforge::ParseError>(())
/// ```
pub trait JsonFactory {
    /// The caller's materialized value type.
    type Value;

    /// Builds a value from an object's members, in source order.
    ///
    /// Duplicate keys are retained as-is; no last-wins collapsing happens
    /// before this call.
    fn new_object(&self, members: Vec<(String, Self::Value)>) -> Self::Value;

    /// Builds a value from an array's elements, in source order.
    fn new_array(&self, elements: Vec<Self::Value>) -> Self::Value;

    /// Builds the `null` value.
    fn new_null(&self) -> Self::Value;

    /// Builds a value from `true` or `false`.
    fn new_bool(&self, value: bool) -> Self::Value;

    /// Builds a value from a decoded string, escapes already resolved.
    fn new_string(&self, value: String) -> Self::Value;

    /// Builds a value from a decoded number.
    fn new_number(&self, value: Number) -> Self::Value;
}

/// Factory producing the crate's own [`Value`] tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueFactory;

impl JsonFactory for ValueFactory {
    type Value = Value;

    #[inline]
    fn new_object(&self, members: Vec<(String, Value)>) -> Value {
        Value::Object(members)
    }

    #[inline]
    fn new_array(&self, elements: Vec<Value>) -> Value {
        Value::Array(elements)
    }

    #[inline]
    fn new_null(&self) -> Value {
        Value::Null
    }

    #[inline]
    fn new_bool(&self, value: bool) -> Value {
        Value::Boolean(value)
    }

    #[inline]
    fn new_string(&self, value: String) -> Value {
        Value::String(value)
    }

    #[inline]
    fn new_number(&self, value: Number) -> Value {
        Value::Number(value)
    }
}
