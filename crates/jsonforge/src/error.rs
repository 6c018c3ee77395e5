//! Failure reasons and the offset-tagged parse error.

use thiserror::Error;

/// Bare failure reason raised inside the engine.
///
/// Inner scanners and parsers return a `Reason` without a position to avoid
/// repeated offset computation; the byte offset is attached exactly once, at
/// the outer parse boundary. The first raised reason always wins and aborts
/// the whole parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Input ended in the middle of a value.
    #[error("unexpected end of input")]
    EndOfStream,
    /// The input buffer was empty.
    #[error("empty input")]
    EmptyStream,
    /// A comma immediately before a closing bracket or brace.
    #[error("trailing comma")]
    TrailingComma,
    /// Two values without a separating comma.
    #[error("expected a comma between values")]
    ExpectedComma,
    /// An object key without a following colon.
    #[error("expected a colon after an object key")]
    ExpectedColon,
    /// An unrecognized or malformed escape sequence.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A byte that cannot begin or continue a JSON value.
    #[error("invalid syntax")]
    InvalidSyntax,
    /// A malformed number literal.
    #[error("invalid number literal")]
    InvalidNumber,
    /// A number literal outside the representable range.
    #[error("number overflow")]
    NumberOverflow,
    /// A literal other than `true`, `false`, or `null`.
    #[error("invalid literal")]
    InvalidLiteral,
    /// A broken surrogate pair, a non-scalar code point, or invalid UTF-8.
    #[error("invalid unicode")]
    InvalidUnicode,
    /// A bare scalar at the root without [`allow_fragments`].
    ///
    /// [`allow_fragments`]: crate::ParserOptions::allow_fragments
    #[error("fragmented document")]
    FragmentedJson,
}

/// A decode failure: a bare [`Reason`] plus the byte offset at which it was
/// detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{reason} at byte offset {offset}")]
pub struct ParseError {
    /// Distance in bytes from the start of the input to the failure point.
    pub offset: usize,
    /// What went wrong.
    pub reason: Reason,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ParseError, Reason};

    #[test]
    fn display_includes_offset() {
        let err = ParseError {
            offset: 12,
            reason: Reason::ExpectedColon,
        };
        assert_eq!(
            err.to_string(),
            "expected a colon after an object key at byte offset 12"
        );
    }
}
