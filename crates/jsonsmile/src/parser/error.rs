use thiserror::Error;

/// The reasons a byte buffer can fail to decode.
///
/// The taxonomy is open: new kinds may appear in later releases, so callers
/// should match non-exhaustively.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// The input contained nothing but whitespace.
    #[error("empty input")]
    EmptyInput,
    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// A container element was followed by neither `,` nor the closing
    /// bracket.
    #[error("expected ',' or a closing bracket")]
    ExpectedCommaOrRightBracket,
    /// A value starting with `f` was not the literal `false`.
    #[error("expected the literal 'false'")]
    ExpectedFalse,
    /// A value starting with `n` was not the literal `null`.
    #[error("expected the literal 'null'")]
    ExpectedNull,
    /// A `,` inside an object was not followed by a quoted key.
    #[error("expected '\"' to open an object key")]
    ExpectedQuote,
    /// An object body opened with something other than a key or `}`.
    #[error("expected '\"' or '}}'")]
    ExpectedQuoteOrRightBrace,
    /// A value starting with `t` was not the literal `true`.
    #[error("expected the literal 'true'")]
    ExpectedTrue,
    /// Input ended inside an array.
    #[error("unexpected end of input inside an array")]
    IncompleteArray,
    /// Input ended inside an escape sequence.
    #[error("unexpected end of input inside an escape sequence")]
    IncompleteEscapeSequence,
    /// Input ended inside an object.
    #[error("unexpected end of input inside an object")]
    IncompleteObject,
    /// Input ended before the closing quote of a string.
    #[error("unexpected end of input inside a string")]
    IncompleteString,
    /// A `\` introduced an escape the grammar does not know.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    /// The first byte of a value cannot start any production.
    #[error("invalid leading byte for a value")]
    InvalidLeader,
    /// A number token violated the numeric grammar.
    #[error("invalid number")]
    InvalidNumber,
    /// A string decoded to a byte sequence that is not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
    /// A digit immediately followed a leading zero.
    #[error("number has a leading zero")]
    LeadingZero,
    /// Containers were nested deeper than the configured budget.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
    /// Non-whitespace bytes remained after the top-level value.
    #[error("unexpected bytes after the top-level value")]
    UnexpectedLeftovers,
}
