//! Error types for the parser

use thiserror::Error;

use crate::ast::TokenKind;
use crate::lexer::Position;

/// What went wrong at a given spot in the token stream.
///
/// The lenient parser records these and keeps going; the strict entry
/// points turn the first one into an `Err`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// An object member did not start with a string key
    ///
    /// **Example:** `{1: 2}`
    #[error("expected string key, found {found}")]
    ExpectedKey { found: TokenKind },

    /// A key was not followed by `:`
    ///
    /// **Example:** `{"a" 1}`
    #[error("expected ':' after key \"{key}\", found {found}")]
    ExpectedColon { key: String, found: TokenKind },

    /// Two object members were not separated by `,`
    #[error("expected ',' or '}}', found {found}")]
    ExpectedComma { found: TokenKind },

    /// Object ended without `}`
    #[error("expected '}}', found {found}")]
    UnclosedObject { found: TokenKind },

    /// Array ended without `]`
    #[error("expected ']', found {found}")]
    UnclosedArray { found: TokenKind },

    /// A `,` directly before the closing `}` or `]`
    #[error("trailing comma before {found}")]
    TrailingComma { found: TokenKind },

    /// A token that cannot start a value, in value position
    #[error("unexpected {found} \"{literal}\" where a value was expected")]
    UnexpectedToken { found: TokenKind, literal: String },

    /// A literal token whose text could not be turned into a value
    #[error("{message}: \"{literal}\"")]
    IllegalLiteral { message: String, literal: String },

    /// Tokens left over after the top-level value
    #[error("unexpected {found} after the top-level value")]
    TrailingTokens { found: TokenKind },

    /// Objects and arrays nested past the parser's limit
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Input ended where a value was required
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// The document holds no value at all
    #[error("empty document")]
    EmptyDocument,
}

/// A parse diagnostic with the position of the offending token.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        ParseError { kind, position }
    }
}
