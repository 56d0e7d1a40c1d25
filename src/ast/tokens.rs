use std::fmt;

use crate::lexer::Position;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unrecognized character or malformed keyword prefix
    ///
    /// # Examples
    /// ```text
    /// @
    /// tru
    /// ```
    Illegal,

    /// End of input, always the last token produced by the lexer
    EndOfInput,

    // Literals
    /// String literal enclosed in double quotes, copied verbatim
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "a\nb"
    /// ```
    String,

    /// Number literal, optionally negative, optionally with a fraction
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -12.50
    /// ```
    Number,

    // Structure
    /// `{`
    LeftBrace,

    /// `}`
    RightBrace,

    /// `[`
    LeftBracket,

    /// `]`
    RightBracket,

    /// `,`
    Comma,

    /// `:`
    Colon,

    // Keywords
    /// `true`
    True,

    /// `false`
    False,

    /// `null`
    Null,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "illegal token",
            TokenKind::EndOfInput => "end of input",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A single lexical unit: its kind, the literal text it was built from and
/// where it starts in the input.
///
/// For strings the literal excludes the surrounding quotes. For
/// [`TokenKind::EndOfInput`] the literal is `EOF`.
///
/// Two tokens are equal when kind and literal match; position is ignored.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::EndOfInput, "EOF", position)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
