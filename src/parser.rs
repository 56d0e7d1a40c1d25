use std::{mem, vec};

use crate::{
    ast::{Node, Property, RootNode, Token, TokenKind},
    error::{ParseError, ParseErrorKind},
    lexer::{self, Position},
};

/// Objects and arrays nested deeper than this become [`Node::Illegal`].
pub const MAX_DEPTH: usize = 512;

/// Recursive-descent parser over a token stream with two tokens of
/// lookahead.
///
/// Parsing is lenient: malformed structure truncates the collection being
/// built and a bad literal becomes [`Node::Illegal`], but nothing aborts.
/// Every such event is also recorded as a [`ParseError`], available through
/// [`Parser::diagnostics`], and the strict entry points report the first one.
pub struct Parser {
    tokens: vec::IntoIter<Token>,
    current_token: Token,
    peek_token: Token,
    last_position: Position,
    depth: usize,
    diagnostics: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let last_position = tokens.last().map(|t| t.position).unwrap_or_default();
        let mut tokens = tokens.into_iter();
        let current_token = tokens.next().unwrap_or_else(|| Token::eof(last_position));
        let peek_token = tokens.next().unwrap_or_else(|| Token::eof(last_position));
        Parser {
            tokens,
            current_token,
            peek_token,
            last_position,
            depth: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Everything recorded so far, in the order it was found.
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    fn advance(&mut self) {
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::eof(self.last_position));
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn record(&mut self, kind: ParseErrorKind) {
        let error = ParseError::new(kind, self.current_token.position);
        tracing::debug!(%error, "parse diagnostic");
        self.diagnostics.push(error);
    }

    fn take_literal(&mut self) -> String {
        mem::take(&mut self.current_token.literal)
    }

    /// Parses the single top-level value. The root is empty when the input
    /// held no tokens besides end of input. Tokens after the value are left
    /// unread.
    pub fn parse_root(&mut self) -> RootNode {
        let value = if self.check(TokenKind::EndOfInput) {
            self.record(ParseErrorKind::EmptyDocument);
            None
        } else {
            self.parse_value()
        };

        if value.is_some() && !self.check(TokenKind::EndOfInput) {
            let found = self.current_token.kind;
            self.record(ParseErrorKind::TrailingTokens { found });
        }

        tracing::debug!(
            empty = value.is_none(),
            diagnostics = self.diagnostics.len(),
            "parsed document"
        );
        RootNode::new(value)
    }

    /// Like [`Parser::parse_root`] but fails with the first diagnostic.
    pub fn parse_root_strict(&mut self) -> Result<RootNode, ParseError> {
        let root = self.parse_root();
        match self.diagnostics.first() {
            Some(error) => Err(error.clone()),
            None => Ok(root),
        }
    }

    /// Parses one value starting at the current token.
    ///
    /// Returns `None` at end of input and for tokens that cannot start a
    /// value; those are not consumed.
    pub fn parse_value(&mut self) -> Option<Node> {
        match self.current_token.kind {
            TokenKind::String => {
                let value = self.take_literal();
                self.advance();
                Some(Node::String(value))
            }
            TokenKind::Number => Some(self.parse_number()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Null => Some(self.parse_null()),
            TokenKind::LeftBrace | TokenKind::LeftBracket if self.depth >= MAX_DEPTH => {
                Some(self.skip_nested())
            }
            TokenKind::LeftBrace => Some(self.parse_object()),
            TokenKind::LeftBracket => Some(self.parse_array()),
            TokenKind::EndOfInput => {
                self.record(ParseErrorKind::UnexpectedEndOfInput);
                None
            }
            TokenKind::Illegal
            | TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Colon => {
                let found = self.current_token.kind;
                let literal = self.current_token.literal.clone();
                self.record(ParseErrorKind::UnexpectedToken { found, literal });
                None
            }
        }
    }

    fn illegal(&mut self, message: &str) -> Node {
        let literal = self.current_token.literal.clone();
        self.record(ParseErrorKind::IllegalLiteral {
            message: message.to_string(),
            literal,
        });
        self.advance();
        Node::Illegal(message.to_string())
    }

    /// Skips the collection opened at the current token, up to its matching
    /// closer or end of input, without recursing.
    fn skip_nested(&mut self) -> Node {
        self.record(ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH });
        let mut open = 0usize;
        loop {
            match self.current_token.kind {
                TokenKind::LeftBrace | TokenKind::LeftBracket => open += 1,
                TokenKind::RightBrace | TokenKind::RightBracket => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        self.advance();
                        break;
                    }
                }
                TokenKind::EndOfInput => break,
                _ => {}
            }
            self.advance();
        }
        Node::Illegal("Nesting too deep".to_string())
    }

    fn parse_number(&mut self) -> Node {
        match self.current_token.literal.parse::<f64>() {
            Ok(n) => {
                self.advance();
                Node::Number(n)
            }
            Err(_) => self.illegal("Error parsing number"),
        }
    }

    fn parse_boolean(&mut self) -> Node {
        let value = match self.current_token.literal.as_str() {
            "true" => true,
            "false" => false,
            _ => return self.illegal("Error parsing boolean"),
        };
        self.advance();
        Node::Boolean(value)
    }

    fn parse_null(&mut self) -> Node {
        if self.current_token.literal != "null" {
            return self.illegal("Error handling null");
        }
        self.advance();
        Node::Null
    }

    /// `{` already current. A member without a string key or without a colon
    /// ends the object early; the members read so far are kept.
    fn parse_object(&mut self) -> Node {
        let mut pairs = Vec::new();
        let mut truncated = false;
        self.depth += 1;
        self.advance(); // '{'

        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::EndOfInput) {
            if !self.check(TokenKind::String) {
                let found = self.current_token.kind;
                self.record(ParseErrorKind::ExpectedKey { found });
                truncated = true;
                break;
            }
            let key = self.take_literal();
            self.advance();

            if !self.check(TokenKind::Colon) {
                let found = self.current_token.kind;
                self.record(ParseErrorKind::ExpectedColon { key, found });
                truncated = true;
                break;
            }
            self.advance();

            let value = self
                .parse_value()
                .unwrap_or_else(|| Node::Illegal("Missing value".to_string()));
            pairs.push(Property::new(key, value));

            if self.check(TokenKind::Comma) {
                if self.peek_token.is(TokenKind::RightBrace) {
                    self.record(ParseErrorKind::TrailingComma {
                        found: TokenKind::RightBrace,
                    });
                }
                self.advance();
            } else if !self.check(TokenKind::RightBrace) && !self.check(TokenKind::EndOfInput) {
                let found = self.current_token.kind;
                self.record(ParseErrorKind::ExpectedComma { found });
            }
        }

        if self.check(TokenKind::RightBrace) {
            self.advance();
        } else if !truncated {
            let found = self.current_token.kind;
            self.record(ParseErrorKind::UnclosedObject { found });
        }

        self.depth -= 1;
        Node::Object(pairs)
    }

    /// `[` already current. The token after the loop is always consumed,
    /// whether or not it is the closing `]`.
    fn parse_array(&mut self) -> Node {
        let mut elements = Vec::new();
        self.depth += 1;
        self.advance(); // '['

        while !self.check(TokenKind::RightBracket) && !self.check(TokenKind::EndOfInput) {
            if let Some(element) = self.parse_value() {
                elements.push(element);
            }

            if self.check(TokenKind::Comma) {
                if self.peek_token.is(TokenKind::RightBracket) {
                    self.record(ParseErrorKind::TrailingComma {
                        found: TokenKind::RightBracket,
                    });
                }
                self.advance();
            } else {
                break;
            }

            if self.check(TokenKind::RightBracket) {
                self.advance();
            }
        }

        if !self.check(TokenKind::RightBracket) {
            let found = self.current_token.kind;
            self.record(ParseErrorKind::UnclosedArray { found });
        }
        self.advance();

        self.depth -= 1;
        Node::Array(elements)
    }
}

/// Parses a token sequence produced by [`lexer::tokenize`].
pub fn parse_root(tokens: Vec<Token>) -> RootNode {
    Parser::new(tokens).parse_root()
}

/// Tokenizes and parses `input`, leniently.
pub fn parse(input: &str) -> RootNode {
    parse_root(lexer::tokenize(input))
}

/// Tokenizes and parses `input`, failing on the first diagnostic.
pub fn parse_strict(input: &str) -> Result<RootNode, ParseError> {
    Parser::new(lexer::tokenize(input)).parse_root_strict()
}
