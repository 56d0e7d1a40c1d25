use std::fmt;

use crate::ast::{Token, TokenKind};

/// A location in the input, 1-based and counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Scans JSON text into tokens.
///
/// Lexing never fails: anything unrecognized comes out as a
/// [`TokenKind::Illegal`] token and scanning carries on from the next
/// character.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    location: Position,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            location: Position::default(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.location.line += 1;
                self.location.column = 1;
            } else {
                self.location.column += 1;
            }
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\n' | '\t' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn single(&mut self, kind: TokenKind, literal: char) -> Token {
        let start = self.location;
        self.advance();
        Token::new(kind, literal, start)
    }

    /// Matches `keyword` starting at the current character. On a mismatch
    /// only the current character is consumed, as an illegal token, and the
    /// rest is scanned again from the next position.
    fn read_keyword(&mut self, keyword: &str, kind: TokenKind) -> Token {
        let start = self.location;
        let matched = keyword
            .chars()
            .enumerate()
            .all(|(offset, expected)| self.peek_char(offset) == Some(expected));

        if matched {
            for _ in keyword.chars() {
                self.advance();
            }
            return Token::new(kind, keyword, start);
        }

        let literal = self.current_char().map(String::from).unwrap_or_default();
        self.advance();
        Token::new(TokenKind::Illegal, literal, start)
    }

    fn read_string(&mut self) -> Token {
        let start = self.location;
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '"' {
                return Token::new(TokenKind::String, result, start);
            }
            result.push(ch);
        }

        // Unterminated: the literal runs to the end of input.
        Token::new(TokenKind::String, result, start)
    }

    fn read_digits(&mut self, into: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                into.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.location;
        let mut number = String::new();

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        self.read_digits(&mut number);

        if self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            number.push('.');
            self.advance();
            self.read_digits(&mut number);
        }

        Token::new(TokenKind::Number, number, start)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.current_char() {
            None => Token::eof(self.location),
            Some('{') => self.single(TokenKind::LeftBrace, '{'),
            Some('}') => self.single(TokenKind::RightBrace, '}'),
            Some('[') => self.single(TokenKind::LeftBracket, '['),
            Some(']') => self.single(TokenKind::RightBracket, ']'),
            Some(':') => self.single(TokenKind::Colon, ':'),
            Some(',') => self.single(TokenKind::Comma, ','),
            Some('t') => self.read_keyword("true", TokenKind::True),
            Some('f') => self.read_keyword("false", TokenKind::False),
            Some('n') => self.read_keyword("null", TokenKind::Null),
            Some('"') => self.read_string(),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.read_number(),
            Some(ch) => self.single(TokenKind::Illegal, ch),
        }
    }

    /// Scans the whole input. The result always ends with exactly one
    /// [`TokenKind::EndOfInput`] token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::EndOfInput);
            tokens.push(token);
            if done {
                break;
            }
        }
        tracing::trace!(count = tokens.len(), "tokenized input");
        tokens
    }
}

/// Tokenizes `input` in one go.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_structural_tokens() {
    let kinds: Vec<TokenKind> = tokenize("{}[]:,").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_positions() {
    let tokens = tokenize("{\n  \"a\": 1\n}");
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(2, 3));
    assert_eq!(tokens[3].position, Position::new(2, 8));
    assert_eq!(tokens[4].position, Position::new(3, 1));
}

#[test]
fn test_next_token_after_end() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
}
