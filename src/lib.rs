pub mod ast;
pub mod cli;
pub mod convert;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Node, Property, RootNode, Token, TokenKind};
pub use convert::{from_str, to_runtime_value};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{tokenize, Lexer, Position};
pub use parser::{parse, parse_root, parse_strict, Parser};
pub use value::Value;
