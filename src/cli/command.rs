//! Execute jtree commands against JSON input

use std::{fs, path::PathBuf};

use super::{value_to_json, select, CliError};
use crate::{Lexer, Parser, RootNode, Token};

/// Which stage of the pipeline to run and print
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the token stream
    Tokens,
    /// Print the debug rendering of the syntax tree
    Ast,
    /// Print the converted runtime value as JSON
    Eval,
    /// Print one field of the converted value
    Get { path: String },
}

/// Options for a jtree invocation
#[derive(Debug, Clone)]
pub struct Options {
    pub command: Command,
    /// JSON text given directly
    pub input: Option<String>,
    /// File to read when `input` is absent
    pub file: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Fail on the first parse diagnostic instead of truncating silently
    pub strict: bool,
}

impl Options {
    pub fn new(command: Command) -> Self {
        Options {
            command,
            input: None,
            file: None,
            pretty: false,
            strict: false,
        }
    }
}

/// Result of a command
#[derive(Debug)]
pub enum Output {
    Tokens(Vec<Token>),
    Ast(RootNode),
    Value(serde_json::Value),
}

impl Output {
    /// Text printed to stdout for this output.
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        match self {
            Output::Tokens(tokens) => Ok(tokens
                .iter()
                .map(|t| {
                    format!(
                        "{:<13} {:?} @{}:{}",
                        format!("{:?}", t.kind),
                        t.literal,
                        t.position.line,
                        t.position.column
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
            Output::Ast(root) => Ok(root.to_string()),
            Output::Value(json) => {
                let text = if pretty {
                    serde_json::to_string_pretty(json)?
                } else {
                    serde_json::to_string(json)?
                };
                Ok(text)
            }
        }
    }
}

fn read_input(options: &Options) -> Result<String, CliError> {
    match (&options.input, &options.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(CliError::NoInput),
    }
}

fn parse_document(text: &str, strict: bool) -> Result<RootNode, CliError> {
    let mut parser = Parser::new(Lexer::new(text).tokenize());
    if strict {
        return Ok(parser.parse_root_strict()?);
    }

    let root = parser.parse_root();
    for diagnostic in parser.diagnostics() {
        tracing::info!(%diagnostic, "lenient parse");
    }
    Ok(root)
}

/// Execute a jtree command
pub fn execute(options: &Options) -> Result<Output, CliError> {
    let text = read_input(options)?;

    match &options.command {
        Command::Tokens => Ok(Output::Tokens(Lexer::new(&text).tokenize())),
        Command::Ast => Ok(Output::Ast(parse_document(&text, options.strict)?)),
        Command::Eval => {
            let value = parse_document(&text, options.strict)?.to_runtime_value();
            Ok(Output::Value(value_to_json(&value)))
        }
        Command::Get { path } => {
            let value = parse_document(&text, options.strict)?.to_runtime_value();
            let field = select(&value, path)?;
            Ok(Output::Value(value_to_json(field)))
        }
    }
}
