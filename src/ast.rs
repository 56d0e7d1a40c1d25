//! # JSON Syntax Tree
//!
//! This module defines the tokens produced by the [lexer](crate::lexer) and
//! the tree the [parser](crate::parser) builds from them.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens: a [`TokenKind`] plus the literal text
//! - **[nodes]** - Tree nodes: [`Node`], [`Property`] and the [`RootNode`]
//!
//! ## Pipeline
//!
//! ```text
//! text ──lexer──▶ Vec<Token> ──parser──▶ RootNode ──convert──▶ Value
//! ```
//!
//! ## Ownership
//!
//! The tree is strict: every parent owns its children, nothing is shared and
//! there are no back references.
//!
//! ## Illegal Values
//!
//! A value the parser could not build becomes [`Node::Illegal`] with a
//! message. It sits in the tree like any other child, so a single bad
//! literal never aborts the rest of the document:
//!
//! ```text
//! {"a": -, "b": 2}   →   {"a": Illegal(Error parsing number), "b": 2.000000}
//! ```
pub mod nodes;
pub mod tokens;

pub use nodes::{Node, Property, RootNode};
pub use tokens::{Token, TokenKind};
