//! Parser infrastructure for Graql.
//!
//! # Architecture
//!
//! - The lexer (logos) turns source into borrowed, trivia-free tokens with positions.
//! - The parser is hand-written recursive descent that builds `graql_core` AST nodes
//!   directly; there is no intermediate syntax tree.
//! - Decisions use at most four tokens of lookahead (see `grammar::statements`).
//!
//! Parsing is fail-fast: the first error aborts with a positioned [`ParseError`].
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns a dedicated error as well.

pub mod error;
pub mod lexer;
pub mod syntax_kind;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use error::{Expected, ParseError};
pub use lexer::{LexError, Token, tokenize, unescape};
pub use syntax_kind::{SyntaxKind, TokenSet};
