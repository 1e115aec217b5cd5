//! Graql: lexer, parser and validator for the Graql query language.
//!
//! Text goes in, `graql_core` AST comes out. The AST prints back to canonical text
//! through its `Display` implementations.
//!
//! # Example
//!
//! ```
//! use graql_core::Query;
//!
//! let source = "match $x isa movie, has title \"Godfather\"; get $x;";
//! let query = graql_lang::parse_query(source).expect("valid query");
//!
//! assert!(matches!(query, Query::Get(_)));
//! assert_eq!(
//!     query.to_string(),
//!     "match\n$x isa movie, has title \"Godfather\";\nget $x;"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod parser;
pub mod query;

#[cfg(test)]
mod test_utils;

use graql_core::{Pattern, Query};

pub use analyze::ValidationError;
pub use diagnostics::{ErrorPrinter, Position, Span};
pub use parser::{LexError, ParseError};
pub use query::QueryParser;

/// Errors that can occur while turning text into a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    /// Source location, for lexer and parser errors.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Parse(e) => Some(e.span()),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex(e) => Some(e.position()),
            Error::Parse(e) => Some(e.position()),
            _ => None,
        }
    }

    /// Short annotation text placed under the offending source.
    pub(crate) fn label(&self) -> String {
        match self {
            Error::Lex(LexError::UnexpectedChar { .. }) => "unexpected character".to_owned(),
            Error::Lex(LexError::UnterminatedString { .. }) => "unterminated string".to_owned(),
            Error::Parse(
                ParseError::UnexpectedToken { expected, .. }
                | ParseError::UnexpectedEof { expected, .. },
            ) => format!("expected {expected}"),
            Error::Parse(ParseError::InvalidLiteral { kind, .. }) => format!("invalid {kind}"),
            other => other.to_string(),
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses exactly one query and validates it.
pub fn parse_query(source: &str) -> Result<Query> {
    QueryParser::new(source).query()
}

/// Parses one or more consecutive queries and validates each.
pub fn parse_query_list(source: &str) -> Result<Vec<Query>> {
    QueryParser::new(source).query_list()
}

/// Parses exactly one pattern.
pub fn parse_pattern(source: &str) -> Result<Pattern> {
    QueryParser::new(source).pattern()
}

/// Parses one or more patterns.
pub fn parse_pattern_list(source: &str) -> Result<Vec<Pattern>> {
    QueryParser::new(source).pattern_list()
}

/// Validates a query built without the parser.
pub fn validate(query: Query) -> Result<Query> {
    analyze::validate(&query)?;
    Ok(query)
}
