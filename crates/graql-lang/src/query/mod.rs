//! Text-to-AST pipeline.
//!
//! Stages: tokenize → parse → validate. The first error from any stage is returned.

#[cfg(test)]
mod mod_tests;

use graql_core::{Pattern, Query};

use crate::Result;
use crate::analyze;
use crate::parser::{Parser, tokenize};

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Configurable entry point.
///
/// Create with [`new`](Self::new), optionally configure fuel limits and validation,
/// then call one of the parse methods.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'src> {
    source: &'src str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
    validate: bool,
}

impl<'src> QueryParser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            validate: true,
        }
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// One unit is spent per consumed token.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set nesting depth limit for pattern blocks. None = infinite.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Toggle semantic validation of parsed queries. On by default.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn query(&self) -> Result<Query> {
        let mut parser = self.parser()?;
        let query = parser.eof_query()?;
        log::debug!(
            "parsed {} query using {} fuel",
            query.kind(),
            parser.exec_fuel_consumed()
        );
        self.check(&query)?;
        Ok(query)
    }

    pub fn query_list(&self) -> Result<Vec<Query>> {
        let mut parser = self.parser()?;
        let queries = parser.eof_query_list()?;
        log::debug!("parsed {} queries", queries.len());
        for query in &queries {
            self.check(query)?;
        }
        Ok(queries)
    }

    pub fn pattern(&self) -> Result<Pattern> {
        let mut parser = self.parser()?;
        Ok(parser.eof_pattern()?)
    }

    pub fn pattern_list(&self) -> Result<Vec<Pattern>> {
        let mut parser = self.parser()?;
        Ok(parser.eof_pattern_list()?)
    }

    fn parser(&self) -> Result<Parser<'src>> {
        let tokens = tokenize(self.source)?;
        Ok(Parser::new(self.source, tokens)
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel))
    }

    fn check(&self, query: &Query) -> Result<()> {
        if self.validate {
            analyze::validate(query)?;
        }
        Ok(())
    }
}
