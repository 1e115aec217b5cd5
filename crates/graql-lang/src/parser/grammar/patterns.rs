//! Patterns: statements, `{ ... };` blocks, disjunctions and negations.

use graql_core::{Conjunction, Disjunction, Negation, Pattern};

use crate::Error;
use crate::parser::core::Parser;
use crate::parser::syntax_kind::SyntaxKind::*;
use crate::parser::syntax_kind::token_sets::{AGGREGATE_METHODS, PATTERN_FIRST, VARIABLES};

impl<'src> Parser<'src> {
    /// Single pattern followed by end of input.
    pub fn eof_pattern(&mut self) -> Result<Pattern, Error> {
        let pattern = self.pattern()?;
        self.expect_eof()?;
        Ok(pattern)
    }

    /// One or more patterns followed by end of input.
    pub fn eof_pattern_list(&mut self) -> Result<Vec<Pattern>, Error> {
        let patterns = self.patterns()?;
        self.expect_eof()?;
        Ok(patterns)
    }

    /// Whether the current token starts a pattern.
    ///
    /// An aggregate keyword followed by `;` or a variable ends a `match` clause without
    /// `get`: `match $x isa movie; count;`.
    pub(super) fn at_pattern_start(&self) -> bool {
        if !self.at_set(PATTERN_FIRST) {
            return false;
        }
        let next = self.nth(1);
        !(self.at_set(AGGREGATE_METHODS) && (next == Semicolon || VARIABLES.contains(next)))
    }

    /// One or more patterns.
    pub(super) fn patterns(&mut self) -> Result<Vec<Pattern>, Error> {
        if !self.at_pattern_start() {
            return Err(self.unexpected(PATTERN_FIRST));
        }
        let mut patterns = Vec::new();
        while self.at_pattern_start() {
            patterns.push(self.pattern()?);
        }
        Ok(patterns)
    }

    pub(super) fn pattern(&mut self) -> Result<Pattern, Error> {
        self.enter_recursion()?;
        let result = self.pattern_inner();
        self.exit_recursion();
        result
    }

    fn pattern_inner(&mut self) -> Result<Pattern, Error> {
        match self.current() {
            BraceOpen => {
                let first = self.pattern_block()?;
                if !self.at(KwOr) {
                    self.expect(Semicolon)?;
                    return Ok(Pattern::Conjunction(Conjunction::new(first)));
                }
                let mut branches = vec![Conjunction::new(first)];
                while self.eat(KwOr)? {
                    branches.push(Conjunction::new(self.pattern_block()?));
                }
                self.expect(Semicolon)?;
                Ok(Pattern::Disjunction(Disjunction::new(branches)))
            }
            KwNot => {
                self.bump()?;
                let patterns = self.pattern_block()?;
                self.expect(Semicolon)?;
                Ok(Pattern::Negation(Negation::new(patterns)))
            }
            _ => Ok(Pattern::Statement(self.statement()?)),
        }
    }

    /// `{ p; q; }` without the trailing `;`.
    pub(super) fn pattern_block(&mut self) -> Result<Vec<Pattern>, Error> {
        self.expect(BraceOpen)?;
        let patterns = self.patterns()?;
        self.expect(BraceClose)?;
        Ok(patterns)
    }
}
