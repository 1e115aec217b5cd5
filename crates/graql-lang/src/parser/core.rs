//! Parser state machine and low-level operations.

use super::error::{Expected, ParseError};
use super::lexer::Token;
use super::syntax_kind::{SyntaxKind, TokenSet};
use crate::Error;
use crate::diagnostics::{LineIndex, Span};

/// Recursive-descent parser over a trivia-free token stream.
///
/// Every consumed token costs one unit of exec fuel and every nested pattern block one
/// unit of recursion fuel; running out of either aborts with a dedicated [`Error`].
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token<'src>>,
    pub(super) pos: usize,
    pub(super) depth: u32,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token<'src>>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        }
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn consume_exec_fuel(&mut self) -> Result<(), Error> {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                return Err(Error::ExecFuelExhausted);
            }
            *remaining -= 1;
        }
        Ok(())
    }

    pub(super) fn bump(&mut self) -> Result<Token<'src>, Error> {
        let Some(&token) = self.tokens.get(self.pos) else {
            return Err(self.unexpected(TokenSet::EMPTY));
        };
        self.consume_exec_fuel()?;
        self.pos += 1;
        Ok(token)
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> Result<bool, Error> {
        if self.at(kind) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> Result<Token<'src>, Error> {
        self.expect_one_of(TokenSet::single(kind))
    }

    pub(super) fn expect_one_of(&mut self, set: TokenSet) -> Result<Token<'src>, Error> {
        if self.at_set(set) {
            return self.bump();
        }
        Err(self.unexpected(set))
    }

    pub(super) fn expect_eof(&self) -> Result<(), Error> {
        if self.eof() {
            return Ok(());
        }
        Err(self.unexpected(TokenSet::single(SyntaxKind::Eof)))
    }

    /// Builds the error for the current token not being in `expected`.
    pub(super) fn unexpected(&self, expected: TokenSet) -> Error {
        let expected = Expected(expected);
        let error = match self.tokens.get(self.pos) {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.text.to_owned(),
                kind: token.kind,
                span: token.span,
                position: token.position,
            },
            None => {
                let offset = self.source.len();
                ParseError::UnexpectedEof {
                    expected,
                    span: Span::empty(offset),
                    position: LineIndex::new(self.source).position(offset),
                }
            }
        };
        log::trace!("parse error: {error}");
        error.into()
    }

    pub(super) fn invalid_literal(&self, kind: &'static str, token: &Token<'_>) -> Error {
        ParseError::InvalidLiteral {
            kind,
            text: token.text.to_owned(),
            span: token.span,
            position: token.position,
        }
        .into()
    }

    pub(super) fn enter_recursion(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
