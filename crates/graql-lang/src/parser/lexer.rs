//! Lexer for Graql query text.
//!
//! Produces borrowed tokens with byte spans and line/column positions. Whitespace and
//! comments are dropped. The first unrecognized character stops lexing with a
//! [`LexError`]; a lone quote is reported as an unterminated string.

use logos::Logos;

use super::syntax_kind::SyntaxKind;
use crate::diagnostics::{LineIndex, Position, Span};

/// Zero-copy token: kind, source slice and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: SyntaxKind,
    pub text: &'src str,
    pub span: Span,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedChar {
        ch: char,
        span: Span,
        position: Position,
    },

    #[error("unterminated string starting at {position}")]
    UnterminatedString { span: Span, position: Position },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } | LexError::UnterminatedString { span, .. } => {
                *span
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnterminatedString { position, .. } => *position,
        }
    }
}

/// Tokenizes source, skipping trivia.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        let position = index.position(range.start);

        let Ok(kind) = result else {
            let ch = source[range.start..].chars().next().unwrap_or('\0');
            let error = if matches!(ch, '"' | '\'') {
                LexError::UnterminatedString {
                    span: Span::new(range.start, source.len()),
                    position,
                }
            } else {
                LexError::UnexpectedChar {
                    ch,
                    span: Span::new(range.start, range.start + ch.len_utf8()),
                    position,
                }
            };
            return Err(error);
        };

        if kind.is_trivia() {
            continue;
        }
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span,
            position,
        });
    }

    log::trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Decodes the body of a string literal, quotes included in `text`.
///
/// Only the delimiting quote and the backslash itself are escapes; any other
/// backslash sequence is kept verbatim, so `"\d+"` stays a usable regex.
pub fn unescape(text: &str) -> String {
    let mut chars = text.chars();
    let quote = chars.next().unwrap_or('"');
    let body = chars.as_str();
    let body = body.strip_suffix(quote).unwrap_or(body);

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && (next == quote || next == '\\')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(ch);
    }
    out
}
