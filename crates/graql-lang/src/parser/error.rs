use std::fmt;

use super::syntax_kind::{SyntaxKind, TokenSet};
use crate::diagnostics::{Position, Span};

/// The set of tokens the parser would have accepted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Expected(pub TokenSet);

impl Expected {
    /// Human descriptions, deduplicated. Keywords usable as labels are folded into "label".
    pub fn descriptions(&self) -> Vec<&'static str> {
        let has_label = self.0.contains(SyntaxKind::Ident);
        let mut out: Vec<&'static str> = Vec::new();
        for kind in self.0.iter() {
            if has_label && (kind.is_unreserved() || is_native_type(kind)) {
                continue;
            }
            let text = kind.describe();
            if !out.contains(&text) {
                out.push(text);
            }
        }
        out
    }
}

fn is_native_type(kind: SyntaxKind) -> bool {
    super::syntax_kind::token_sets::NATIVE_TYPES.contains(kind)
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.descriptions().as_slice() {
            [] => f.write_str("nothing"),
            [one] => f.write_str(one),
            many => write!(f, "one of {}", many.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected {found:?} at {position}, expected {expected}")]
    UnexpectedToken {
        expected: Expected,
        found: String,
        kind: SyntaxKind,
        span: Span,
        position: Position,
    },

    #[error("unexpected end of input at {position}, expected {expected}")]
    UnexpectedEof {
        expected: Expected,
        span: Span,
        position: Position,
    },

    #[error("invalid {kind} literal {text:?} at {position}")]
    InvalidLiteral {
        kind: &'static str,
        text: String,
        span: Span,
        position: Position,
    },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::InvalidLiteral { span, .. } => *span,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position, .. }
            | ParseError::InvalidLiteral { position, .. } => *position,
        }
    }
}
