use std::fmt;

use graql_core::Variable;

/// The construct whose pattern or statement list is too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Match,
    Insert,
    Delete,
    Define,
    Undefine,
    Conjunction,
    Disjunction,
    Negation,
    When,
    Then,
}

impl Clause {
    pub fn as_str(self) -> &'static str {
        match self {
            Clause::Match => "match",
            Clause::Insert => "insert",
            Clause::Delete => "delete",
            Clause::Define => "define",
            Clause::Undefine => "undefine",
            Clause::Conjunction => "conjunction",
            Clause::Disjunction => "disjunction",
            Clause::Negation => "negation",
            Clause::When => "when",
            Clause::Then => "then",
        }
    }

    /// Smallest accepted number of items.
    pub fn minimum(self) -> usize {
        match self {
            Clause::Disjunction => 2,
            _ => 1,
        }
    }

    fn items(self) -> &'static str {
        match self {
            Clause::Match | Clause::Conjunction | Clause::Negation | Clause::When => "pattern",
            Clause::Disjunction => "branches",
            Clause::Insert | Clause::Delete | Clause::Define | Clause::Undefine | Clause::Then => {
                "statement"
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic errors found in a syntactically valid query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{clause}` requires at least {} {}", .clause.minimum(), .clause.items())]
    MissingPatterns { clause: Clause },

    #[error("relation statement `{statement}` has no role players")]
    MissingRolePlayers { statement: String },

    #[error("statement `{statement}` has no properties")]
    EmptyStatement { statement: String },

    #[error("statement `{statement}` has attributes after `!=`")]
    AttributesAfterNeq { statement: String },

    #[error("`${name}` is not a valid variable name")]
    InvalidVariableName { name: String },

    #[error("`{label}` is not a valid label")]
    InvalidLabel { label: String },

    #[error("real value `{value}` is not finite")]
    NonFiniteReal { value: String },

    #[error("The deleted variable '{variable}' is out of scope of the match query.")]
    VariableOutOfScope { variable: Variable },

    #[error("The variable '{variable}' is out of scope of the query.")]
    GetVariableOutOfScope { variable: Variable },

    #[error("aggregate `{method}` requires a variable")]
    MissingAggregateVariable { method: &'static str },

    #[error("`{input}` is not a valid input for `compute {method}`")]
    InvalidComputeInput {
        method: &'static str,
        input: &'static str,
    },

    #[error("`{input}` is given more than once to `compute {method}`")]
    DuplicateComputeInput {
        method: &'static str,
        input: &'static str,
    },

    #[error("`compute {method}` requires `{input}`")]
    MissingComputeInput {
        method: &'static str,
        input: &'static str,
    },

    #[error("algorithm `{algorithm}` is not available for `compute {method}`")]
    InvalidComputeAlgorithm {
        method: &'static str,
        algorithm: &'static str,
    },

    #[error("argument `{argument}` is not accepted by algorithm `{algorithm}`")]
    InvalidComputeArgument {
        algorithm: &'static str,
        argument: &'static str,
    },
}
