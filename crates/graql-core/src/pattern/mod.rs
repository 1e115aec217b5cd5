//! The pattern algebra: statements combined by conjunction, disjunction and negation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::statement::{
    AttributeStatement, InstanceStatement, RelationStatement, Statement, ThingStatement,
    TypeStatement, VariableCollector,
};
use crate::variable::Variable;
use crate::visitor::Visitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Statement(Statement),
    Conjunction(Conjunction),
    Disjunction(Disjunction),
    Negation(Negation),
}

impl Pattern {
    /// Variables referenced anywhere in the pattern, in source order, duplicates kept.
    pub fn variables(&self) -> Vec<Variable> {
        let mut collector = VariableCollector::default();
        collector.visit_pattern(self);
        collector.vars
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Self::Statement(stmt) => Some(stmt),
            _ => None,
        }
    }
}

/// `{ $x isa movie; $y isa person; };`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Conjunction {
    pub patterns: Vec<Pattern>,
}

impl Conjunction {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

/// `{ $x isa movie; } or { $x isa person; };`
///
/// Branch order carries no meaning: two disjunctions are equal when they hold
/// the same branches with the same multiplicities.
#[derive(Debug, Clone, Serialize)]
pub struct Disjunction {
    pub branches: Vec<Conjunction>,
}

impl Disjunction {
    pub fn new(branches: Vec<Conjunction>) -> Self {
        Self { branches }
    }
}

impl PartialEq for Disjunction {
    fn eq(&self, other: &Self) -> bool {
        if self.branches.len() != other.branches.len() {
            return false;
        }
        let count = |branches: &[Conjunction], needle: &Conjunction| {
            branches.iter().filter(|b| *b == needle).count()
        };
        self.branches
            .iter()
            .all(|b| count(&self.branches, b) == count(&other.branches, b))
    }
}

impl Eq for Disjunction {}

impl Hash for Disjunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for branch in &self.branches {
            let mut hasher = DefaultHasher::new();
            branch.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        self.branches.len().hash(state);
        combined.hash(state);
    }
}

/// `not { $x isa movie; };`
///
/// Variables inside a negation never bind for the enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Negation {
    pub patterns: Vec<Pattern>,
}

impl Negation {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

impl From<Statement> for Pattern {
    fn from(stmt: Statement) -> Self {
        Self::Statement(stmt)
    }
}

impl From<Conjunction> for Pattern {
    fn from(conj: Conjunction) -> Self {
        Self::Conjunction(conj)
    }
}

impl From<Disjunction> for Pattern {
    fn from(disj: Disjunction) -> Self {
        Self::Disjunction(disj)
    }
}

impl From<Negation> for Pattern {
    fn from(neg: Negation) -> Self {
        Self::Negation(neg)
    }
}

macro_rules! statement_patterns {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                fn from(stmt: $ty) -> Self {
                    Self::Statement(Statement::from(stmt))
                }
            }
        )*
    };
}

statement_patterns!(
    TypeStatement,
    InstanceStatement,
    ThingStatement,
    RelationStatement,
    AttributeStatement,
);
