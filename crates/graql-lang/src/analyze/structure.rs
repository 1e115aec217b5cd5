//! Structural checks for ASTs that bypassed the parser.
//!
//! The grammar already rejects empty clauses and blocks, statements without properties
//! and relations without role players. Builder-made queries can still contain them, as
//! well as names, labels and reals that have no source text.

use graql_core::visitor::{
    Visitor, walk_conjunction, walk_disjunction, walk_negation, walk_operation, walk_query,
    walk_relation, walk_thing, walk_type_property, walk_type_statement,
};
use graql_core::{
    Comparable, Comparison, ComputeInput, ComputeQuery, Conjunction, Disjunction, Label,
    Negation, Operation, Query, RelationStatement, ThingConstraint, ThingStatement, TypeProperty,
    TypeStatement, Value, Variable,
};

use super::error::{Clause, ValidationError};
use crate::parser::syntax_kind::token_sets::LABEL_FIRST;
use crate::parser::{SyntaxKind, TokenSet, tokenize};

pub fn validate_structure(query: &Query) -> Result<(), ValidationError> {
    check_clause(query)?;
    let mut visitor = StructureValidator { error: None };
    visitor.visit_query(query);
    match visitor.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn check_clause(query: &Query) -> Result<(), ValidationError> {
    match query {
        Query::Define(q) => require(Clause::Define, q.statements.len()),
        Query::Undefine(q) => require(Clause::Undefine, q.statements.len()),
        Query::Insert(q) => require(Clause::Insert, q.statements.len()),
        Query::Delete(q) => require(Clause::Delete, q.statements.len()),
        _ => Ok(()),
    }
}

fn require(clause: Clause, len: usize) -> Result<(), ValidationError> {
    if len < clause.minimum() {
        return Err(ValidationError::MissingPatterns { clause });
    }
    Ok(())
}

/// Whether `text` lexes as exactly one token of an accepted kind.
fn lexes_as(text: &str, accepted: TokenSet) -> bool {
    matches!(
        tokenize(text).as_deref(),
        Ok([token]) if token.text.len() == text.len() && accepted.contains(token.kind)
    )
}

fn check_label(label: &Label) -> Result<(), ValidationError> {
    if lexes_as(label.as_str(), LABEL_FIRST) {
        return Ok(());
    }
    Err(ValidationError::InvalidLabel {
        label: label.as_str().to_string(),
    })
}

fn check_variable(var: &Variable) -> Result<(), ValidationError> {
    let Some(name) = var.name() else {
        return Ok(());
    };
    if lexes_as(&format!("${name}"), TokenSet::single(SyntaxKind::VarNamed)) {
        return Ok(());
    }
    Err(ValidationError::InvalidVariableName {
        name: name.to_string(),
    })
}

fn check_value(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Real(r) if !r.is_finite() => Err(ValidationError::NonFiniteReal {
            value: r.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Keeps the first error in traversal order.
struct StructureValidator {
    error: Option<ValidationError>,
}

impl StructureValidator {
    fn report(&mut self, result: Result<(), ValidationError>) {
        if self.error.is_none()
            && let Err(error) = result
        {
            self.error = Some(error);
        }
    }
}

impl Visitor for StructureValidator {
    fn visit_query(&mut self, query: &Query) {
        if let Some(clause) = query.match_clause() {
            self.report(require(Clause::Match, clause.patterns.len()));
        }
        walk_query(self, query);
    }

    fn visit_conjunction(&mut self, conj: &Conjunction) {
        self.report(require(Clause::Conjunction, conj.patterns.len()));
        walk_conjunction(self, conj);
    }

    fn visit_disjunction(&mut self, disj: &Disjunction) {
        self.report(require(Clause::Disjunction, disj.branches.len()));
        walk_disjunction(self, disj);
    }

    fn visit_negation(&mut self, neg: &Negation) {
        self.report(require(Clause::Negation, neg.patterns.len()));
        walk_negation(self, neg);
    }

    fn visit_type_statement(&mut self, stmt: &TypeStatement) {
        if stmt.properties.is_empty() {
            self.report(Err(ValidationError::EmptyStatement {
                statement: stmt.to_string(),
            }));
        }
        walk_type_statement(self, stmt);
    }

    fn visit_type_property(&mut self, prop: &TypeProperty) {
        match prop {
            TypeProperty::When(patterns) => self.report(require(Clause::When, patterns.len())),
            TypeProperty::Then(stmts) => self.report(require(Clause::Then, stmts.len())),
            _ => {}
        }
        walk_type_property(self, prop);
    }

    fn visit_thing(&mut self, stmt: &ThingStatement) {
        if stmt.constraint.is_none() && stmt.attributes.is_empty() {
            self.report(Err(ValidationError::EmptyStatement {
                statement: stmt.to_string(),
            }));
        }
        if matches!(stmt.constraint, Some(ThingConstraint::Neq(_))) && !stmt.attributes.is_empty()
        {
            self.report(Err(ValidationError::AttributesAfterNeq {
                statement: stmt.to_string(),
            }));
        }
        walk_thing(self, stmt);
    }

    fn visit_relation(&mut self, stmt: &RelationStatement) {
        if stmt.players.is_empty() {
            self.report(Err(ValidationError::MissingRolePlayers {
                statement: stmt.to_string(),
            }));
        }
        walk_relation(self, stmt);
    }

    fn visit_operation(&mut self, op: &Operation) {
        match op {
            Operation::Assignment(value)
            | Operation::Comparison(Comparison::Compare(_, Comparable::Value(value))) => {
                self.report(check_value(value))
            }
            Operation::Comparison(_) => {}
        }
        walk_operation(self, op);
    }

    fn visit_compute(&mut self, compute: &ComputeQuery) {
        for input in compute.inputs() {
            if let ComputeInput::Of(labels) | ComputeInput::In(labels) = input {
                for label in labels {
                    self.report(check_label(label));
                }
            }
        }
    }

    fn visit_label(&mut self, label: &Label) {
        self.report(check_label(label));
    }

    fn visit_variable(&mut self, var: &Variable) {
        self.report(check_variable(var));
    }
}
