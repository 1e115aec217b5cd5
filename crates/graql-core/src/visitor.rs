//! AST Visitor pattern.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_negation(&mut self, neg: &Negation) {
//!         // Pre-order logic
//!         walk_negation(self, neg);
//!         // Post-order logic
//!     }
//! }
//! ```

use crate::label::{Label, TypeRef};
use crate::pattern::{Conjunction, Disjunction, Negation, Pattern};
use crate::query::{Aggregate, ComputeQuery, GetQuery, MatchClause, Query};
use crate::statement::{
    AttributeStatement, Comparable, Comparison, Containable, HasAttribute, HasValue,
    InstanceStatement, Isa, Operation, RelationStatement, Statement, ThingConstraint,
    ThingStatement, TypeProperty, TypeStatement,
};
use crate::variable::Variable;

pub trait Visitor: Sized {
    fn visit_query(&mut self, query: &Query) {
        walk_query(self, query);
    }

    fn visit_match_clause(&mut self, clause: &MatchClause) {
        walk_match_clause(self, clause);
    }

    fn visit_get(&mut self, get: &GetQuery) {
        walk_get(self, get);
    }

    fn visit_aggregate(&mut self, aggregate: &Aggregate) {
        walk_aggregate(self, aggregate);
    }

    fn visit_compute(&mut self, _compute: &ComputeQuery) {
        // Leaf: compute inputs hold labels and ids, never variables
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        walk_pattern(self, pattern);
    }

    fn visit_conjunction(&mut self, conj: &Conjunction) {
        walk_conjunction(self, conj);
    }

    fn visit_disjunction(&mut self, disj: &Disjunction) {
        walk_disjunction(self, disj);
    }

    fn visit_negation(&mut self, neg: &Negation) {
        walk_negation(self, neg);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_type_statement(&mut self, stmt: &TypeStatement) {
        walk_type_statement(self, stmt);
    }

    fn visit_type_property(&mut self, prop: &TypeProperty) {
        walk_type_property(self, prop);
    }

    fn visit_instance_statement(&mut self, stmt: &InstanceStatement) {
        walk_instance_statement(self, stmt);
    }

    fn visit_thing(&mut self, stmt: &ThingStatement) {
        walk_thing(self, stmt);
    }

    fn visit_relation(&mut self, stmt: &RelationStatement) {
        walk_relation(self, stmt);
    }

    fn visit_attribute(&mut self, stmt: &AttributeStatement) {
        walk_attribute(self, stmt);
    }

    fn visit_isa(&mut self, isa: &Isa) {
        self.visit_type_ref(&isa.type_);
    }

    fn visit_has_attribute(&mut self, has: &HasAttribute) {
        walk_has_attribute(self, has);
    }

    fn visit_operation(&mut self, op: &Operation) {
        walk_operation(self, op);
    }

    fn visit_type_ref(&mut self, type_ref: &TypeRef) {
        match type_ref {
            TypeRef::Label(label) => self.visit_label(label),
            TypeRef::Var(var) => self.visit_variable(var),
        }
    }

    fn visit_label(&mut self, _label: &Label) {
        // Leaf node
    }

    fn visit_variable(&mut self, _var: &Variable) {
        // Leaf node
    }
}

pub fn walk_query<V: Visitor>(visitor: &mut V, query: &Query) {
    match query {
        Query::Define(q) => {
            for stmt in &q.statements {
                visitor.visit_type_statement(stmt);
            }
        }
        Query::Undefine(q) => {
            for stmt in &q.statements {
                visitor.visit_type_statement(stmt);
            }
        }
        Query::Insert(q) => {
            if let Some(clause) = &q.match_clause {
                visitor.visit_match_clause(clause);
            }
            for stmt in &q.statements {
                visitor.visit_instance_statement(stmt);
            }
        }
        Query::Delete(q) => {
            visitor.visit_match_clause(&q.match_clause);
            for stmt in &q.statements {
                visitor.visit_instance_statement(stmt);
            }
        }
        Query::Get(q) => visitor.visit_get(q),
        Query::GetAggregate(q) => {
            visitor.visit_get(&q.get);
            visitor.visit_aggregate(&q.aggregate);
        }
        Query::GetGroup(q) => {
            visitor.visit_get(&q.get);
            visitor.visit_variable(&q.var);
        }
        Query::GetGroupAggregate(q) => {
            visitor.visit_get(&q.group.get);
            visitor.visit_variable(&q.group.var);
            visitor.visit_aggregate(&q.aggregate);
        }
        Query::Compute(q) => visitor.visit_compute(q),
    }
}

pub fn walk_match_clause<V: Visitor>(visitor: &mut V, clause: &MatchClause) {
    for pattern in &clause.patterns {
        visitor.visit_pattern(pattern);
    }
}

pub fn walk_get<V: Visitor>(visitor: &mut V, get: &GetQuery) {
    visitor.visit_match_clause(&get.match_clause);
    for var in &get.vars {
        visitor.visit_variable(var);
    }
    if let Some(sort) = &get.filters.sort {
        visitor.visit_variable(&sort.var);
    }
}

pub fn walk_aggregate<V: Visitor>(visitor: &mut V, aggregate: &Aggregate) {
    if let Some(var) = &aggregate.var {
        visitor.visit_variable(var);
    }
}

pub fn walk_pattern<V: Visitor>(visitor: &mut V, pattern: &Pattern) {
    match pattern {
        Pattern::Statement(s) => visitor.visit_statement(s),
        Pattern::Conjunction(c) => visitor.visit_conjunction(c),
        Pattern::Disjunction(d) => visitor.visit_disjunction(d),
        Pattern::Negation(n) => visitor.visit_negation(n),
    }
}

pub fn walk_conjunction<V: Visitor>(visitor: &mut V, conj: &Conjunction) {
    for pattern in &conj.patterns {
        visitor.visit_pattern(pattern);
    }
}

pub fn walk_disjunction<V: Visitor>(visitor: &mut V, disj: &Disjunction) {
    for branch in &disj.branches {
        visitor.visit_conjunction(branch);
    }
}

pub fn walk_negation<V: Visitor>(visitor: &mut V, neg: &Negation) {
    for pattern in &neg.patterns {
        visitor.visit_pattern(pattern);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Type(s) => visitor.visit_type_statement(s),
        Statement::Instance(s) => visitor.visit_instance_statement(s),
    }
}

pub fn walk_type_statement<V: Visitor>(visitor: &mut V, stmt: &TypeStatement) {
    visitor.visit_type_ref(&stmt.subject);
    for prop in &stmt.properties {
        visitor.visit_type_property(prop);
    }
}

pub fn walk_type_property<V: Visitor>(visitor: &mut V, prop: &TypeProperty) {
    match prop {
        TypeProperty::Sub { supertype, .. } => visitor.visit_type_ref(supertype),
        TypeProperty::Key(t) | TypeProperty::Has(t) | TypeProperty::Plays(t) => {
            visitor.visit_type_ref(t)
        }
        TypeProperty::Relates { role, overridden } => {
            visitor.visit_type_ref(role);
            if let Some(overridden) = overridden {
                visitor.visit_type_ref(overridden);
            }
        }
        TypeProperty::When(patterns) => {
            for pattern in patterns {
                visitor.visit_pattern(pattern);
            }
        }
        TypeProperty::Then(stmts) => {
            for stmt in stmts {
                visitor.visit_instance_statement(stmt);
            }
        }
        TypeProperty::Type(label) => visitor.visit_label(label),
        TypeProperty::Abstract | TypeProperty::Value(_) | TypeProperty::Regex(_) => {}
    }
}

pub fn walk_instance_statement<V: Visitor>(visitor: &mut V, stmt: &InstanceStatement) {
    match stmt {
        InstanceStatement::Thing(s) => visitor.visit_thing(s),
        InstanceStatement::Relation(s) => visitor.visit_relation(s),
        InstanceStatement::Attribute(s) => visitor.visit_attribute(s),
    }
}

pub fn walk_thing<V: Visitor>(visitor: &mut V, stmt: &ThingStatement) {
    visitor.visit_variable(&stmt.var);
    match &stmt.constraint {
        Some(ThingConstraint::Isa(isa)) => visitor.visit_isa(isa),
        Some(ThingConstraint::Neq(other)) => visitor.visit_variable(other),
        Some(ThingConstraint::Id(_)) | None => {}
    }
    for has in &stmt.attributes {
        visitor.visit_has_attribute(has);
    }
}

pub fn walk_relation<V: Visitor>(visitor: &mut V, stmt: &RelationStatement) {
    visitor.visit_variable(&stmt.var);
    for player in &stmt.players {
        if let Some(role) = &player.role {
            visitor.visit_type_ref(role);
        }
        visitor.visit_variable(&player.player);
    }
    if let Some(isa) = &stmt.isa {
        visitor.visit_isa(isa);
    }
    for has in &stmt.attributes {
        visitor.visit_has_attribute(has);
    }
}

pub fn walk_attribute<V: Visitor>(visitor: &mut V, stmt: &AttributeStatement) {
    visitor.visit_variable(&stmt.var);
    visitor.visit_operation(&stmt.operation);
    if let Some(isa) = &stmt.isa {
        visitor.visit_isa(isa);
    }
    for has in &stmt.attributes {
        visitor.visit_has_attribute(has);
    }
}

pub fn walk_has_attribute<V: Visitor>(visitor: &mut V, has: &HasAttribute) {
    visitor.visit_label(&has.label);
    match &has.value {
        HasValue::Var(var) => visitor.visit_variable(var),
        HasValue::Operation(op) => visitor.visit_operation(op),
    }
}

pub fn walk_operation<V: Visitor>(visitor: &mut V, op: &Operation) {
    match op {
        Operation::Comparison(Comparison::Compare(_, Comparable::Var(var)))
        | Operation::Comparison(Comparison::Contains(Containable::Var(var))) => {
            visitor.visit_variable(var)
        }
        Operation::Assignment(_) | Operation::Comparison(_) => {}
    }
}
