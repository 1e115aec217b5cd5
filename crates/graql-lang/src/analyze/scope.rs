//! Variable scope checks.
//!
//! A variable is bound by a `match` clause when it occurs in one of its statements
//! outside any negation. Variables mentioned only inside `not { ... }` are constraints,
//! not bindings. Anonymous variables are never checked.
//!
//! - `delete` statements may only reference bound variables.
//! - `get`, `sort`, `group` and aggregate variables must be bound; once `get` names
//!   variables, the later clauses must pick from those.

use indexmap::IndexSet;

use graql_core::visitor::{Visitor, walk_match_clause};
use graql_core::{Aggregate, GetGroupQuery, GetQuery, MatchClause, Negation, Query, Variable};

use super::error::ValidationError;

pub fn validate_scope(query: &Query) -> Result<(), ValidationError> {
    match query {
        Query::Delete(q) => {
            let bound = bound_variables(&q.match_clause);
            let referenced = q.statements.iter().flat_map(|stmt| stmt.variables());
            for variable in referenced {
                if variable.is_named() && !bound.contains(&variable) {
                    return Err(ValidationError::VariableOutOfScope { variable });
                }
            }
            Ok(())
        }
        Query::Get(q) => check_get(q).map(|_| ()),
        Query::GetAggregate(q) => {
            let selected = check_get(&q.get)?;
            check_aggregate(&selected, &q.aggregate)
        }
        Query::GetGroup(q) => check_group(q).map(|_| ()),
        Query::GetGroupAggregate(q) => {
            let selected = check_group(&q.group)?;
            check_aggregate(&selected, &q.aggregate)
        }
        Query::Define(_) | Query::Undefine(_) | Query::Insert(_) | Query::Compute(_) => Ok(()),
    }
}

/// Named variables bound by `clause`, in first-occurrence order.
pub fn bound_variables(clause: &MatchClause) -> IndexSet<Variable> {
    let mut collector = BindingCollector {
        bound: IndexSet::new(),
    };
    walk_match_clause(&mut collector, clause);
    collector.bound
}

struct BindingCollector {
    bound: IndexSet<Variable>,
}

impl Visitor for BindingCollector {
    fn visit_negation(&mut self, _neg: &Negation) {}

    fn visit_variable(&mut self, var: &Variable) {
        if var.is_named() {
            self.bound.insert(var.clone());
        }
    }
}

/// Returns the variables later clauses may refer to.
fn check_get(get: &GetQuery) -> Result<IndexSet<Variable>, ValidationError> {
    let bound = bound_variables(&get.match_clause);
    for var in &get.vars {
        in_scope(&bound, var)?;
    }
    let selected: IndexSet<Variable> = if get.vars.is_empty() {
        bound
    } else {
        get.vars.iter().filter(|v| v.is_named()).cloned().collect()
    };
    if let Some(sort) = &get.filters.sort {
        in_scope(&selected, &sort.var)?;
    }
    Ok(selected)
}

fn check_group(group: &GetGroupQuery) -> Result<IndexSet<Variable>, ValidationError> {
    let selected = check_get(&group.get)?;
    in_scope(&selected, &group.var)?;
    Ok(selected)
}

fn check_aggregate(
    selected: &IndexSet<Variable>,
    aggregate: &Aggregate,
) -> Result<(), ValidationError> {
    match &aggregate.var {
        Some(var) => in_scope(selected, var),
        None => Ok(()),
    }
}

fn in_scope(scope: &IndexSet<Variable>, var: &Variable) -> Result<(), ValidationError> {
    if var.is_named() && !scope.contains(var) {
        return Err(ValidationError::GetVariableOutOfScope {
            variable: var.clone(),
        });
    }
    Ok(())
}
