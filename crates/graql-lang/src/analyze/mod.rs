//! Semantic validation of parsed or built queries.
//!
//! Passes run in order and stop at the first error:
//! - Structure: non-empty clauses, blocks and statements (structure)
//! - Aggregates: every method but `count` names a variable
//! - Scope: deleted and selected variables are bound by `match` (scope)
//! - Compute: inputs, algorithms and arguments per method (compute)

mod compute;
mod error;
mod scope;
mod structure;

#[cfg(test)]
mod compute_tests;

use graql_core::{Aggregate, AggregateMethod, Query};

pub use compute::validate_compute;
pub use error::{Clause, ValidationError};
pub use scope::{bound_variables, validate_scope};
pub use structure::validate_structure;

/// Runs every pass over `query`.
pub fn validate(query: &Query) -> Result<(), ValidationError> {
    validate_structure(query)?;
    validate_aggregate(query)?;
    validate_scope(query)?;
    if let Query::Compute(compute) = query {
        validate_compute(compute)?;
    }
    log::debug!("validated {} query", query.kind());
    Ok(())
}

fn validate_aggregate(query: &Query) -> Result<(), ValidationError> {
    let aggregate = match query {
        Query::GetAggregate(q) => &q.aggregate,
        Query::GetGroupAggregate(q) => &q.aggregate,
        _ => return Ok(()),
    };
    check_aggregate_variable(aggregate)
}

fn check_aggregate_variable(aggregate: &Aggregate) -> Result<(), ValidationError> {
    if aggregate.method != AggregateMethod::Count && aggregate.var.is_none() {
        return Err(ValidationError::MissingAggregateVariable {
            method: aggregate.method.keyword(),
        });
    }
    Ok(())
}
