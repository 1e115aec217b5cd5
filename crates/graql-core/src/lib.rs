#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Graql query language.
//!
//! Three layers:
//! - **AST**: immutable, structurally comparable query and pattern nodes
//! - **Builder**: fluent constructors producing the same AST without parsing
//! - **Printer**: `Display` implementations emitting canonical, re-parsable text
//!
//! The lexer, parser and validator live in `graql-lang`.

pub mod builder;
pub mod label;
pub mod pattern;
pub mod printer;
pub mod query;
pub mod statement;
pub mod value;
pub mod variable;
pub mod visitor;

#[cfg(test)]
mod builder_tests;

pub use label::{Label, TypeRef};
pub use pattern::{Conjunction, Disjunction, Negation, Pattern};
pub use query::{
    Aggregate, AggregateMethod, Algorithm, ComputeArg, ComputeInput, ComputeInputKind,
    ComputeMethod, ComputeQuery, DefineQuery, DeleteQuery, Filters, GetAggregateQuery,
    GetGroupAggregateQuery, GetGroupQuery, GetQuery, InsertQuery, MatchClause, Query, QueryKind,
    SortOrder, Sorting, StatisticsMethod, UndefineQuery,
};
pub use statement::{
    AttributeStatement, Comparable, Comparator, Comparison, Containable, HasAttribute, HasValue,
    InstanceStatement, Isa, Operation, RelationStatement, RolePlayer, Statement, ThingConstraint,
    ThingStatement, TypeProperty, TypeStatement,
};
pub use value::{Value, ValueType};
pub use variable::Variable;
