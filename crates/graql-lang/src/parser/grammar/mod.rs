//! Grammar productions for Graql.
//!
//! Each submodule extends `Parser` with the productions of one layer:
//! queries, patterns, statements, compute queries, and atoms (variables, labels, literals).

mod atoms;
mod compute;
mod patterns;
mod queries;
mod statements;
