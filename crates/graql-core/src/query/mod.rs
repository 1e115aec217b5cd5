//! Top-level queries.

mod compute;
mod get;

use std::fmt;

use serde::Serialize;

pub use compute::{
    Algorithm, ComputeArg, ComputeInput, ComputeInputKind, ComputeMethod, ComputeQuery,
    StatisticsMethod,
};
pub use get::{
    Aggregate, AggregateMethod, Filters, GetAggregateQuery, GetGroupAggregateQuery, GetGroupQuery,
    GetQuery, SortOrder, Sorting,
};

use crate::pattern::Pattern;
use crate::statement::{InstanceStatement, TypeStatement};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Define(DefineQuery),
    Undefine(UndefineQuery),
    Insert(InsertQuery),
    Delete(DeleteQuery),
    Get(GetQuery),
    GetAggregate(GetAggregateQuery),
    GetGroup(GetGroupQuery),
    GetGroupAggregate(GetGroupAggregateQuery),
    Compute(ComputeQuery),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Define,
    Undefine,
    Insert,
    Delete,
    Get,
    GetAggregate,
    GetGroup,
    GetGroupAggregate,
    Compute,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Define => "define",
            Self::Undefine => "undefine",
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Get => "get",
            Self::GetAggregate => "get-aggregate",
            Self::GetGroup => "get-group",
            Self::GetGroupAggregate => "get-group-aggregate",
            Self::Compute => "compute",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Self::Define(_) => QueryKind::Define,
            Self::Undefine(_) => QueryKind::Undefine,
            Self::Insert(_) => QueryKind::Insert,
            Self::Delete(_) => QueryKind::Delete,
            Self::Get(_) => QueryKind::Get,
            Self::GetAggregate(_) => QueryKind::GetAggregate,
            Self::GetGroup(_) => QueryKind::GetGroup,
            Self::GetGroupAggregate(_) => QueryKind::GetGroupAggregate,
            Self::Compute(_) => QueryKind::Compute,
        }
    }

    /// The leading `match` clause, for the query forms that have one.
    pub fn match_clause(&self) -> Option<&MatchClause> {
        match self {
            Self::Insert(q) => q.match_clause.as_ref(),
            Self::Delete(q) => Some(&q.match_clause),
            Self::Get(q) => Some(&q.match_clause),
            Self::GetAggregate(q) => Some(&q.get.match_clause),
            Self::GetGroup(q) => Some(&q.get.match_clause),
            Self::GetGroupAggregate(q) => Some(&q.group.get.match_clause),
            Self::Define(_) | Self::Undefine(_) | Self::Compute(_) => None,
        }
    }
}

/// `match <pattern>...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchClause {
    pub patterns: Vec<Pattern>,
}

impl MatchClause {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InsertQuery {
    pub match_clause: Option<MatchClause>,
    pub statements: Vec<InstanceStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeleteQuery {
    pub match_clause: MatchClause,
    pub statements: Vec<InstanceStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DefineQuery {
    pub statements: Vec<TypeStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UndefineQuery {
    pub statements: Vec<TypeStatement>,
}

macro_rules! query_conversions {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Query {
                fn from(query: $ty) -> Self {
                    Self::$variant(query)
                }
            }
        )*
    };
}

query_conversions! {
    DefineQuery => Define,
    UndefineQuery => Undefine,
    InsertQuery => Insert,
    DeleteQuery => Delete,
    GetQuery => Get,
    GetAggregateQuery => GetAggregate,
    GetGroupQuery => GetGroup,
    GetGroupAggregateQuery => GetGroupAggregate,
    ComputeQuery => Compute,
}
