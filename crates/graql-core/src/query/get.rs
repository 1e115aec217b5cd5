use serde::Serialize;

use super::MatchClause;
use crate::variable::Variable;

/// `match ... get $x, $y; sort $x; offset 10; limit 5;`
///
/// An empty `vars` list selects every variable of the match clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GetQuery {
    pub match_clause: MatchClause,
    pub vars: Vec<Variable>,
    pub filters: Filters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Filters {
    pub sort: Option<Sorting>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.sort.is_none() && self.offset.is_none() && self.limit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sorting {
    pub var: Variable,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// `count;` / `max $x;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Aggregate {
    pub method: AggregateMethod,
    pub var: Option<Variable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateMethod {
    Count,
    Max,
    Min,
    Mean,
    Median,
    Std,
    Sum,
}

impl AggregateMethod {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Max => "max",
            Self::Min => "min",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Std => "std",
            Self::Sum => "sum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GetAggregateQuery {
    pub get: GetQuery,
    pub aggregate: Aggregate,
}

/// `match ... get; group $x;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GetGroupQuery {
    pub get: GetQuery,
    pub var: Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GetGroupAggregateQuery {
    pub group: GetGroupQuery,
    pub aggregate: Aggregate,
}
