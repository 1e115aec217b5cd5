use crate::label::Label;
use crate::query::{
    Aggregate, AggregateMethod, Algorithm, ComputeArg, ComputeInput, ComputeMethod, ComputeQuery,
    DeleteQuery, Filters, GetAggregateQuery, GetGroupAggregateQuery, GetGroupQuery, GetQuery,
    InsertQuery, MatchClause, SortOrder, Sorting, StatisticsMethod,
};
use crate::statement::InstanceStatement;
use crate::variable::Variable;

impl MatchClause {
    pub fn get<V: Into<Variable>>(self, vars: impl IntoIterator<Item = V>) -> GetQuery {
        GetQuery {
            match_clause: self,
            vars: vars.into_iter().map(Into::into).collect(),
            filters: Filters::default(),
        }
    }

    /// `get;`: every variable of the match clause.
    pub fn get_all(self) -> GetQuery {
        self.get(Vec::<Variable>::new())
    }

    pub fn insert<S: Into<InstanceStatement>>(
        self,
        statements: impl IntoIterator<Item = S>,
    ) -> InsertQuery {
        InsertQuery {
            match_clause: Some(self),
            statements: statements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delete<S: Into<InstanceStatement>>(
        self,
        statements: impl IntoIterator<Item = S>,
    ) -> DeleteQuery {
        DeleteQuery {
            match_clause: self,
            statements: statements.into_iter().map(Into::into).collect(),
        }
    }
}

impl GetQuery {
    pub fn sort(self, var: impl Into<Variable>) -> Self {
        self.with_sort(var.into(), None)
    }

    pub fn sort_by(self, var: impl Into<Variable>, order: SortOrder) -> Self {
        self.with_sort(var.into(), Some(order))
    }

    fn with_sort(mut self, var: Variable, order: Option<SortOrder>) -> Self {
        self.filters.sort = Some(Sorting { var, order });
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.filters.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.filters.limit = Some(limit);
        self
    }

    pub fn aggregate(self, method: AggregateMethod, var: Option<Variable>) -> GetAggregateQuery {
        GetAggregateQuery {
            get: self,
            aggregate: Aggregate { method, var },
        }
    }

    pub fn group(self, var: impl Into<Variable>) -> GetGroupQuery {
        GetGroupQuery {
            get: self,
            var: var.into(),
        }
    }
}

impl GetGroupQuery {
    pub fn aggregate(
        self,
        method: AggregateMethod,
        var: Option<Variable>,
    ) -> GetGroupAggregateQuery {
        GetGroupAggregateQuery {
            group: self,
            aggregate: Aggregate { method, var },
        }
    }
}

macro_rules! aggregate_methods {
    ($receiver:ty => $output:ty) => {
        impl $receiver {
            pub fn count(self) -> $output {
                self.aggregate(AggregateMethod::Count, None)
            }

            pub fn max(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Max, Some(var.into()))
            }

            pub fn min(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Min, Some(var.into()))
            }

            pub fn mean(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Mean, Some(var.into()))
            }

            pub fn median(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Median, Some(var.into()))
            }

            pub fn std(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Std, Some(var.into()))
            }

            pub fn sum(self, var: impl Into<Variable>) -> $output {
                self.aggregate(AggregateMethod::Sum, Some(var.into()))
            }
        }
    };
}

aggregate_methods!(GetQuery => GetAggregateQuery);
aggregate_methods!(GetGroupQuery => GetGroupAggregateQuery);

/// Picks the compute method; inputs are chained onto the resulting query.
#[derive(Debug, Clone, Copy)]
pub struct ComputeBuilder;

impl ComputeBuilder {
    fn method(self, method: ComputeMethod) -> ComputeQuery {
        ComputeQuery::new(method, Vec::new())
    }

    pub fn count(self) -> ComputeQuery {
        self.method(ComputeMethod::Count)
    }

    pub fn max(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Max))
    }

    pub fn min(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Min))
    }

    pub fn mean(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Mean))
    }

    pub fn median(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Median))
    }

    pub fn std(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Std))
    }

    pub fn sum(self) -> ComputeQuery {
        self.method(ComputeMethod::Statistics(StatisticsMethod::Sum))
    }

    pub fn centrality(self) -> ComputeQuery {
        self.method(ComputeMethod::Centrality)
    }

    pub fn cluster(self) -> ComputeQuery {
        self.method(ComputeMethod::Cluster)
    }

    pub fn path(self) -> ComputeQuery {
        self.method(ComputeMethod::Path)
    }
}

fn labels<L: Into<Label>>(labels: impl IntoIterator<Item = L>) -> Vec<Label> {
    labels.into_iter().map(Into::into).collect()
}

impl ComputeQuery {
    pub fn from(self, id: impl Into<String>) -> Self {
        self.with_input(ComputeInput::From(id.into()))
    }

    pub fn to(self, id: impl Into<String>) -> Self {
        self.with_input(ComputeInput::To(id.into()))
    }

    pub fn of<L: Into<Label>>(self, types: impl IntoIterator<Item = L>) -> Self {
        self.with_input(ComputeInput::Of(labels(types)))
    }

    pub fn in_<L: Into<Label>>(self, types: impl IntoIterator<Item = L>) -> Self {
        self.with_input(ComputeInput::In(labels(types)))
    }

    pub fn using(self, algorithm: Algorithm) -> Self {
        self.with_input(ComputeInput::Using(algorithm))
    }

    pub fn where_(self, args: impl IntoIterator<Item = ComputeArg>) -> Self {
        self.with_input(ComputeInput::Where(args.into_iter().collect()))
    }
}
