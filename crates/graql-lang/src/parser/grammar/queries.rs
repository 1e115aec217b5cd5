//! Query-level productions.

use graql_core::{
    Aggregate, AggregateMethod, DefineQuery, DeleteQuery, Filters, GetAggregateQuery,
    GetGroupAggregateQuery, GetGroupQuery, GetQuery, InsertQuery, MatchClause, Query, SortOrder,
    Sorting, TypeStatement, UndefineQuery,
};

use crate::Error;
use crate::parser::core::Parser;
use crate::parser::syntax_kind::SyntaxKind::*;
use crate::parser::syntax_kind::token_sets::{
    AGGREGATE_METHODS, QUERY_FIRST, TYPE_REF_FIRST, VARIABLES,
};

impl<'src> Parser<'src> {
    /// Single query followed by end of input.
    pub fn eof_query(&mut self) -> Result<Query, Error> {
        let query = self.query()?;
        self.expect_eof()?;
        Ok(query)
    }

    /// One or more queries followed by end of input.
    pub fn eof_query_list(&mut self) -> Result<Vec<Query>, Error> {
        let mut queries = vec![self.query()?];
        while !self.eof() {
            queries.push(self.query()?);
        }
        Ok(queries)
    }

    pub(super) fn query(&mut self) -> Result<Query, Error> {
        match self.current() {
            KwDefine => {
                self.bump()?;
                Ok(DefineQuery {
                    statements: self.type_statements()?,
                }
                .into())
            }
            KwUndefine => {
                self.bump()?;
                Ok(UndefineQuery {
                    statements: self.type_statements()?,
                }
                .into())
            }
            KwInsert => {
                self.bump()?;
                Ok(InsertQuery {
                    match_clause: None,
                    statements: self.instance_statements()?,
                }
                .into())
            }
            KwMatch => self.match_query(),
            KwCompute => Ok(self.compute_query()?.into()),
            _ => Err(self.unexpected(QUERY_FIRST)),
        }
    }

    fn type_statements(&mut self) -> Result<Vec<TypeStatement>, Error> {
        let mut statements = vec![self.type_statement()?];
        while self.at_set(TYPE_REF_FIRST) {
            statements.push(self.type_statement()?);
        }
        Ok(statements)
    }

    fn match_clause(&mut self) -> Result<MatchClause, Error> {
        self.expect(KwMatch)?;
        Ok(MatchClause::new(self.patterns()?))
    }

    /// Everything that starts with `match`: insert, delete and the get family.
    fn match_query(&mut self) -> Result<Query, Error> {
        let match_clause = self.match_clause()?;

        if self.eat(KwInsert)? {
            let statements = self.instance_statements()?;
            return Ok(InsertQuery {
                match_clause: Some(match_clause),
                statements,
            }
            .into());
        }
        if self.eat(KwDelete)? {
            let statements = self.instance_statements()?;
            return Ok(DeleteQuery {
                match_clause,
                statements,
            }
            .into());
        }

        let get = self.get_query(match_clause)?;
        if self.eat(KwGroup)? {
            let var = self.variable()?;
            self.expect(Semicolon)?;
            let group = GetGroupQuery { get, var };
            if self.at_set(AGGREGATE_METHODS) {
                let aggregate = self.aggregate()?;
                return Ok(GetGroupAggregateQuery { group, aggregate }.into());
            }
            return Ok(group.into());
        }
        if self.at_set(AGGREGATE_METHODS) {
            let aggregate = self.aggregate()?;
            return Ok(GetAggregateQuery { get, aggregate }.into());
        }
        Ok(get.into())
    }

    /// Optional `get $a, $b;` followed by the filters.
    fn get_query(&mut self, match_clause: MatchClause) -> Result<GetQuery, Error> {
        let mut vars = Vec::new();
        if self.eat(KwGet)? {
            if self.at_var() {
                vars.push(self.variable()?);
                while self.eat(Comma)? {
                    vars.push(self.variable()?);
                }
            }
            self.expect(Semicolon)?;
        }
        let filters = self.filters()?;
        Ok(GetQuery {
            match_clause,
            vars,
            filters,
        })
    }

    fn filters(&mut self) -> Result<Filters, Error> {
        let mut filters = Filters::default();
        if self.eat(KwSort)? {
            let var = self.variable()?;
            let order = match self.current() {
                KwAsc => Some(SortOrder::Asc),
                KwDesc => Some(SortOrder::Desc),
                _ => None,
            };
            if order.is_some() {
                self.bump()?;
            }
            self.expect(Semicolon)?;
            filters.sort = Some(Sorting { var, order });
        }
        if self.eat(KwOffset)? {
            filters.offset = Some(self.unsigned()?);
            self.expect(Semicolon)?;
        }
        if self.eat(KwLimit)? {
            filters.limit = Some(self.unsigned()?);
            self.expect(Semicolon)?;
        }
        Ok(filters)
    }

    fn aggregate(&mut self) -> Result<Aggregate, Error> {
        let token = self.expect_one_of(AGGREGATE_METHODS)?;
        let method = match token.kind {
            KwCount => AggregateMethod::Count,
            KwMax => AggregateMethod::Max,
            KwMin => AggregateMethod::Min,
            KwMean => AggregateMethod::Mean,
            KwMedian => AggregateMethod::Median,
            KwStd => AggregateMethod::Std,
            _ => AggregateMethod::Sum,
        };
        let var = if self.at_set(VARIABLES) {
            Some(self.variable()?)
        } else {
            None
        };
        self.expect(Semicolon)?;
        Ok(Aggregate { method, var })
    }
}
