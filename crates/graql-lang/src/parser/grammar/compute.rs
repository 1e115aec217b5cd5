//! `compute <method> [input, ...];`
//!
//! Inputs are accepted in any order and combination here; which inputs, algorithms and
//! arguments a method permits is checked by the validator.

use graql_core::{
    Algorithm, ComputeArg, ComputeInput, ComputeMethod, ComputeQuery, StatisticsMethod,
};

use crate::Error;
use crate::parser::core::Parser;
use crate::parser::syntax_kind::SyntaxKind::*;
use crate::parser::syntax_kind::token_sets::{
    ALGORITHMS, COMPUTE_ARGS, COMPUTE_INPUTS, COMPUTE_METHODS,
};

impl<'src> Parser<'src> {
    pub(super) fn compute_query(&mut self) -> Result<ComputeQuery, Error> {
        self.expect(KwCompute)?;
        let token = self.expect_one_of(COMPUTE_METHODS)?;
        let method = match token.kind {
            KwCount => ComputeMethod::Count,
            KwMax => ComputeMethod::Statistics(StatisticsMethod::Max),
            KwMin => ComputeMethod::Statistics(StatisticsMethod::Min),
            KwMean => ComputeMethod::Statistics(StatisticsMethod::Mean),
            KwMedian => ComputeMethod::Statistics(StatisticsMethod::Median),
            KwStd => ComputeMethod::Statistics(StatisticsMethod::Std),
            KwSum => ComputeMethod::Statistics(StatisticsMethod::Sum),
            KwCentrality => ComputeMethod::Centrality,
            KwCluster => ComputeMethod::Cluster,
            _ => ComputeMethod::Path,
        };

        let mut inputs = Vec::new();
        if !self.at(Semicolon) {
            inputs.push(self.compute_input()?);
            while self.eat(Comma)? {
                inputs.push(self.compute_input()?);
            }
        }
        self.expect(Semicolon)?;
        Ok(ComputeQuery::new(method, inputs))
    }

    fn compute_input(&mut self) -> Result<ComputeInput, Error> {
        let token = self.expect_one_of(COMPUTE_INPUTS)?;
        let input = match token.kind {
            KwFrom => ComputeInput::From(self.id()?),
            KwTo => ComputeInput::To(self.id()?),
            KwOf => ComputeInput::Of(self.label_list()?),
            KwIn => ComputeInput::In(self.label_list()?),
            KwUsing => ComputeInput::Using(self.algorithm()?),
            _ => ComputeInput::Where(self.compute_args()?),
        };
        Ok(input)
    }

    fn algorithm(&mut self) -> Result<Algorithm, Error> {
        let token = self.expect_one_of(ALGORITHMS)?;
        Ok(match token.kind {
            KwDegree => Algorithm::Degree,
            KwKCore => Algorithm::KCore,
            _ => Algorithm::ConnectedComponent,
        })
    }

    /// `[a=1, b=2]` or a single argument.
    fn compute_args(&mut self) -> Result<Vec<ComputeArg>, Error> {
        if !self.eat(BracketOpen)? {
            return Ok(vec![self.compute_arg()?]);
        }
        let mut args = Vec::new();
        if !self.at(BracketClose) {
            args.push(self.compute_arg()?);
            while self.eat(Comma)? {
                args.push(self.compute_arg()?);
            }
        }
        self.expect(BracketClose)?;
        Ok(args)
    }

    fn compute_arg(&mut self) -> Result<ComputeArg, Error> {
        let token = self.expect_one_of(COMPUTE_ARGS)?;
        self.expect(Equals)?;
        let arg = match token.kind {
            KwMinK => ComputeArg::MinK(self.unsigned()?),
            KwK => ComputeArg::K(self.unsigned()?),
            KwSize => ComputeArg::Size(self.unsigned()?),
            _ => ComputeArg::Contains(self.id()?),
        };
        Ok(arg)
    }
}
