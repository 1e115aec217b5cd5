use serde::Serialize;

use crate::label::Label;

/// `compute centrality in [movie, person], using degree;`
///
/// Inputs are held sorted by [`ComputeInputKind`], so the order they were
/// written or built in does not affect equality. Repeated kinds are kept so
/// validation can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComputeQuery {
    pub method: ComputeMethod,
    inputs: Vec<ComputeInput>,
}

impl ComputeQuery {
    pub fn new(method: ComputeMethod, mut inputs: Vec<ComputeInput>) -> Self {
        inputs.sort_by_key(ComputeInput::kind);
        Self { method, inputs }
    }

    pub fn inputs(&self) -> &[ComputeInput] {
        &self.inputs
    }

    pub fn input(&self, kind: ComputeInputKind) -> Option<&ComputeInput> {
        self.inputs.iter().find(|input| input.kind() == kind)
    }

    /// Returns a copy with `input` added in canonical position.
    pub fn with_input(mut self, input: ComputeInput) -> Self {
        let at = self
            .inputs
            .iter()
            .position(|existing| existing.kind() > input.kind())
            .unwrap_or(self.inputs.len());
        self.inputs.insert(at, input);
        self
    }

    /// The algorithm in effect: the `using` input, or the method's default.
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self.input(ComputeInputKind::Using) {
            Some(ComputeInput::Using(algorithm)) => Some(*algorithm),
            _ => self.method.default_algorithm(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeMethod {
    Count,
    Statistics(StatisticsMethod),
    Centrality,
    Cluster,
    Path,
}

impl ComputeMethod {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Statistics(method) => method.keyword(),
            Self::Centrality => "centrality",
            Self::Cluster => "cluster",
            Self::Path => "path",
        }
    }

    pub fn default_algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Centrality => Some(Algorithm::Degree),
            Self::Cluster => Some(Algorithm::ConnectedComponent),
            Self::Count | Self::Statistics(_) | Self::Path => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsMethod {
    Max,
    Min,
    Mean,
    Median,
    Std,
    Sum,
}

impl StatisticsMethod {
    pub fn keyword(self) -> &'static str {
        match self {
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
#[serde(rename_all = "snake_case")]
pub enum ComputeInput {
    From(String),
    To(String),
    Of(Vec<Label>),
    In(Vec<Label>),
    Using(Algorithm),
    Where(Vec<ComputeArg>),
}

impl ComputeInput {
    pub fn kind(&self) -> ComputeInputKind {
        match self {
            Self::From(_) => ComputeInputKind::From,
            Self::To(_) => ComputeInputKind::To,
            Self::Of(_) => ComputeInputKind::Of,
            Self::In(_) => ComputeInputKind::In,
            Self::Using(_) => ComputeInputKind::Using,
            Self::Where(_) => ComputeInputKind::Where,
        }
    }
}

/// Declaration order is the canonical print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeInputKind {
    From,
    To,
    Of,
    In,
    Using,
    Where,
}

impl ComputeInputKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Of => "of",
            Self::In => "in",
            Self::Using => "using",
            Self::Where => "where",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Degree,
    KCore,
    ConnectedComponent,
}

impl Algorithm {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::KCore => "k-core",
            Self::ConnectedComponent => "connected-component",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeArg {
    MinK(u64),
    K(u64),
    Size(u64),
    Contains(String),
}

impl ComputeArg {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::MinK(_) => "min-k",
            Self::K(_) => "k",
            Self::Size(_) => "size",
            Self::Contains(_) => "contains",
        }
    }
}
