//! Per-method rules for compute queries.
//!
//! | method     | inputs                      | required  | algorithms                     |
//! |------------|-----------------------------|-----------|--------------------------------|
//! | count      | in                          |           |                                |
//! | statistics | of, in                      | of        |                                |
//! | centrality | of, in, using, where        |           | degree, k-core                 |
//! | cluster    | in, using, where            |           | connected-component, k-core    |
//! | path       | from, to, in                | from, to  |                                |
//!
//! Arguments depend on the algorithm in effect: `min-k` for k-core centrality, `k` for
//! k-core clustering, `size` and `contains` for connected components.

use graql_core::{
    Algorithm, ComputeArg, ComputeInput, ComputeInputKind, ComputeMethod, ComputeQuery,
};

use super::error::ValidationError;

use ComputeInputKind::*;

pub fn validate_compute(compute: &ComputeQuery) -> Result<(), ValidationError> {
    let method = compute.method;
    let permitted = permitted_inputs(method);

    let mut seen: Vec<ComputeInputKind> = Vec::new();
    for input in compute.inputs() {
        let kind = input.kind();
        if !permitted.contains(&kind) {
            return Err(ValidationError::InvalidComputeInput {
                method: method.keyword(),
                input: kind.keyword(),
            });
        }
        if seen.contains(&kind) {
            return Err(ValidationError::DuplicateComputeInput {
                method: method.keyword(),
                input: kind.keyword(),
            });
        }
        seen.push(kind);
    }

    for &kind in required_inputs(method) {
        if !seen.contains(&kind) {
            return Err(ValidationError::MissingComputeInput {
                method: method.keyword(),
                input: kind.keyword(),
            });
        }
    }

    let Some(algorithm) = compute.algorithm() else {
        return Ok(());
    };
    if !algorithms(method).contains(&algorithm) {
        return Err(ValidationError::InvalidComputeAlgorithm {
            method: method.keyword(),
            algorithm: algorithm.keyword(),
        });
    }

    if let Some(ComputeInput::Where(args)) = compute.input(Where) {
        for arg in args {
            if !accepts_argument(method, algorithm, arg) {
                return Err(ValidationError::InvalidComputeArgument {
                    algorithm: algorithm.keyword(),
                    argument: arg.keyword(),
                });
            }
        }
    }
    Ok(())
}

fn permitted_inputs(method: ComputeMethod) -> &'static [ComputeInputKind] {
    match method {
        ComputeMethod::Count => &[In],
        ComputeMethod::Statistics(_) => &[Of, In],
        ComputeMethod::Centrality => &[Of, In, Using, Where],
        ComputeMethod::Cluster => &[In, Using, Where],
        ComputeMethod::Path => &[From, To, In],
    }
}

fn required_inputs(method: ComputeMethod) -> &'static [ComputeInputKind] {
    match method {
        ComputeMethod::Statistics(_) => &[Of],
        ComputeMethod::Path => &[From, To],
        ComputeMethod::Count | ComputeMethod::Centrality | ComputeMethod::Cluster => &[],
    }
}

fn algorithms(method: ComputeMethod) -> &'static [Algorithm] {
    match method {
        ComputeMethod::Centrality => &[Algorithm::Degree, Algorithm::KCore],
        ComputeMethod::Cluster => &[Algorithm::ConnectedComponent, Algorithm::KCore],
        ComputeMethod::Count | ComputeMethod::Statistics(_) | ComputeMethod::Path => &[],
    }
}

fn accepts_argument(method: ComputeMethod, algorithm: Algorithm, arg: &ComputeArg) -> bool {
    match (method, algorithm, arg) {
        (ComputeMethod::Centrality, Algorithm::KCore, ComputeArg::MinK(_)) => true,
        (ComputeMethod::Cluster, Algorithm::KCore, ComputeArg::K(_)) => true,
        (_, Algorithm::ConnectedComponent, ComputeArg::Size(_) | ComputeArg::Contains(_)) => true,
        _ => false,
    }
}
