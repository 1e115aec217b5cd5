use graql_core::builder::compute;
use graql_core::{Algorithm, ComputeArg};

use super::{ValidationError, validate_compute};
use crate::parse_query;
use crate::test_utils::shot_error;

#[test]
fn inputs_not_permitted_for_method() {
    shot_error!("compute count of movie;", @"`of` is not a valid input for `compute count`");
    shot_error!("compute cluster of person;", @"`of` is not a valid input for `compute cluster`");
    shot_error!("compute path from V1, to V2, using degree;", @"`using` is not a valid input for `compute path`");
}

#[test]
fn duplicate_inputs() {
    shot_error!("compute count in movie, in person;", @"`in` is given more than once to `compute count`");
}

#[test]
fn required_inputs() {
    shot_error!("compute mean in movie;", @"`compute mean` requires `of`");
    shot_error!("compute path from V1;", @"`compute path` requires `to`");
    shot_error!("compute path;", @"`compute path` requires `from`");
}

#[test]
fn invalid_input_is_reported_before_missing_input() {
    shot_error!("compute mean in movie, using degree;", @"`using` is not a valid input for `compute mean`");
}

#[test]
fn algorithms_per_method() {
    shot_error!(
        "compute centrality using connected-component;",
        @"algorithm `connected-component` is not available for `compute centrality`"
    );
    shot_error!("compute cluster using degree;", @"algorithm `degree` is not available for `compute cluster`");
}

#[test]
fn arguments_follow_the_algorithm_in_effect() {
    shot_error!("compute centrality where min-k=3;", @"argument `min-k` is not accepted by algorithm `degree`");
    shot_error!("compute cluster using k-core, where size=2;", @"argument `size` is not accepted by algorithm `k-core`");
    shot_error!("compute centrality using k-core, where k=2;", @"argument `k` is not accepted by algorithm `k-core`");
    shot_error!("compute cluster where min-k=2;", @"argument `min-k` is not accepted by algorithm `connected-component`");
}

#[test]
fn valid_compute_queries() {
    for source in [
        "compute count;",
        "compute count in [movie, person];",
        "compute sum of budget, in movie;",
        "compute path from V1, to V2, in [person, friendship];",
        "compute centrality of person, in [person, casting], using k-core, where min-k=2;",
        "compute cluster in person, using k-core, where k=3;",
        "compute cluster where [size=4, contains=V7];",
    ] {
        assert!(parse_query(source).is_ok(), "{source}");
    }
}

#[test]
fn built_compute_queries() {
    let query = compute().centrality().using(Algorithm::KCore).where_([ComputeArg::K(2)]);
    assert_eq!(
        validate_compute(&query),
        Err(ValidationError::InvalidComputeArgument {
            algorithm: "k-core",
            argument: "k",
        })
    );

    let query = compute().path().from("V1").to("V2");
    assert_eq!(validate_compute(&query), Ok(()));
}
