use graql_core::builder::compute;
use graql_core::{
    Algorithm, ComputeArg, ComputeInput, ComputeInputKind, ComputeMethod, Query,
    StatisticsMethod,
};

use crate::test_utils::shot_query;
use crate::{QueryParser, parse_query};

#[test]
fn count() {
    shot_query!("compute count;", @"compute count;");
    shot_query!("compute count in [movie, person];", @"compute count in [movie, person];");
}

#[test]
fn statistics() {
    shot_query!("compute mean of rating, in movie;", @"compute mean of rating, in movie;");
    shot_query!("compute std in [movie], of [rating, budget];", @"compute std of [rating, budget], in movie;");
}

#[test]
fn path() {
    shot_query!("compute path to V2, from V1;", @"compute path from V1, to V2;");
    shot_query!("compute path from 42, to \"odd id\", in [person, friendship];", @r#"compute path from "42", to "odd id", in [person, friendship];"#);
}

#[test]
fn centrality() {
    shot_query!("compute centrality using degree;", @"compute centrality using degree;");
    shot_query!(
        "compute centrality where min-k=3, using k-core, in [movie, person], of person;",
        @"compute centrality of person, in [movie, person], using k-core, where min-k=3;"
    );
}

#[test]
fn cluster() {
    shot_query!(
        "compute cluster in person, using connected-component, where [size=2, contains=V123];",
        @"compute cluster in person, using connected-component, where [size=2, contains=V123];"
    );
    shot_query!("compute cluster using k-core, where k=4;", @"compute cluster using k-core, where k=4;");
}

#[test]
fn empty_lists() {
    shot_query!("compute count in [];", @"compute count in [];");
}

#[test]
fn ids_accept_keywords() {
    let query = parse_query("compute path from match, to isa;").unwrap();
    let Query::Compute(compute) = query else {
        panic!("expected a compute query");
    };
    assert_eq!(
        compute.input(ComputeInputKind::From),
        Some(&ComputeInput::From("match".into()))
    );
    assert_eq!(
        compute.input(ComputeInputKind::To),
        Some(&ComputeInput::To("isa".into()))
    );
}

#[test]
fn input_order_does_not_affect_equality() {
    let left = parse_query("compute centrality in movie, using k-core;").unwrap();
    let right = parse_query("compute centrality using k-core, in movie;").unwrap();
    assert_eq!(left, right);

    let built: Query = compute()
        .centrality()
        .using(Algorithm::KCore)
        .in_(["movie"])
        .into();
    assert_eq!(left, built);
}

#[test]
fn parsed_matches_built() {
    let parsed = parse_query("compute max of rating, in movie;").unwrap();
    let built: Query = compute().max().in_(["movie"]).of(["rating"]).into();
    assert_eq!(parsed, built);

    let parsed = parse_query("compute cluster where [size=2, contains=V1];").unwrap();
    let built: Query = compute()
        .cluster()
        .where_([ComputeArg::Size(2), ComputeArg::Contains("V1".into())])
        .into();
    assert_eq!(parsed, built);
}

#[test]
fn default_algorithm() {
    let Query::Compute(centrality) = parse_query("compute centrality;").unwrap() else {
        panic!("expected a compute query");
    };
    assert_eq!(centrality.method, ComputeMethod::Centrality);
    assert_eq!(centrality.algorithm(), Some(Algorithm::Degree));

    let Query::Compute(cluster) = parse_query("compute cluster;").unwrap() else {
        panic!("expected a compute query");
    };
    assert_eq!(cluster.algorithm(), Some(Algorithm::ConnectedComponent));

    let Query::Compute(sum) = parse_query("compute sum of budget;").unwrap() else {
        panic!("expected a compute query");
    };
    assert_eq!(sum.method, ComputeMethod::Statistics(StatisticsMethod::Sum));
    assert_eq!(sum.algorithm(), None);
}

#[test]
fn duplicate_inputs_are_kept_for_validation() {
    let query = QueryParser::new("compute count in movie, in person;")
        .with_validation(false)
        .query()
        .unwrap();
    let Query::Compute(compute) = query else {
        panic!("expected a compute query");
    };
    assert_eq!(compute.inputs().len(), 2);
}
