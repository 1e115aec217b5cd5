//! Snapshot helpers shared by the parser, analyzer and pipeline tests.

use graql_core::Query;

use crate::{parse_pattern, parse_query, parse_query_list};

/// Parses `source`, prints it, and checks that the printed text parses back to an equal
/// query and prints identically. Returns the canonical text.
pub fn roundtrip_query(source: &str) -> String {
    let query = parse_query(source).unwrap_or_else(|e| panic!("{}", e.render(source)));
    assert_canonical(&query);
    query.to_string()
}

pub fn assert_canonical(query: &Query) {
    let printed = query.to_string();
    let reparsed = parse_query(&printed)
        .unwrap_or_else(|e| panic!("canonical text does not parse:\n{}", e.render(&printed)));
    assert_eq!(&reparsed, query, "re-parsed query differs:\n{printed}");
    assert_eq!(reparsed.to_string(), printed, "printing is not stable");
}

/// Canonical text of every query in `source`, separated by blank lines.
pub fn roundtrip_query_list(source: &str) -> String {
    let queries = parse_query_list(source).unwrap_or_else(|e| panic!("{}", e.render(source)));
    for query in &queries {
        assert_canonical(query);
    }
    queries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn roundtrip_pattern(source: &str) -> String {
    let pattern = parse_pattern(source).unwrap_or_else(|e| panic!("{}", e.render(source)));
    let printed = pattern.to_string();
    let reparsed = parse_pattern(&printed)
        .unwrap_or_else(|e| panic!("canonical text does not parse:\n{}", e.render(&printed)));
    assert_eq!(reparsed, pattern, "re-parsed pattern differs:\n{printed}");
    printed
}

pub fn query_error(source: &str) -> String {
    match parse_query(source) {
        Ok(query) => panic!("expected an error, parsed:\n{query}"),
        Err(error) => error.to_string(),
    }
}

macro_rules! shot_query {
    ($source:tt, @$snapshot:literal) => {
        insta::assert_snapshot!(
            $crate::test_utils::roundtrip_query(indoc::indoc!($source)),
            @$snapshot
        )
    };
}

macro_rules! shot_query_list {
    ($source:tt, @$snapshot:literal) => {
        insta::assert_snapshot!(
            $crate::test_utils::roundtrip_query_list(indoc::indoc!($source)),
            @$snapshot
        )
    };
}

macro_rules! shot_pattern {
    ($source:tt, @$snapshot:literal) => {
        insta::assert_snapshot!(
            $crate::test_utils::roundtrip_pattern(indoc::indoc!($source)),
            @$snapshot
        )
    };
}

macro_rules! shot_error {
    ($source:tt, @$snapshot:literal) => {
        insta::assert_snapshot!(
            $crate::test_utils::query_error(indoc::indoc!($source)),
            @$snapshot
        )
    };
}

pub(crate) use {shot_error, shot_pattern, shot_query, shot_query_list};
