use graql_core::builder::{match_, var};
use graql_core::{Pattern, Query, QueryKind, Variable};
use indoc::indoc;

use crate::parser::{Parser, tokenize};
use crate::test_utils::assert_canonical;
use crate::{Error, QueryParser, parse_query, parse_query_list};

#[test]
fn exec_fuel_exhausted() {
    let result = QueryParser::new("match $x isa movie; get;")
        .with_exec_fuel(Some(3))
        .query();
    assert_eq!(result, Err(Error::ExecFuelExhausted));
}

#[test]
fn exec_fuel_counts_consumed_tokens() {
    let source = "match $x isa movie; get;";
    let tokens = tokenize(source).unwrap();
    let mut parser = Parser::new(source, tokens).with_exec_fuel(Some(100));
    parser.eof_query().unwrap();
    assert_eq!(parser.exec_fuel_consumed(), 7);

    let exact = QueryParser::new(source).with_exec_fuel(Some(7)).query();
    assert!(exact.is_ok());
}

#[test]
fn unlimited_fuel() {
    let result = QueryParser::new("match $x isa movie; get;")
        .with_exec_fuel(None)
        .with_recursion_fuel(None)
        .query();
    assert!(result.is_ok());
}

#[test]
fn recursion_limit_exceeded() {
    let source = "{ { { $x isa movie; }; }; };";
    let nested = QueryParser::new(source).with_recursion_fuel(Some(3)).pattern();
    assert_eq!(nested, Err(Error::RecursionLimitExceeded));

    let nested = QueryParser::new(source).with_recursion_fuel(Some(4)).pattern();
    assert!(nested.is_ok());
}

#[test]
fn recursion_limit_on_deep_input() {
    let depth = 100;
    let source = format!(
        "match {}$x isa movie;{} get;",
        "{ ".repeat(depth),
        " };".repeat(depth)
    );
    let result = QueryParser::new(&source)
        .with_recursion_fuel(Some(32))
        .query();
    assert_eq!(result, Err(Error::RecursionLimitExceeded));
}

#[test]
fn validation_toggle() {
    let source = "match $x isa movie; get $y;";
    assert!(matches!(parse_query(source), Err(Error::Validation(_))));

    let query = QueryParser::new(source).with_validation(false).query().unwrap();
    assert_eq!(query.kind(), QueryKind::Get);
    assert!(matches!(crate::validate(query), Err(Error::Validation(_))));
}

#[test]
fn query_list_validates_each_query() {
    let source = indoc! {"
        match $x isa movie; get;
        match $x isa movie; get $y;
    "};
    assert!(matches!(parse_query_list(source), Err(Error::Validation(_))));

    let queries = QueryParser::new(source)
        .with_validation(false)
        .query_list()
        .unwrap();
    assert_eq!(queries.len(), 2);
}

#[test]
fn query_list_kinds() {
    let queries = parse_query_list(indoc! {r#"
        define movie sub entity, has title; title sub attribute, value string;
        insert $m isa movie, has title "Heat";
        match $m isa movie; get;
        match $m isa movie; count;
        match $m isa movie, has title $t; get; group $t;
        match $m isa movie, has title $t; group $t; count;
        match $m isa movie; delete $m isa movie;
        undefine movie has title;
        compute count in movie;
    "#})
    .unwrap();
    let kinds: Vec<QueryKind> = queries.iter().map(Query::kind).collect();
    assert_eq!(
        kinds,
        [
            QueryKind::Define,
            QueryKind::Insert,
            QueryKind::Get,
            QueryKind::GetAggregate,
            QueryKind::GetGroup,
            QueryKind::GetGroupAggregate,
            QueryKind::Delete,
            QueryKind::Undefine,
            QueryKind::Compute,
        ]
    );
    for query in &queries {
        assert_canonical(query);
    }
}

#[test]
fn pattern_entry_points() {
    let pattern = QueryParser::new("$x isa movie;").pattern().unwrap();
    assert_eq!(pattern, Pattern::from(var("x").isa("movie")));

    let patterns = QueryParser::new("$x isa movie; $x has title $t;")
        .pattern_list()
        .unwrap();
    assert_eq!(patterns.len(), 2);
}

#[test]
fn built_queries_print_and_parse_back() {
    let built: Query = match_([
        var("x").isa("movie").has("title", "Heat"),
        var("x").has("rating", Variable::named("r")),
    ])
    .get(["x"])
    .sort("x")
    .limit(10)
    .into();
    let printed = built.to_string();
    assert_eq!(parse_query(&printed).unwrap(), built);
}
