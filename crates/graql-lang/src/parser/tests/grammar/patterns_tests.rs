use graql_core::builder::{and, not, or, var};
use graql_core::{Pattern, Statement};

use crate::test_utils::{shot_pattern, shot_query};
use crate::{parse_pattern, parse_pattern_list};

#[test]
fn statement_pattern() {
    shot_pattern!("$x isa movie;", @"$x isa movie;");
}

#[test]
fn conjunction_block() {
    shot_pattern!("{ $x isa movie; $x has title $t; };", @"{ $x isa movie; $x has title $t; };");
}

#[test]
fn disjunction() {
    shot_pattern!(r#"
        { $x isa movie; } or { $x isa person; $x has name "Al"; };
    "#, @r#"{ $x isa movie; } or { $x isa person; $x has name "Al"; };"#);
}

#[test]
fn disjunction_with_three_branches() {
    let pattern = parse_pattern("{ $x isa a; } or { $x isa b; } or { $x isa c; };").unwrap();
    let Pattern::Disjunction(disj) = pattern else {
        panic!("expected a disjunction");
    };
    assert_eq!(disj.branches.len(), 3);
}

#[test]
fn negation() {
    shot_pattern!("not { $x has title \"Heat\"; };", @r#"not { $x has title "Heat"; };"#);
}

#[test]
fn nested_blocks() {
    shot_query!("
        match
        $x isa movie;
        { { $x has title $t; } or { not { $x has rating 1; }; }; };
        get;
    ", @r"
    match
    $x isa movie;
    { { $x has title $t; } or { not { $x has rating 1; }; }; };
    ");
}

#[test]
fn parsed_equals_built() {
    let parsed = parse_pattern("{ $x isa movie; } or { $x isa person; };").unwrap();
    let built = Pattern::from(or([var("x").isa("movie"), var("x").isa("person")]));
    assert_eq!(parsed, built);

    let parsed = parse_pattern("not { $x isa movie; };").unwrap();
    assert_eq!(parsed, Pattern::from(not([var("x").isa("movie")])));

    let parsed = parse_pattern("{ $x isa movie; $y isa person; };").unwrap();
    let built = Pattern::from(and([var("x").isa("movie"), var("y").isa("person")]));
    assert_eq!(parsed, built);
}

#[test]
fn disjunction_equality_ignores_branch_order() {
    let left = parse_pattern("{ $x isa movie; } or { $x isa person; };").unwrap();
    let right = parse_pattern("{ $x isa person; } or { $x isa movie; };").unwrap();
    assert_eq!(left, right);
}

#[test]
fn pattern_list() {
    let patterns = parse_pattern_list("$x isa movie; $y isa person; not { $x has title $y; };")
        .unwrap();
    assert_eq!(patterns.len(), 3);
    assert!(matches!(patterns[0], Pattern::Statement(Statement::Instance(_))));
    assert!(matches!(patterns[2], Pattern::Negation(_)));
}

#[test]
fn empty_block_is_rejected() {
    let err = parse_pattern("{ };").unwrap_err();
    insta::assert_snapshot!(err, @"unexpected \"}\" at 1:3, expected one of `(`, `{`, `==`, `!==`, `>`, `>=`, `<`, `<=`, `not`, `like`, `true`, `false`, string, integer, real, date, datetime, variable, label, implicit label");
}
