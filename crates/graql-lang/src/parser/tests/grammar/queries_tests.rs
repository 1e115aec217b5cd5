use graql_core::builder::{match_, rel_role, type_, var};
use graql_core::{Query, QueryKind, SortOrder, Variable};

use crate::parse_query;
use crate::test_utils::{shot_query, shot_query_list};

#[test]
fn get_without_variables() {
    shot_query!("match $x isa movie; get;", @r"
    match
    $x isa movie;
    ");
}

#[test]
fn get_keyword_is_optional() {
    let with_get = parse_query("match $x isa movie; get;").unwrap();
    let without_get = parse_query("match $x isa movie;").unwrap();
    assert_eq!(with_get, without_get);
    assert_eq!(with_get.kind(), QueryKind::Get);
}

#[test]
fn get_selected_variables() {
    shot_query!(r#"match $x isa movie, has title "Godfather"; get $x;"#, @r#"
    match
    $x isa movie, has title "Godfather";
    get $x;
    "#);
}

#[test]
fn get_with_filters() {
    shot_query!("
        match $x isa movie, has release-date $d;
        get $x, $d; sort $d desc; offset 10; limit 5;
    ", @r"
    match
    $x isa movie, has release-date $d;
    get $x, $d;
    sort $d desc;
    offset 10;
    limit 5;
    ");
}

#[test]
fn sort_without_order() {
    let query = parse_query("match $x isa movie, has title $t; sort $t;").unwrap();
    let Query::Get(get) = query else {
        panic!("expected a get query");
    };
    let sort = get.filters.sort.unwrap();
    assert_eq!(sort.var, Variable::named("t"));
    assert_eq!(sort.order, None);

    let query = parse_query("match $x isa movie, has title $t; sort $t asc;").unwrap();
    let Query::Get(get) = query else {
        panic!("expected a get query");
    };
    assert_eq!(get.filters.sort.unwrap().order, Some(SortOrder::Asc));
}

#[test]
fn aggregate_without_get() {
    shot_query!("match $x isa movie; count;", @r"
    match
    $x isa movie;
    count;
    ");
}

#[test]
fn aggregate_over_variable() {
    shot_query!("match $x isa movie, has rating $r; get $r; mean $r;", @r"
    match
    $x isa movie, has rating $r;
    get $r;
    mean $r;
    ");
}

#[test]
fn group() {
    shot_query!("match ($p, $m) isa casting; get $p, $m; group $p;", @r"
    match
    ($p, $m) isa casting;
    get $p, $m;
    group $p;
    ");
}

#[test]
fn group_aggregate() {
    shot_query!("match ($p, $m) isa casting; get; group $p; count;", @r"
    match
    ($p, $m) isa casting;
    group $p;
    count;
    ");
}

#[test]
fn insert_without_match() {
    shot_query!(r#"insert $x isa movie, has title "Heat";"#, @r#"
    insert
    $x isa movie, has title "Heat";
    "#);
}

#[test]
fn match_insert() {
    shot_query!(r#"
        match $p isa person, has name "Al"; $m isa movie, has title "Heat";
        insert (actor: $p, film: $m) isa casting;
    "#, @r#"
    match
    $p isa person, has name "Al";
    $m isa movie, has title "Heat";
    insert
    (actor: $p, film: $m) isa casting;
    "#);
}

#[test]
fn match_delete() {
    shot_query!(r#"match $x isa movie, has title "Heat"; delete $x isa movie;"#, @r#"
    match
    $x isa movie, has title "Heat";
    delete
    $x isa movie;
    "#);
}

#[test]
fn define() {
    shot_query!("
        define
        movie sub entity, has title, plays film;
        title sub attribute, value string;
        casting sub relation, relates actor, relates film;
    ", @r"
    define
    movie sub entity, has title, plays film;
    title sub attribute, value string;
    casting sub relation, relates actor, relates film;
    ");
}

#[test]
fn undefine() {
    shot_query!("undefine movie plays film;", @r"
    undefine
    movie plays film;
    ");
}

#[test]
fn query_list() {
    shot_query_list!("
        define person sub entity;
        insert $p isa person;
        match $p isa person; get;
    ", @r"
    define
    person sub entity;

    insert
    $p isa person;

    match
    $p isa person;
    ");
}

#[test]
fn parsed_matches_built() {
    let parsed = parse_query(r#"match $x isa movie, has title "Godfather"; get $x;"#).unwrap();
    let built: Query = match_([var("x").isa("movie").has("title", "Godfather")])
        .get(["x"])
        .into();
    assert_eq!(parsed, built);

    let parsed = parse_query("match (actor: $p) isa casting; get;").unwrap();
    let built: Query = match_([rel_role("actor", "p").isa("casting")]).get_all().into();
    assert_eq!(parsed, built);

    let parsed = parse_query("define movie sub entity;").unwrap();
    let built: Query = graql_core::builder::define([type_("movie").sub("entity")]).into();
    assert_eq!(parsed, built);
}
