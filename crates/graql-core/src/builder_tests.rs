use crate::builder::{and, compute, define, insert, match_, or, rel, rule, type_, var};
use crate::{
    Algorithm, ComputeInput, ComputeInputKind, ComputeMethod, Conjunction, InstanceStatement,
    Pattern, Query, QueryKind, RelationStatement, RolePlayer, Statement, ThingConstraint,
    TypeProperty, TypeRef, Variable,
};

#[test]
fn var_isa_builds_thing() {
    let stmt = var("x").isa("movie");
    assert_eq!(stmt.var, Variable::named("x"));
    match stmt.constraint {
        Some(ThingConstraint::Isa(isa)) => {
            assert!(!isa.explicit);
            assert_eq!(isa.type_, TypeRef::from("movie"));
        }
        other => panic!("unexpected constraint: {other:?}"),
    }
}

#[test]
fn builder_calls_return_new_values() {
    let base = var("x").isa("movie");
    let extended = base.clone().has("title", "Heat");
    assert!(base.attributes.is_empty());
    assert_eq!(extended.attributes.len(), 1);
}

#[test]
fn free_rel_uses_anonymous_variable() {
    let stmt = rel("x").rel("y");
    assert_eq!(
        stmt,
        RelationStatement {
            var: Variable::Anonymous,
            players: vec![RolePlayer::new("x"), RolePlayer::new("y")],
            isa: None,
            attributes: Vec::new(),
        }
    );
}

#[test]
fn rule_is_a_rule_subtype() {
    let built = rule("r").when([var("x").isa("movie")]);
    assert_eq!(built.properties.len(), 2);
    assert_eq!(
        built.properties[0],
        TypeProperty::Sub {
            explicit: false,
            supertype: TypeRef::from("rule"),
        }
    );
    assert_eq!(type_("r").sub("rule"), rule("r"));
}

#[test]
fn or_wraps_bare_branches() {
    let disj = or([
        Pattern::from(var("x").isa("movie")),
        Pattern::from(and([var("x").isa("person"), var("x").isa("actor")])),
    ]);
    assert_eq!(disj.branches.len(), 2);
    assert_eq!(
        disj.branches[0],
        Conjunction::new(vec![Pattern::from(var("x").isa("movie"))])
    );
    assert_eq!(disj.branches[1].patterns.len(), 2);
}

#[test]
fn get_all_selects_nothing_explicitly() {
    let get = match_([var("x").isa("movie")]).get_all();
    assert!(get.vars.is_empty());
    assert!(get.filters.is_empty());
}

#[test]
fn query_conversions_and_kinds() {
    let get: Query = match_([var("x").isa("movie")]).get(["x"]).into();
    assert_eq!(get.kind(), QueryKind::Get);
    assert!(get.match_clause().is_some());

    let insert: Query = insert([var("x").isa("movie")]).into();
    assert_eq!(insert.kind(), QueryKind::Insert);
    assert!(insert.match_clause().is_none());

    let define: Query = define([type_("movie").sub("entity")]).into();
    assert_eq!(define.kind().to_string(), "define");

    let group: Query = match_([var("x").isa("movie")])
        .get_all()
        .group("x")
        .count()
        .into();
    assert_eq!(group.kind(), QueryKind::GetGroupAggregate);
}

#[test]
fn insert_statements_are_instance_statements() {
    let query = insert([var("x").isa("movie")]);
    assert!(matches!(
        query.statements.as_slice(),
        [InstanceStatement::Thing(_)]
    ));
    assert!(matches!(
        Statement::from(query.statements[0].clone()),
        Statement::Instance(_)
    ));
}

#[test]
fn compute_inputs_are_kept_in_canonical_order() {
    let built = compute()
        .centrality()
        .using(Algorithm::KCore)
        .in_(["person"])
        .of(["movie"]);
    let kinds: Vec<_> = built.inputs().iter().map(ComputeInput::kind).collect();
    assert_eq!(
        kinds,
        [
            ComputeInputKind::Of,
            ComputeInputKind::In,
            ComputeInputKind::Using,
        ]
    );
    assert_eq!(
        built,
        compute()
            .centrality()
            .of(["movie"])
            .in_(["person"])
            .using(Algorithm::KCore)
    );
}

#[test]
fn compute_default_algorithms() {
    assert_eq!(compute().centrality().algorithm(), Some(Algorithm::Degree));
    assert_eq!(
        compute().cluster().algorithm(),
        Some(Algorithm::ConnectedComponent)
    );
    assert_eq!(
        compute().cluster().using(Algorithm::KCore).algorithm(),
        Some(Algorithm::KCore)
    );
    assert_eq!(compute().path().algorithm(), None);
    assert_eq!(compute().max().method.keyword(), "max");
    assert_eq!(compute().count().method, ComputeMethod::Count);
}
