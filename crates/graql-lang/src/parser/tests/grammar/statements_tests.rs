use chrono::NaiveDate;
use graql_core::builder::var;
use graql_core::{
    Comparable, Comparator, Comparison, HasValue, InstanceStatement, Operation, Pattern,
    Statement, ThingConstraint, TypeProperty, TypeRef, Value, Variable,
};

use crate::parse_pattern;
use crate::test_utils::{shot_pattern, shot_query};

fn statement(source: &str) -> Statement {
    match parse_pattern(source).unwrap() {
        Pattern::Statement(stmt) => stmt,
        other => panic!("expected a statement, got {other}"),
    }
}

#[test]
fn thing_forms() {
    shot_query!(r#"
        match
        $x isa movie;
        $y isa! person;
        $z id V4128;
        $w id "weird id";
        $x != $y;
        $x has title "Heat", has rating 8.5;
        $y isa person, has name $n, has age > 30;
        get;
    "#, @r#"
    match
    $x isa movie;
    $y isa! person;
    $z id V4128;
    $w id "weird id";
    $x != $y;
    $x has title "Heat", has rating 8.5;
    $y isa person, has name $n, has age > 30;
    "#);
}

#[test]
fn relation_forms() {
    shot_query!("
        match
        $r (actor: $p, $m) isa casting;
        (director: $d, film: $m);
        ($a, $a) isa friendship;
        $r2 ($role: $p) isa! casting, has billing 1;
        (film: $m) has year 1995;
        get;
    ", @r"
    match
    $r (actor: $p, $m) isa casting;
    (director: $d, film: $m);
    ($a, $a) isa friendship;
    $r2 ($role: $p) isa! casting, has billing 1;
    (film: $m) has year 1995;
    ");
}

#[test]
fn attribute_forms() {
    shot_query!(r#"
        match
        $t "Heat" isa title;
        $n contains "Godfather";
        $s like "^The .*$";
        $r >= 7.5;
        $d < 2000-01-01;
        "Heat" isa title;
        == $t;
        contains $n;
        get;
    "#, @r#"
    match
    $t "Heat" isa title;
    $n contains "Godfather";
    $s like "^The .*$";
    $r >= 7.5;
    $d < 2000-01-01;
    "Heat" isa title;
    == $t;
    contains $n;
    "#);
}

#[test]
fn literal_values() {
    shot_query!(r#"
        insert
        $a 42;
        $b -7;
        $c 0.5;
        $d 1e3;
        $e true;
        $f 2018-05-01;
        $g 2018-05-01T10:30;
        $h 2018-05-01T10:30:15.250;
        $i 'single';
    "#, @r#"
    insert
    $a 42;
    $b -7;
    $c 0.5;
    $d 1000.0;
    $e true;
    $f 2018-05-01;
    $g 2018-05-01T10:30:00;
    $h 2018-05-01T10:30:15.250;
    $i "single";
    "#);
}

#[test]
fn string_escapes_roundtrip() {
    shot_pattern!(r#"$x "say \"hi\" \d+ back\\slash";"#, @r#"$x "say \"hi\" \d+ back\slash";"#);

    let stmt = statement(r#"$x "say \"hi\" \d+ back\\slash";"#);
    let Statement::Instance(InstanceStatement::Attribute(attr)) = stmt else {
        panic!("expected an attribute statement");
    };
    assert_eq!(
        attr.operation,
        Operation::assign(r#"say "hi" \d+ back\slash"#)
    );
}

#[test]
fn type_properties() {
    shot_query!(r#"
        define
        person sub entity, abstract, key email, has name, plays actor;
        name sub attribute, value string, regex "^[A-Z].*$";
        casting sub! relation, relates actor, relates lead as actor;
        @has-name type @has-name;
    "#, @r#"
    define
    person sub entity, abstract, key email, has name, plays actor;
    name sub attribute, value string, regex "^[A-Z].*$";
    casting sub! relation, relates actor, relates lead as actor;
    @has-name type @has-name;
    "#);
}

#[test]
fn value_types() {
    shot_query!("
        define
        a sub attribute, value long;
        b sub attribute, value double;
        c sub attribute, value boolean;
        d sub attribute, value datetime;
    ", @r"
    define
    a sub attribute, value long;
    b sub attribute, value double;
    c sub attribute, value boolean;
    d sub attribute, value datetime;
    ");
}

#[test]
fn rule() {
    shot_query!("
        define
        flag-movies sub rule,
            when { $x isa movie; $x has rating < 2; },
            then { $x has flagged true; };
    ", @r"
    define
    flag-movies sub rule, when { $x isa movie; $x has rating < 2; }, then { $x has flagged true; };
    ");
}

#[test]
fn variable_led_type_statements() {
    shot_query!("match $t sub entity; $t has name; $t plays $role; get;", @r"
    match
    $t sub entity;
    $t has name;
    $t plays $role;
    ");

    let stmt = statement("$t has name;");
    let Statement::Type(type_stmt) = stmt else {
        panic!("expected a type statement");
    };
    assert_eq!(type_stmt.subject, TypeRef::Var(Variable::named("t")));
    assert_eq!(type_stmt.properties, [TypeProperty::Has(TypeRef::from("name"))]);
}

#[test]
fn has_with_value_is_a_thing_statement() {
    let stmt = statement("$x has name $n;");
    assert_eq!(stmt, Statement::from(var("x").has("name", Variable::named("n"))));

    let stmt = statement("$x has age >= 18;");
    let Statement::Instance(InstanceStatement::Thing(thing)) = stmt else {
        panic!("expected a thing statement");
    };
    assert!(thing.constraint.is_none());
    assert_eq!(
        thing.attributes[0].value,
        HasValue::Operation(Operation::Comparison(Comparison::Compare(
            Comparator::Gte,
            Comparable::Value(Value::Integer(18)),
        )))
    );
}

#[test]
fn unreserved_keywords_are_labels() {
    shot_query!("define count sub attribute, value long; path sub entity, has size;", @r"
    define
    count sub attribute, value long;
    path sub entity, has size;
    ");
}

#[test]
fn statement_classification() {
    assert!(matches!(
        statement("$x id V1;"),
        Statement::Instance(InstanceStatement::Thing(ref t))
            if matches!(t.constraint, Some(ThingConstraint::Id(ref id)) if id == "V1")
    ));
    assert!(matches!(
        statement("movie sub entity;"),
        Statement::Type(_)
    ));
    assert!(matches!(
        statement("contains \"x\";"),
        Statement::Instance(InstanceStatement::Attribute(_))
    ));
    assert!(matches!(
        statement("contains sub attribute;"),
        Statement::Type(_)
    ));
    assert!(matches!(
        statement("(actor: $x);"),
        Statement::Instance(InstanceStatement::Relation(ref r)) if r.var.is_anonymous()
    ));
}

#[test]
fn datetime_without_seconds() {
    let stmt = statement("$x 2018-05-01T10:30;");
    let Statement::Instance(InstanceStatement::Attribute(attr)) = stmt else {
        panic!("expected an attribute statement");
    };
    let expected = NaiveDate::from_ymd_opt(2018, 5, 1)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .unwrap();
    assert_eq!(attr.operation, Operation::assign(expected));
}
