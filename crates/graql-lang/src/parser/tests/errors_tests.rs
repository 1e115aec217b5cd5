use crate::test_utils::shot_error;
use crate::{Error, LexError, ParseError, parse_pattern, parse_query, parse_query_list};

#[test]
fn missing_semicolon_at_end_of_input() {
    shot_error!("match $x isa movie", @"unexpected end of input at 1:19, expected `;`");
    shot_error!("match $x isa movie; get $x", @"unexpected end of input at 1:27, expected `;`");
    shot_error!("define movie sub entity", @"unexpected end of input at 1:24, expected `;`");
}

#[test]
fn empty_input() {
    shot_error!("", @"unexpected end of input at 1:1, expected one of `match`, `define`, `undefine`, `insert`, `compute`");
}

#[test]
fn query_must_start_with_a_keyword() {
    shot_error!("get $x;", @"unexpected \"get\" at 1:1, expected one of `match`, `define`, `undefine`, `insert`, `compute`");
}

#[test]
fn missing_type() {
    shot_error!("match $x isa;", @"unexpected \";\" at 1:13, expected one of variable, label, implicit label");
}

#[test]
fn variable_without_properties() {
    shot_error!("insert $x;", @"unexpected \";\" at 1:10, expected one of `(`, `==`, `!==`, `!=`, `>`, `>=`, `<`, `<=`, `has`, `isa`, `isa!`, `id`, `like`, `contains`, `true`, `false`, string, integer, real, date, datetime");
}

#[test]
fn neq_takes_no_attributes() {
    shot_error!("match $x != $y, has name $n;", @r#"unexpected "," at 1:15, expected `;`"#);
}

#[test]
fn trailing_input() {
    shot_error!("compute count; compute count;", @"unexpected \"compute\" at 1:16, expected end of input");
}

#[test]
fn position_on_later_line() {
    shot_error!("match\n$x isa movie;\nget $x\nlimit 5;", @"unexpected \"limit\" at 4:1, expected `;`");
}

#[test]
fn invalid_literals() {
    shot_error!("match $x isa movie; limit -1;", @r#"invalid unsigned integer literal "-1" at 1:27"#);
    shot_error!("insert $x 2018-13-45;", @r#"invalid date literal "2018-13-45" at 1:11"#);
    shot_error!("insert $x 99999999999999999999;", @r#"invalid integer literal "99999999999999999999" at 1:11"#);
    shot_error!("match $x 1e400;", @r#"invalid real literal "1e400" at 1:10"#);
    shot_error!("match $x has rating < -2.5e999;", @r#"invalid real literal "-2.5e999" at 1:23"#);
}

#[test]
fn lexer_errors_surface_through_parse() {
    shot_error!("match $x has title \"Heat", @"unterminated string starting at 1:20");

    let err = parse_query("match $x isa movie; ^").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnexpectedChar { ch: '^', .. })));
}

#[test]
fn error_carries_span_and_position() {
    let source = "match $x isa;";
    let err = parse_query(source).unwrap_err();
    let Error::Parse(ParseError::UnexpectedToken { kind, .. }) = &err else {
        panic!("expected an unexpected-token error, got {err:?}");
    };
    assert_eq!(kind.describe(), "`;`");
    let span = err.span().unwrap();
    assert_eq!(&source[span.range()], ";");

    let location = serde_json::json!({ "span": span, "position": err.position() });
    insta::assert_snapshot!(location, @r#"{"position":{"column":13,"line":1,"offset":12},"span":{"end":13,"start":12}}"#);
}

#[test]
fn end_of_input_span_is_empty() {
    let source = "match $x isa movie";
    let err = parse_query(source).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEof { .. })));
    let span = err.span().unwrap();
    assert_eq!((span.start, span.end), (source.len(), source.len()));
}

#[test]
fn validation_errors_have_no_span() {
    let err = parse_query("match $x isa movie; get $y;").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.span(), None);
    assert_eq!(err.position(), None);
    insta::assert_snapshot!(err, @"The variable '$y' is out of scope of the query.");
}

#[test]
fn query_list_stops_at_first_error() {
    let err = parse_query_list("define movie sub entity; insert $x isa movie").unwrap_err();
    insta::assert_snapshot!(err, @"unexpected end of input at 1:45, expected `;`");
}

#[test]
fn pattern_errors() {
    let err = parse_pattern("$x isa movie; $y isa person;").unwrap_err();
    insta::assert_snapshot!(err, @r#"unexpected "$y" at 1:15, expected end of input"#);

    let err = parse_pattern("{ $x isa movie; } or;").unwrap_err();
    insta::assert_snapshot!(err, @r#"unexpected ";" at 1:21, expected `{`"#);

    let err = parse_pattern("not $x isa movie;").unwrap_err();
    insta::assert_snapshot!(err, @r#"unexpected "$x" at 1:5, expected `{`"#);
}
