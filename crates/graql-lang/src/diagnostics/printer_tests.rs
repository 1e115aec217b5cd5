use crate::{Error, parse_query};

fn error(source: &str) -> Error {
    parse_query(source).unwrap_err()
}

#[test]
fn parse_error_snippet() {
    let source = "match $x isa;";
    let result = error(source).render(source);
    insta::assert_snapshot!(result, @r#"
    error: unexpected ";" at 1:13, expected one of variable, label, implicit label
      |
    1 | match $x isa;
      |             ^ expected one of variable, label, implicit label
    "#);
}

#[test]
fn invalid_literal_snippet() {
    let source = "insert $x 2018-13-45;";
    let result = error(source).render(source);
    insta::assert_snapshot!(result, @r#"
    error: invalid date literal "2018-13-45" at 1:11
      |
    1 | insert $x 2018-13-45;
      |           ^^^^^^^^^^ invalid date
    "#);
}

#[test]
fn lex_error_snippet() {
    let source = "match $x isa movie; ^";
    let result = error(source).render(source);
    insta::assert_snapshot!(result, @r"
    error: unexpected character '^' at 1:21
      |
    1 | match $x isa movie; ^
      |                     ^ unexpected character
    ");
}

#[test]
fn snippet_on_later_line() {
    let source = "match\n$x isa movie;\nget $x\nlimit 5;";
    let result = error(source).render(source);
    assert!(result.starts_with("error: unexpected \"limit\" at 4:1, expected `;`"));
    assert!(result.contains("4 | limit 5;"));
}

#[test]
fn end_of_input_points_past_the_source() {
    let source = "match $x isa movie";
    let result = error(source).render(source);
    assert!(result.starts_with("error: unexpected end of input at 1:19, expected `;`"));
    assert!(result.contains("1 | match $x isa movie"));
}

#[test]
fn with_path() {
    let source = "match $x isa;";
    let err = error(source);
    let result = err.printer().source(source).path("movies.gql").render();
    assert!(result.contains("movies.gql:1:13"), "{result}");
}

#[test]
fn colored_output_differs_from_plain() {
    let source = "match $x isa;";
    let err = error(source);
    let plain = err.printer().source(source).render();
    let colored = err.printer().source(source).colored(true).render();
    assert_ne!(plain, colored);
    assert!(colored.contains("\u{1b}["));
}

#[test]
fn errors_without_location_render_plain() {
    let source = "match $x isa movie; get $y;";
    let result = error(source).render(source);
    insta::assert_snapshot!(result, @"error: The variable '$y' is out of scope of the query.");

    let fuel = Error::ExecFuelExhausted;
    insta::assert_snapshot!(fuel.render(source), @"error: execution limit exceeded");
}

#[test]
fn without_source_renders_plain() {
    let err = error("match $x isa;");
    insta::assert_snapshot!(
        err.printer().render(),
        @r#"error: unexpected ";" at 1:13, expected one of variable, label, implicit label"#
    );
}
