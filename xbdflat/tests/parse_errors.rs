// SPDX-License-Identifier: Apache-2.0

// Every malformed document fails as a whole: no pairs are returned.

use xbdflat::{parse, ErrKind};

macro_rules! generate_error_tests {
    ($($name:ident: $input:expr => $kind:ident at $position:expr),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_ $name>]() {
                    let err = parse($input).expect_err(concat!(stringify!($name), " should fail"));
                    assert_eq!(err.kind(), ErrKind::$kind, "{:?}", $input);
                    assert_eq!(err.position(), $position, "{:?}", $input);
                }
            }
        )*
    };
}

generate_error_tests!(
    empty_input: "" => MissingOpenBrace at 0,
    no_brace: "\"a\": \"1\"" => MissingOpenBrace at 8,
    array_root: "[\"a\"]" => MissingOpenBrace at 5,
    only_open_brace: "{" => UnexpectedEndOfInput at 1,
    open_brace_and_space: "{   " => UnexpectedEndOfInput at 4,
    missing_final_brace: r#"{"a": {"b": "1"}"# => UnexpectedEndOfInput at 16,
    missing_value: r#"{"a":"# => UnexpectedEndOfInput at 5,
    value_after_colon_runs_out: r#"{"a": 1"# => UnexpectedEndOfInput at 7,
    nothing_after_value: r#"{"a": "1""# => UnexpectedEndOfInput at 9,
    dangling_comma: r#"{"a": "1","# => UnexpectedEndOfInput at 10,
    unterminated_key: r#"{"abc"# => UnterminatedString at 1,
    unterminated_value: r#"{"a": "abc}"# => UnterminatedString at 6,
    escaped_closing_quote: r#"{"a": "abc\"}"# => UnterminatedString at 6,
    unquoted_key: r#"{a: "1"}"# => MalformedInput at 1,
    nested_unquoted_key: r#"{"a": {b: "1"}}"# => MalformedInput at 7,
    stray_colon: r#"{"a": "1", : "2"}"# => MalformedInput at 11,
    nested_open_in_key_position: r#"{"a": [{"b": "1"}]}"# => MalformedInput at 7,
);

#[test]
fn test_error_message_has_line_and_column() {
    let err = parse("{\n  \"a\": \"1\",\n  b: \"2\"\n}").unwrap_err();
    assert_eq!((err.line(), err.column()), (3, 3));
    assert_eq!(
        err.to_string(),
        "malformed JSON: unexpected 'b' at line 3, column 3"
    );
}
