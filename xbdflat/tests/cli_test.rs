// SPDX-License-Identifier: Apache-2.0

#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn parse_xbd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parse_xbd"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run parse_xbd")
}

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("xbdflat-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_prints_pairs() {
    let path = write_input("ok.bd", r#"{"x":"1","y":{"z":"2"}}"#);
    let output = parse_xbd(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "x = 1\ny.z = 2\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_keep_quotes_flag() {
    let path = write_input("quotes.bd", r#"{"s":"abc","n":7}"#);
    let output = parse_xbd(&["--keep-quotes", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "s = \"abc\"\nn = 7\n");
}

#[test]
fn test_missing_argument_exits_with_one() {
    let output = parse_xbd(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_missing_file() {
    let output = parse_xbd(&["/nonexistent/design.bd"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "parse_xbd: Can't open /nonexistent/design.bd\n"
    );
}

#[test]
fn test_parse_error_prints_nothing_to_stdout() {
    let path = write_input("bad.bd", "{\"a\": \"1\", \"b\": {\"c\": \"2\"}");
    let output = parse_xbd(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "parse_xbd: unexpected end of JSON data at line 1, column 27\n"
    );
}

#[test]
fn test_version() {
    let output = parse_xbd(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("parse_xbd "));
}
