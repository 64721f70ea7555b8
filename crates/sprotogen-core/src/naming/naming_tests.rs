#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("seq", "Seq")]
#[test_case("userName", "UserName")]
#[test_case("Already", "Already")]
#[test_case("x", "X")]
#[test_case("snake_case", "Snake_case")]
fn export_name___plain_names___capitalizes_first_letter(input: &str, expected: &str) {
    assert_eq!(export_name(input, &[]), expected);
}

#[test]
fn export_name___reserved_candidate___appends_one_marker() {
    assert_eq!(export_name("self", &["Self"]), "Self_");
}

#[test]
fn export_name___reserved_only_before_capitalizing___unchanged() {
    // The check runs on the exported candidate, not the schema name.
    assert_eq!(export_name("type", &["type"]), "Type");
}

#[test]
fn export_name___marked_name_reserved_too___still_one_marker() {
    assert_eq!(export_name("self", &["Self", "Self_"]), "Self_");
}

#[test]
fn export_name___same_input___same_output() {
    let reserved = ["Self"];

    assert_eq!(export_name("self", &reserved), export_name("self", &reserved));
    assert_eq!(export_name("count", &reserved), export_name("count", &reserved));
}

#[test]
fn export_name___empty___returns_empty() {
    assert_eq!(export_name("", &[]), "");
}

#[test]
fn RESERVED_MARKER___is_underscore() {
    assert_eq!(RESERVED_MARKER, '_');
}
