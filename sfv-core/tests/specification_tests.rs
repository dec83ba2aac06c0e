//! Concrete end-to-end scenarios from the RFC 8941 grammar, covering each
//! top-level shape and the round-trip/rejection properties a conformance
//! suite must hold (the httpwg corpus itself isn't vendored in this repo).

use sfv::{parse_dictionary, parse_item, parse_list, Canonical};

#[test]
fn dictionary_scenario() {
    let dict = parse_dictionary("a=?0,   b,   c; foo=bar").unwrap();
    assert_eq!(dict.canonical(), "a=?0, b, c;foo=bar");
    assert_eq!(dict.len(), 3);
}

#[test]
fn nested_list_scenario() {
    let list = parse_list(r#"("foo"; a=1;b=2);lvl=5, ("bar" "baz");lvl=1"#).unwrap();
    assert_eq!(
        list.canonical(),
        r#"("foo";a=1;b=2);lvl=5, ("bar" "baz");lvl=1"#
    );
    assert_eq!(list.len(), 2);
}

#[test]
fn item_with_parameters_scenario() {
    let item = parse_item(r#""foo";a=1;b=2"#).unwrap();
    assert_eq!(item.canonical(), r#""foo";a=1;b=2"#);
}

#[test]
fn mixed_list_scenario() {
    let list = parse_list(r#"token, "string", ?1; parameter, (42 42.0)"#).unwrap();
    assert_eq!(list.len(), 4);
}

#[test]
fn dictionary_with_quoted_comma_scenario() {
    let dict = parse_dictionary(r#"a=foobar;test="bar, baz", b=toto"#).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(
        dict.canonical(),
        r#"a=foobar;test="bar, baz", b=toto"#
    );
}

#[test]
fn byte_sequence_scenario() {
    let item = parse_item(":SGVsbG8gV29ybGQ=:").unwrap();
    assert_eq!(item.canonical(), ":SGVsbG8gV29ybGQ=:");
}

#[test]
fn round_trip_is_idempotent() {
    for input in [
        "a=?0,   b,   c; foo=bar",
        r#"("foo"; a=1;b=2);lvl=5, ("bar" "baz");lvl=1"#,
    ] {
        let first = parse_list(input)
            .map(|v| v.canonical())
            .or_else(|_| parse_dictionary(input).map(|v| v.canonical()))
            .unwrap();
        let second = parse_list(&first)
            .map(|v| v.canonical())
            .or_else(|_| parse_dictionary(&first).map(|v| v.canonical()))
            .unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn must_fail_cases_reject() {
    for input in ["a, b,", "\ta", "@1", "1.2345", "1000000000000000"] {
        assert!(parse_item(input).is_err() && parse_list(input).is_err());
    }
}

#[test]
fn numeric_bounds_scenario() {
    assert!(parse_item("999999999999999").is_ok());
    assert!(parse_item("1000000000000000").is_err());
    assert_eq!(
        parse_item("-999999999999999").unwrap().canonical(),
        "-999999999999999"
    );
}
