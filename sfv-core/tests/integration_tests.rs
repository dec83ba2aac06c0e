use sfv::{key_ref, parse_dictionary, parse_item, BareItem};
use std::error::Error;

#[test]
fn report_to_header_roundtrip() -> Result<(), Box<dyn Error>> {
    // cross-origin-embedder-policy: require-corp; report-to="coep"
    let coep = r#"require-corp; report-to="coep""#;
    let endpoints = r#"csp="https://example.com/csp-reports", hpkp="https://example.com/hpkp-reports", coep="https://example.com/coep""#;

    let coep_parsed = parse_item(coep)?;
    let token = coep_parsed
        .value()
        .as_token()
        .ok_or("unexpected BareItem variant")?;
    assert_eq!(token.as_str(), "require-corp");

    let coep_endpoint = coep_parsed
        .parameter(key_ref("report-to"))?
        .as_str()
        .ok_or("unexpected BareItem variant")?
        .as_str()
        .to_owned();

    let endpoints_parsed = parse_dictionary(endpoints)?;
    let member = endpoints_parsed.get(sfv::KeyRef::from_str(&coep_endpoint)?)?;
    let item_value = member
        .as_item()
        .ok_or("unexpected member variant")?
        .value()
        .as_str()
        .ok_or("unexpected BareItem variant")?;
    assert_eq!(item_value.as_str(), "https://example.com/coep");
    Ok(())
}

#[test]
fn dictionary_entries_preserve_insertion_order() {
    let dict = parse_dictionary(r#"a=foobar;test="bar, baz", b=toto"#).unwrap();
    let keys: Vec<_> = dict.keys().map(|k| k.as_str().to_owned()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(
        sfv::Canonical::canonical(&dict),
        r#"a=foobar;test="bar, baz", b=toto"#
    );
}

#[test]
fn boolean_with_params_in_dictionary() {
    let dict = parse_dictionary("a=?0,   b,   c; foo=bar").unwrap();
    let c = dict.get(key_ref("c")).unwrap();
    let item = c.as_item().unwrap();
    assert_eq!(item.value(), &BareItem::Boolean(true));
    let foo = item.parameter(key_ref("foo")).unwrap();
    assert_eq!(foo.as_token().unwrap().as_str(), "bar");
}
