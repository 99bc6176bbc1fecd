use alloc::{string::String, vec};

use rstest::rstest;

use super::utils::object;
use crate::{Map, ParserOptions, Value, parse_document, parse_document_with};

#[test]
fn empty_object() {
    assert_eq!(parse_document(b"{}"), Ok(Value::Object(Map::new())));
}

#[test]
fn single_string_entry() {
    assert_eq!(
        parse_document(br#"{"key":"value"}"#),
        Ok(object([("key", "value".into())]))
    );
}

#[test]
fn two_string_entries() {
    assert_eq!(
        parse_document(b"{\n  \"key\": \"value\",\n  \"key2\": \"value\"\n}\n"),
        Ok(object([("key", "value".into()), ("key2", "value".into())]))
    );
}

#[test]
fn scalar_kinds() {
    assert_eq!(
        parse_document(br#"{"key1":true,"key2":false,"key3":null,"key4":"value","key5":101}"#),
        Ok(object([
            ("key1", Value::Boolean(true)),
            ("key2", Value::Boolean(false)),
            ("key3", Value::Null),
            ("key4", "value".into()),
            ("key5", Value::Integer(101)),
        ]))
    );
}

#[test]
fn nested_object_and_quoted_date() {
    assert_eq!(
        parse_document(br#"{"key1":{"nestedKey":1,"nestedKey2":2},"key2":"2024-02-23"}"#),
        Ok(object([
            (
                "key1",
                object([
                    ("nestedKey", Value::Integer(1)),
                    ("nestedKey2", Value::Integer(2)),
                ]),
            ),
            ("key2", "2024-02-23".into()),
        ]))
    );
}

#[test]
fn empty_containers() {
    assert_eq!(
        parse_document(br#"{"key":"value","key-o":{},"key-l":[]}"#),
        Ok(object([
            ("key", "value".into()),
            ("key-o", object([])),
            ("key-l", Value::Array(vec![])),
        ]))
    );
}

#[test]
fn array_of_arrays_keeps_order() {
    assert_eq!(
        parse_document(br#"{"key-l":[[1,2],[3,4]]}"#),
        Ok(object([(
            "key-l",
            Value::Array(vec![
                Value::Array(vec![Value::Integer(1), Value::Integer(2)]),
                Value::Array(vec![Value::Integer(3), Value::Integer(4)]),
            ]),
        )]))
    );
}

#[test]
fn entries_after_nested_containers_are_kept() {
    let doc = br#"{"a":{"b":{"c":{}}},"d":[[[]]],"e":1}"#;
    assert_eq!(
        parse_document(doc),
        Ok(object([
            ("a", object([("b", object([("c", object([]))]))])),
            (
                "d",
                Value::Array(vec![Value::Array(vec![Value::Array(vec![])])]),
            ),
            ("e", Value::Integer(1)),
        ]))
    );
}

#[test]
fn objects_inside_arrays_are_elements() {
    let doc = br#"{"list":[{"k":"v"},"s",{"n":[1,{"deep":null}]},-2.5]}"#;
    assert_eq!(
        parse_document(doc),
        Ok(object([(
            "list",
            Value::Array(vec![
                object([("k", "v".into())]),
                "s".into(),
                object([(
                    "n",
                    Value::Array(vec![Value::Integer(1), object([("deep", Value::Null)])]),
                )]),
                Value::Float(-2.5),
            ]),
        )]))
    );
}

#[test]
fn nesting_depth_is_preserved() {
    let value = parse_document(br#"{"a":{"b":{"c":{"d":[[{"e":0}]]}}}}"#).unwrap();
    assert_eq!(value.depth(), 7);

    let mut cur = &value;
    for key in ["a", "b", "c"] {
        cur = &cur.as_object().unwrap()[key];
        assert!(cur.is_object());
    }
    let d = &cur.as_object().unwrap()["d"];
    let e = &d.as_array().unwrap()[0].as_array().unwrap()[0];
    assert_eq!(e, &object([("e", Value::Integer(0))]));
}

#[test]
fn duplicate_keys_keep_the_last_binding() {
    assert_eq!(
        parse_document(br#"{"k":1,"k":2}"#),
        Ok(object([("k", Value::Integer(2))]))
    );
}

#[test]
fn keys_are_taken_verbatim() {
    assert_eq!(
        parse_document(br#"{"":0,"a b":1,"a\":2}"#),
        Ok(object([
            ("", Value::Integer(0)),
            ("a b", Value::Integer(1)),
            ("a\\", Value::Integer(2)),
        ]))
    );
}

#[rstest]
#[case::integer("7", Value::Integer(7))]
#[case::negative("-12", Value::Integer(-12))]
#[case::float("0.5", Value::Float(0.5))]
#[case::exponent("1e3", Value::Float(1000.0))]
#[case::big("123456789012345678901234567890", Value::Float(1.234_567_890_123_456_8e29))]
#[case::string("\"x\"", Value::String(String::from("x")))]
#[case::t("true", Value::Boolean(true))]
#[case::f("false", Value::Boolean(false))]
#[case::null("null", Value::Null)]
fn scalar_values(#[case] literal: &str, #[case] expected: Value) {
    let src = alloc::format!("{{\"v\": {literal}}}");
    assert_eq!(parse_document(src.as_bytes()), Ok(object([("v", expected)])));
}

#[test]
fn lenient_whitespace_between_tokens() {
    let options = ParserOptions {
        allow_unicode_whitespace: true,
        ..ParserOptions::default()
    };
    let src = "{\u{2003}\"k\"\u{3000}:\u{a0}[1,\u{2028}2]}";
    assert_eq!(
        parse_document_with(src.as_bytes(), &options),
        Ok(object([(
            "k",
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        )]))
    );
}

#[test]
fn tolerated_commas_in_arrays() {
    // Only the fixed pair table guards commas, and `[,` and `,,` are not in it.
    assert_eq!(
        parse_document(br#"{"l":[,1,,2]}"#),
        Ok(object([(
            "l",
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        )]))
    );
}
