//! Json to KeyPath tests.

use path_notation::{BuildError, JsonKind, Key, KeyPath};

fn assert_json(input: &str, expected: &str) {
    let path = KeyPath::from_json_str(input).unwrap();
    assert_eq!(path.to_string(), expected, "input: {}", input);

    let json: serde_json::Value = serde_json::from_str(input).unwrap();
    assert_eq!(KeyPath::try_from(&json).unwrap(), path);
}

fn assert_unsupported(input: &str, kind: JsonKind) {
    match KeyPath::from_json_str(input) {
        Err(BuildError::UnsupportedJsonValue(k)) => assert_eq!(k, kind, "input: {}", input),
        other => panic!("expected unsupported {} for {}, got {:?}", kind, input, other),
    }
}

#[test]
fn test_json_to_key_path() {
    assert_json(r#""foo.bar""#, "foo.bar");
    assert_json(r#"0"#, "[0]");
    assert_json(r#"[]"#, "");
    assert_json(r#"["foo", "bar", 2, "10", "baz\\.qux"]"#, "foo.bar[2].10[baz.qux]");
    assert_json(r#"["foo.bar", [0, ["baz"]]]"#, "foo.bar[0].baz");
    assert_json(r#"["a", 2.0, 2e0, 1.5, -1]"#, "a[2][2][1.5].-1");
    assert_json(r#"["a", 123456789012345678901234567890]"#, "a.123456789012345678901234567890");
    assert_json(r#"["a", 1e150, 1e-150]"#, "a.1e+150.1e-150");
}

#[test]
fn test_json_numbers_are_keys() {
    let path = KeyPath::from_json_str("[1.5, -1, 3]").unwrap();
    assert_eq!(path.keys(), &[Key::from("1.5"), Key::from("-1"), Key::Index(3)]);
}

#[test]
fn test_json_unsupported() {
    assert_unsupported("null", JsonKind::Null);
    assert_unsupported("true", JsonKind::Bool);
    assert_unsupported(r#"{"key": "foo"}"#, JsonKind::Object);
    assert_unsupported(r#"["foo", [1, false]]"#, JsonKind::Bool);
}

#[test]
fn test_json_invalid() {
    match KeyPath::from_json_str(r#"["foo""#) {
        Err(BuildError::JsonError(_)) => {}
        other => panic!("expected json error, got {:?}", other),
    }
}
