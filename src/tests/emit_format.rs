use super::*;
use serde_json::json;

#[test]
fn two_space_indent_and_trailing_newline() {
    let doc = json!({"a": "1", "b": {"c": "2"}});
    let out = to_pretty_string(&doc, &opts());
    assert!(out.starts_with("{\n  \"a\""));
    assert!(out.contains("\n    \"c\": \"2\"\n"));
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("}\n\n"));
}

#[test]
fn non_ascii_preserved_literally_by_default() {
    let doc = json!({"sk": "ďakujem", "emoji": "🎉"});
    let out = to_pretty_string(&doc, &opts());
    assert!(out.contains("ďakujem"));
    assert!(out.contains("🎉"));
    assert!(!out.contains("\\u"));
}

#[test]
fn ensure_ascii_escapes_including_surrogate_pairs() {
    let mut o = opts();
    o.ensure_ascii = true;
    let doc = json!({"sk": "ď", "emoji": "🎉"});
    let out = to_pretty_string(&doc, &o);
    assert!(out.contains("\\u010F"));
    // U+1F389 as a surrogate pair
    assert!(out.contains("\\uD83C\\uDF89"));
    let back: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn ensure_ascii_output_is_pure_ascii() {
    let mut o = opts();
    o.ensure_ascii = true;
    let doc = json!({"mixed": "ascii and čučoriedka"});
    let out = to_pretty_string(&doc, &o);
    assert!(out.is_ascii());
}
