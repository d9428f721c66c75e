use crate::stages::{BalanceClosers, CollapseClosers, EmptyObjects, OuterSlice, Stage};
use std::borrow::Cow;

#[test]
fn empty_object_with_stray_comma() {
    assert_eq!(EmptyObjects.apply("{\n  ,\n}"), "{}");
    assert_eq!(EmptyObjects.apply("{   }"), "{}");
    assert!(matches!(EmptyObjects.apply("{}"), Cow::Borrowed(_)));
}

#[test]
fn empty_object_nested() {
    let out = EmptyObjects.apply("{\"a\": { , }, \"b\": \"1\"}");
    assert_eq!(out, "{\"a\": {}, \"b\": \"1\"}");
}

#[test]
fn empty_object_ignores_braces_in_strings() {
    let s = "{\"a\": \"{ , }\"}";
    assert!(matches!(EmptyObjects.apply(s), Cow::Borrowed(_)));
}

#[test]
fn balance_appends_missing_closers_in_stack_order() {
    let out = BalanceClosers.apply("{\"a\": [\"1\", \"2\"");
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!({"a": ["1", "2"]}));
}

#[test]
fn balance_leaves_balanced_text_alone() {
    assert!(matches!(
        BalanceClosers.apply("{\"a\": \"1\"}"),
        Cow::Borrowed(_)
    ));
    // an unterminated string cannot be fixed by appending closers
    assert!(matches!(
        BalanceClosers.apply("{\"a\": \"unterminated"),
        Cow::Borrowed(_)
    ));
}

#[test]
fn collapse_runs_of_closing_braces() {
    let out = CollapseClosers.apply("{\"a\": \"1\"}}}");
    assert_eq!(out, "{\"a\": \"1\"}");
    let out = CollapseClosers.apply("{\"a\": \"1\"}\n}\n}");
    assert_eq!(out, "{\"a\": \"1\"}");
}

#[test]
fn collapse_ignores_braces_in_strings() {
    let s = "{\"a\": \"}}}\"}";
    assert!(matches!(CollapseClosers.apply(s), Cow::Borrowed(_)));
}

#[test]
fn outer_slice_strips_leading_and_trailing_garbage() {
    let out = OuterSlice.apply("garbage before {\"a\": \"1\"} garbage after");
    assert_eq!(out, "{\"a\": \"1\"}");
}

#[test]
fn outer_slice_without_braces_is_noop() {
    assert!(matches!(OuterSlice.apply("no braces here"), Cow::Borrowed(_)));
}
