//! Entry point behavior of the public API

use jsonquery::{
    CodecConfig, ConversionError, JsonQueryError, QueryError, Value, query, query_as_value,
    query_json, to_tree,
};
use serde_json::json;

fn document(source: serde_json::Value) -> Value {
    source.into()
}

#[test]
fn test_query_as_value_collapses_single_key() {
    let value = document(json!({"only": {"x": 1}, "other": 2}));
    let decoded = query_as_value(&value, "/root/other").expect("valid query");
    assert_eq!(decoded, Value::Int(2));
}

#[test]
fn test_query_returns_tree_and_nodes() {
    let value = document(json!({"a": [1, 2, 3], "b": "x"}));
    let selection = query(&value, "/root/a[@index >= 1]").expect("valid query");
    assert_eq!(selection.len(), 2);
    let texts: Vec<&str> = selection.iter().filter_map(|node| node.text()).collect();
    assert_eq!(texts, ["2", "3"]);
    assert_eq!(selection.tree().tag(selection.nodes()[0]), "a");
}

#[test]
fn test_multi_key_results_stay_mappings() {
    let value = document(json!({"a": 1, "b": "two"}));
    let decoded = query_as_value(&value, "/root/a | /root/b").expect("valid query");
    assert_eq!(decoded, document(json!({"a": 1, "b": "two"})));
}

#[test]
fn test_series_values_scenario() {
    let decoded = query_json(r#"{"series":{"values":[{"v":1},{"v":2}]}}"#, "//v")
        .expect("valid query");
    assert_eq!(decoded, Value::from(vec![1.0, 2.0]));
}

#[test]
fn test_errors_are_aggregated() {
    let value = document(json!({"a": 1}));
    let err = query_as_value(&value, "/root/[").expect_err("invalid path");
    assert!(err.is_query_error());
    assert!(matches!(
        err,
        JsonQueryError::Query(QueryError::InvalidExpression { .. })
    ));

    let err = query_json("[1, 2]", "/root").expect_err("array document");
    assert!(matches!(
        err,
        JsonQueryError::Conversion(ConversionError::NotAMapping { .. })
    ));

    let err = query_json("{\"a\": ", "/root").expect_err("truncated json");
    assert!(matches!(err, JsonQueryError::Json(_)));
}

#[test]
fn test_to_tree_uses_default_root() {
    let tree = to_tree(&document(json!({"a": true}))).expect("encodes");
    let root = tree.root().expect("root element");
    assert_eq!(tree.tag(root), CodecConfig::default().root_tag);
    assert_eq!(tree.attribute(tree.children(root)[0], "datatype"), Some("bool"));
}
