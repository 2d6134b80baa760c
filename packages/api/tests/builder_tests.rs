//! Fluent `JsonQuery` builder behavior

use jsonquery::{
    CodecConfig, DecodeMode, JsonQuery, JsonQueryError, MatrixFallback, NodeId, QueryResult, Tree,
    Value,
};
use serde_json::json;

#[test]
fn test_builder_value_in_both_decode_modes() {
    let source = json!({"counts": [3, 1, 2]});

    let reference = JsonQuery::new(source.clone())
        .path("//counts")
        .value()
        .expect("valid query");
    assert_eq!(reference, Value::from(vec![3.0, 1.0, 2.0]));

    let faithful = JsonQuery::new(source)
        .config(CodecConfig::default().with_decode_mode(DecodeMode::Faithful))
        .path("//counts")
        .value()
        .expect("valid query");
    assert_eq!(faithful, Value::from(vec![3, 1, 2]));
}

#[test]
fn test_builder_from_json_text() {
    let selection = JsonQuery::json(r#"{"a": {"b": 1, "c": 2}}"#)
        .debug()
        .path("/root/a/*")
        .nodes()
        .expect("valid query");
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_builder_tree_with_custom_root() {
    let tree = JsonQuery::new(json!({"a": 1}))
        .config(CodecConfig::default().with_root_tag("doc"))
        .tree()
        .expect("encodes");
    let root = tree.root().expect("root element");
    assert_eq!(tree.tag(root), "doc");
}

#[test]
fn test_builder_rejects_invalid_configuration() {
    let err = JsonQuery::new(json!({"a": 1}))
        .config(CodecConfig::default().with_root_tag(""))
        .path("/root/a")
        .value()
        .expect_err("empty root tag");
    assert!(matches!(err, JsonQueryError::Configuration(_)));
}

#[test]
fn test_builder_with_matrix_fallback() {
    let value = JsonQuery::new(json!({"x": [1.0, 2.0], "y": [3.0, 4.0]}))
        .fallback(MatrixFallback)
        .path("/root/*")
        .value()
        .expect("valid query");
    assert_eq!(
        value,
        Value::Sequence(vec![Value::from(vec![1.0, 2.0]), Value::from(vec![3.0, 4.0])])
    );
}

#[test]
fn test_builder_with_custom_engine() {
    // Selects every child of the root element regardless of the path
    let children = |tree: &Tree, _: &str| -> QueryResult<Vec<NodeId>> {
        Ok(tree
            .root()
            .map(|root| tree.children(root).to_vec())
            .unwrap_or_default())
    };

    let value = JsonQuery::new(json!({"a": 1, "b": 2}))
        .engine(children)
        .path("anything")
        .value()
        .expect("custom engine");
    assert_eq!(value.get("b"), Some(&Value::Int(2)));
}

#[test]
fn test_builder_deserializes_typed_results() {
    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Site {
        code: String,
        flow: f64,
    }

    let site: Site = JsonQuery::new(json!({"site": {"code": "01646500", "flow": 12.5}}))
        .config(CodecConfig::faithful())
        .path("/root/site")
        .deserialize()
        .expect("decoded site fits the struct");
    assert_eq!(
        site,
        Site {
            code: "01646500".to_string(),
            flow: 12.5,
        }
    );

    let err = JsonQuery::new(json!({"n": "not a number"}))
        .path("/root/n")
        .deserialize::<f64>()
        .expect_err("string is not a float");
    assert!(matches!(err, JsonQueryError::Json(_)));
}
