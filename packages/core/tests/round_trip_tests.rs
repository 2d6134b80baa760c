//! Whole-document round trips through the tree and back to JSON

use jsonquery_core::prelude::*;
use serde_json::json;

fn round_trip(source: &serde_json::Value) -> serde_json::Value {
    let value = Value::from(source.clone());
    let tree = to_tree(&value).expect("document encodes");
    let config = CodecConfig::faithful();
    let decoded = Selection::run(tree, &PathEngine::new(), "/root/*")
        .expect("valid path")
        .decode_mapping(&Decoder::new(&config));
    serde_json::Value::from(Value::Mapping(decoded))
}

#[test]
fn test_nested_document_round_trips_in_faithful_mode() {
    let source = json!({
        "site": {
            "code": "01646500",
            "location": {"lat": 38.9497, "lon": -77.1276},
            "active": true,
            "parameters": ["00060", "00065"],
            "readings": [{"t": 1, "q": 2.5}, {"t": 2, "q": 3.5}]
        },
        "retrieved": null
    });
    assert_eq!(round_trip(&source), source);
}

#[test]
fn test_empty_mapping_survives_faithful_decoding() {
    let source = json!({"a": {}, "b": 1});
    assert_eq!(round_trip(&source), source);
}

#[test]
fn test_single_element_lists_stay_lists_in_faithful_mode() {
    let source = json!({"tags": ["only"], "n": [7], "nested": {"ids": [1]}});
    assert_eq!(round_trip(&source), source);
}

#[test]
fn test_single_element_list_collapses_to_scalar_in_reference_mode() {
    let tree = to_tree(&Value::from(json!({"tags": ["only"], "n": [7]}))).expect("document encodes");
    let decoded = Selection::run(tree, &PathEngine::new(), "/root/*")
        .expect("valid path")
        .decode_mapping(&Decoder::new(&CodecConfig::default()));
    assert_eq!(
        serde_json::Value::from(Value::Mapping(decoded)),
        json!({"tags": "only", "n": 7})
    );
}

#[test]
fn test_encoded_tree_renders_as_xml() {
    let source = Value::from(json!({"a": {"b": [1, 2]}}));
    let tree = to_tree(&source).expect("document encodes");
    assert_eq!(
        tree.to_xml_string(),
        concat!(
            "<root datatype=\"dict\" list_member=\"false\">\n",
            "  <a datatype=\"dict\" list_member=\"false\">\n",
            "    <b datatype=\"int\" list_member=\"true\" index=\"0\">1</b>\n",
            "    <b datatype=\"int\" list_member=\"true\" index=\"1\">2</b>\n",
            "  </a>\n",
            "</root>\n",
        )
    );
}

#[test]
fn test_custom_root_tag_and_depth_limit() {
    let config = CodecConfig::default().with_root_tag("document").with_max_depth(2);
    assert!(config.validate().is_ok());

    let shallow = Value::from(json!({"a": {"b": 1}}));
    let tree = Encoder::new(&config)
        .encode_document(&shallow)
        .expect("within depth");
    let nodes = PathEngine::new()
        .select(&tree, "/document/a/b")
        .expect("valid path");
    assert_eq!(nodes.len(), 1);

    let deep = Value::from(json!({"a": {"b": {"c": {"d": 1}}}}));
    let err = Encoder::new(&config)
        .encode_document(&deep)
        .expect_err("too deep");
    assert!(matches!(err, ConversionError::DepthExceeded { max_depth: 2 }));
}

#[test]
fn test_invalid_configuration_is_reported() {
    let config = CodecConfig::default().with_root_tag("1st");
    assert!(matches!(
        config.validate(),
        Err(ConfigurationError::InvalidRootTag(_))
    ));

    let config = CodecConfig::default().with_max_depth(0);
    assert!(matches!(
        config.validate(),
        Err(ConfigurationError::InvalidDepth(_))
    ));
}

#[test]
fn test_non_mapping_documents_are_rejected() {
    let err = to_tree(&Value::from(vec![1, 2])).expect_err("sequence root");
    assert!(matches!(err, ConversionError::NotAMapping { ref type_name } if type_name == "list"));
}
