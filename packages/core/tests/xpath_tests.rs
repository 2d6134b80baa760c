//! Path engine selection semantics over encoded documents

use jsonquery_core::prelude::*;

fn station_tree() -> Tree {
    let source: Value = serde_json::from_str::<serde_json::Value>(
        r#"{
            "station": {"name": "A", "readings": [1, 5, 3]},
            "meta": {"source": "nwis", "tags": ["x", "y"]}
        }"#,
    )
    .expect("valid json")
    .into();
    to_tree(&source).expect("mapping encodes")
}

fn texts(tree: &Tree, path: &str) -> Vec<String> {
    PathEngine::new()
        .select(tree, path)
        .expect("valid path")
        .into_iter()
        .map(|node| tree.text(node).unwrap_or_default().to_string())
        .collect()
}

fn tags(tree: &Tree, path: &str) -> Vec<String> {
    PathEngine::new()
        .select(tree, path)
        .expect("valid path")
        .into_iter()
        .map(|node| tree.tag(node).to_string())
        .collect()
}

#[test]
fn test_absolute_relative_and_descendant_paths() {
    let tree = station_tree();
    assert_eq!(texts(&tree, "/root/station/readings"), ["1", "5", "3"]);
    assert_eq!(texts(&tree, "station/name"), ["A"]);
    assert_eq!(texts(&tree, "//tags"), ["x", "y"]);
    assert!(texts(&tree, "root").is_empty());
}

#[test]
fn test_positional_predicates() {
    let tree = station_tree();
    assert_eq!(texts(&tree, "//readings[2]"), ["5"]);
    assert_eq!(texts(&tree, "//readings[last()]"), ["3"]);
    assert_eq!(texts(&tree, "//readings[position() < 3]"), ["1", "5"]);
    assert_eq!(texts(&tree, "(//readings | //tags)[4]"), ["x"]);
}

#[test]
fn test_attribute_and_text_predicates() {
    let tree = station_tree();
    assert_eq!(texts(&tree, "//readings[@index='1']"), ["5"]);
    assert_eq!(texts(&tree, "//readings[@index = 1 or @index = 2]"), ["5", "3"]);
    assert_eq!(texts(&tree, "//readings[. > 2]"), ["5", "3"]);
    assert_eq!(tags(&tree, "/root/*[name = 'A']"), ["station"]);
    assert_eq!(tags(&tree, "/root/*[source]"), ["meta"]);
    assert_eq!(tags(&tree, "/root/*[@datatype = 'dict' and not(tags)]"), ["station"]);
}

#[test]
fn test_axes() {
    let tree = station_tree();
    assert_eq!(tags(&tree, "//name/.."), ["station"]);
    assert_eq!(tags(&tree, "//name/ancestor::*"), ["root", "station"]);
    assert_eq!(texts(&tree, "//tags[1]/following-sibling::*"), ["y"]);
    assert_eq!(
        texts(&tree, "//readings[3]/preceding-sibling::readings[1]"),
        ["5"]
    );
    assert_eq!(tags(&tree, "/root/station/self::node()"), ["station"]);
    assert_eq!(tags(&tree, "//*[not(*)]").len(), 7);
}

#[test]
fn test_union_is_in_document_order_without_duplicates() {
    let tree = station_tree();
    assert_eq!(tags(&tree, "//tags | //name | //name"), ["name", "tags", "tags"]);
}

#[test]
fn test_bare_slash_selects_document_node() {
    let tree = station_tree();
    let nodes = PathEngine::new().select(&tree, "/").expect("valid path");
    assert_eq!(nodes, [tree.document()]);
    assert_eq!(tree.kind(nodes[0]), NodeKind::Document);
}

#[test]
fn test_string_functions() {
    let tree = station_tree();
    assert_eq!(tags(&tree, "//*[contains(., 'ws')]"), ["root", "meta", "source"]);
    assert_eq!(tags(&tree, "//*[starts-with(name(), 'rea')][1]"), ["readings"]);
    assert_eq!(tags(&tree, "/root/*[string-length(name()) = 4]"), ["meta"]);
}

#[test]
fn test_scalar_results_are_not_node_sets() {
    let tree = station_tree();
    let engine = PathEngine::new();

    let err = engine.select(&tree, "count(//tags)").expect_err("number result");
    assert!(matches!(err, QueryError::NotANodeSet { .. }));

    let count = engine
        .compile("count(//tags)")
        .and_then(|path| path.evaluate(&tree))
        .expect("valid path");
    assert_eq!(count, PathValue::Number(2.0));

    let sum = engine
        .compile("sum(//readings)")
        .and_then(|path| path.evaluate(&tree))
        .expect("valid path");
    assert_eq!(sum, PathValue::Number(9.0));
}

#[test]
fn test_attribute_selection_yields_values() {
    let tree = station_tree();
    let engine = PathEngine::new();

    assert!(matches!(
        engine.select(&tree, "/root/station/@datatype"),
        Err(QueryError::NotANodeSet { .. })
    ));

    let values = engine
        .compile("//tags/@index")
        .and_then(|path| path.evaluate(&tree))
        .expect("valid path");
    assert_eq!(
        values,
        PathValue::Attributes(vec!["0".to_string(), "1".to_string()])
    );
}

#[test]
fn test_malformed_paths_report_positions() {
    let engine = PathEngine::new();

    let err = engine.compile("/root/station[").expect_err("open predicate");
    assert!(matches!(err, QueryError::InvalidExpression { position: 14, .. }));

    let err = engine.compile("/root/$x").expect_err("bad character");
    assert!(matches!(err, QueryError::InvalidExpression { position: 6, .. }));

    let err = engine.compile("//readings[@index='1]").expect_err("open literal");
    assert!(matches!(err, QueryError::InvalidExpression { .. }));
    assert!(err.to_string().contains("//readings[@index='1]"));
}

#[test]
fn test_compiled_paths_are_reusable_across_trees() {
    let path = PathEngine::new().compile("//v").expect("valid path");
    assert_eq!(path.expression(), "//v");

    for count in 1..=3 {
        let values: Vec<Value> = (0..count).map(Value::from).collect();
        let source: Value = [("v", Value::Sequence(values))].into_iter().collect();
        let tree = to_tree(&source).expect("mapping encodes");
        assert_eq!(path.select(&tree).expect("node-set").len(), count as usize);
    }
}
