use jdepgraph::core::{GraphBuilder, NodeKind};
use jdepgraph::formatters::JsonGraphFormatter;
use serde_json::Value;
use std::collections::BTreeSet;

#[test]
fn emits_node_and_link_objects() {
    let mut gb = GraphBuilder::new();
    gb.add_dependency("a/Foo.java", "b/Bar.java", NodeKind::File);
    let graph = gb.build();

    let json = JsonGraphFormatter::new().format_graph(&graph).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    let node_ids: BTreeSet<_> = doc["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        node_ids,
        BTreeSet::from(["a/Foo.java".to_string(), "b/Bar.java".to_string()])
    );

    let links = doc["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["source"], "a/Foo.java");
    assert_eq!(links[0]["target"], "b/Bar.java");
}

#[test]
fn every_link_endpoint_appears_exactly_once_in_nodes() {
    let mut gb = GraphBuilder::new();
    gb.add_dependency("a/Foo.java", "b/Bar.java", NodeKind::File);
    gb.add_dependency("a/Foo.java", "com.unknown.Thing", NodeKind::External);
    gb.add_dependency("b/Bar.java", "com.unknown.Thing", NodeKind::External);
    let graph = gb.build();

    let json = JsonGraphFormatter::new().format_graph(&graph).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    let node_ids: Vec<_> = doc["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect();
    let unique: BTreeSet<_> = node_ids.iter().cloned().collect();
    assert_eq!(node_ids.len(), unique.len());

    for link in doc["links"].as_array().unwrap() {
        assert!(unique.contains(link["source"].as_str().unwrap()));
        assert!(unique.contains(link["target"].as_str().unwrap()));
    }
}

#[test]
fn output_is_indented() {
    let mut gb = GraphBuilder::new();
    gb.add_dependency("a/Foo.java", "b/Bar.java", NodeKind::File);
    let graph = gb.build();

    let json = JsonGraphFormatter::new().format_graph(&graph).unwrap();
    assert!(json.contains('\n'));
}

#[test]
fn format_to_file_overwrites_existing_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("graph.json");
    std::fs::write(&out, "stale").unwrap();

    let graph = GraphBuilder::new().build();
    JsonGraphFormatter::new().format_to_file(&graph, &out).unwrap();

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 0);
    assert_eq!(doc["links"].as_array().unwrap().len(), 0);
}
