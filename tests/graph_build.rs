use plandag::graph::{DanglingRef, Graph, GraphError, NodeSpec};
use plandag_test_utils::builders::GraphSpecBuilder;

#[test]
fn build_preserves_insertion_order() {
    let graph = GraphSpecBuilder::new()
        .node("charlie", &[])
        .node("alpha", &["charlie"])
        .node("bravo", &["alpha"])
        .build();

    // ids() reports the order specs were supplied, not sorted order.
    let ids: Vec<&str> = graph.ids().collect();
    assert_eq!(ids, vec!["charlie", "alpha", "bravo"]);
    assert_eq!(graph.len(), 3);
    assert!(!graph.is_empty());
}

#[test]
fn dependencies_keep_declared_order() {
    let graph = GraphSpecBuilder::new()
        .node("z", &[])
        .node("a", &[])
        .node("m", &["z", "a"])
        .build();

    assert_eq!(graph.dependencies_of("m"), ["z".to_string(), "a".to_string()]);
}

#[test]
fn dependents_are_derived_from_dependencies() {
    let graph = GraphSpecBuilder::new()
        .node("base", &[])
        .node("left", &["base"])
        .node("right", &["base"])
        .build();

    let mut dependents = graph.dependents_of("base");
    dependents.sort_unstable();
    assert_eq!(dependents, vec!["left", "right"]);
    assert!(graph.dependents_of("left").is_empty());
}

#[test]
fn unknown_ids_yield_empty_views() {
    let graph = GraphSpecBuilder::new().node("only", &[]).build();

    assert!(!graph.contains("ghost"));
    assert!(graph.dependencies_of("ghost").is_empty());
    assert!(graph.dependents_of("ghost").is_empty());
    assert!(graph.attrs_of("ghost").is_none());
}

#[test]
fn attributes_are_carried_opaquely() {
    let graph = GraphSpecBuilder::new()
        .node_with_attr("task", &[], "status", "pending")
        .build();

    let attrs = graph.attrs_of("task").expect("node exists");
    assert_eq!(
        attrs.get("status"),
        Some(&serde_json::Value::String("pending".to_string()))
    );
}

#[test]
fn duplicate_id_is_rejected() {
    let specs = vec![
        NodeSpec::new("A", vec![]),
        NodeSpec::new("A", vec![]),
    ];

    let err = Graph::build(specs).unwrap_err();
    assert_eq!(err, GraphError::DuplicateNode("A".to_string()));
}

#[test]
fn all_dangling_references_are_collected() {
    // Two broken references across two nodes; one error names both.
    let specs = vec![
        NodeSpec::new("A", vec!["Z".to_string()]),
        NodeSpec::new("B", vec!["Q".to_string(), "A".to_string()]),
    ];

    let err = Graph::build(specs).unwrap_err();
    assert_eq!(
        err,
        GraphError::DanglingDependencies(vec![
            DanglingRef {
                node: "A".to_string(),
                dependency: "Z".to_string(),
            },
            DanglingRef {
                node: "B".to_string(),
                dependency: "Q".to_string(),
            },
        ])
    );

    // The rendered message names both ends of a broken reference.
    let message = err.to_string();
    assert!(message.contains("'A'"), "message should name the node: {message}");
    assert!(message.contains("'Z'"), "message should name the missing dep: {message}");
}

#[test]
fn empty_graph_builds_and_sorts() {
    let graph = Graph::build(Vec::new()).expect("empty graph is valid");
    assert!(graph.is_empty());
    assert_eq!(graph.sort().expect("empty sort"), Vec::<String>::new());
    assert_eq!(graph.critical_path().expect("empty path"), Vec::<String>::new());
}

#[test]
fn self_dependency_builds_but_is_cyclic() {
    // A node listing itself resolves (the id exists) and is caught by
    // cycle detection, not construction.
    let graph = GraphSpecBuilder::new().node("A", &["A"]).build();
    assert_eq!(graph.dependencies_of("A"), ["A".to_string()]);
    assert!(!graph.find_cycles().is_empty());
}
