use plandag::graph::GraphError;
use plandag_test_utils::builders::GraphSpecBuilder;

/// `needle` must appear in `haystack` in the same relative order.
fn assert_subsequence(needle: &[String], haystack: &[String]) {
    let mut it = haystack.iter();
    for want in needle {
        assert!(
            it.any(|h| h == want),
            "{want} out of order: {needle:?} is not a subsequence of {haystack:?}"
        );
    }
}

#[test]
fn transitive_dependencies_cover_exactly_the_reachable_set() {
    let graph = GraphSpecBuilder::new()
        .node("A", &[])
        .node("B", &["A"])
        .node("C", &["B"])
        .node("D", &[])
        .build();

    assert_eq!(
        graph.transitive_dependencies("C").expect("known node"),
        vec!["A", "B"]
    );
}

#[test]
fn starting_node_is_excluded() {
    let graph = GraphSpecBuilder::new()
        .node("A", &[])
        .node("B", &["A"])
        .build();

    let deps = graph.transitive_dependencies("B").expect("known node");
    assert!(!deps.contains(&"B".to_string()));
    assert_eq!(deps, vec!["A"]);
}

#[test]
fn node_without_dependencies_has_empty_closure() {
    let graph = GraphSpecBuilder::new()
        .node("A", &[])
        .node("B", &["A"])
        .build();

    assert!(graph.transitive_dependencies("A").expect("known node").is_empty());
}

#[test]
fn diamond_closure_is_ordered_like_the_sort() {
    let graph = GraphSpecBuilder::new()
        .node("D", &["B", "C"])
        .node("B", &["A"])
        .node("C", &["A"])
        .node("A", &[])
        .build();

    let deps = graph.transitive_dependencies("D").expect("known node");
    assert_eq!(deps, vec!["A", "B", "C"]);
    assert_subsequence(&deps, &graph.sort().expect("acyclic"));
}

#[test]
fn unknown_node_is_a_typed_error() {
    let graph = GraphSpecBuilder::new().node("A", &[]).build();

    let err = graph.transitive_dependencies("missing").unwrap_err();
    assert_eq!(err, GraphError::UnknownNode("missing".to_string()));
}

#[test]
fn closure_of_a_cyclic_graph_fails() {
    let graph = GraphSpecBuilder::new()
        .node("A", &["B"])
        .node("B", &["A"])
        .node("C", &["A"])
        .build();

    let err = graph.transitive_dependencies("C").unwrap_err();
    assert!(matches!(err, GraphError::CyclicDependencies(_)));
}

#[test]
fn filter_returns_a_subsequence_of_the_sort() {
    let graph = GraphSpecBuilder::new()
        .node_with_attr("setup", &[], "status", "completed")
        .node_with_attr("schema", &["setup"], "status", "pending")
        .node_with_attr("api", &["schema"], "status", "pending")
        .node_with_attr("docs", &["api"], "status", "completed")
        .build();

    let pending = graph
        .filter_nodes(|_, attrs| {
            attrs.get("status").and_then(|v| v.as_str()) == Some("pending")
        })
        .expect("acyclic");

    assert_eq!(pending, vec!["schema", "api"]);
    assert_subsequence(&pending, &graph.sort().expect("acyclic"));
}

#[test]
fn filter_matching_everything_equals_the_sort() {
    let graph = GraphSpecBuilder::new()
        .node("b", &[])
        .node("a", &[])
        .node("c", &["a", "b"])
        .build();

    assert_eq!(
        graph.filter_nodes(|_, _| true).expect("acyclic"),
        graph.sort().expect("acyclic")
    );
}

#[test]
fn filter_on_a_missing_key_matches_nothing() {
    let graph = GraphSpecBuilder::new()
        .node("a", &[])
        .node("b", &["a"])
        .build();

    let matched = graph
        .filter_nodes(|_, attrs| attrs.contains_key("owner"))
        .expect("acyclic");
    assert!(matched.is_empty());
}

#[test]
fn filter_of_a_cyclic_graph_fails() {
    let graph = GraphSpecBuilder::new()
        .node("A", &["B"])
        .node("B", &["A"])
        .build();

    let err = graph.filter_nodes(|_, _| true).unwrap_err();
    assert!(matches!(err, GraphError::CyclicDependencies(_)));
}
