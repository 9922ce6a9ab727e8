use plandag::graph::GraphError;
use plandag_test_utils::builders::GraphSpecBuilder;

#[test]
fn acyclic_graph_has_no_cycles() {
    let graph = GraphSpecBuilder::new()
        .node("A", &[])
        .node("B", &["A"])
        .node("C", &["A"])
        .node("D", &["B", "C"])
        .build();

    assert!(graph.find_cycles().is_empty());
}

#[test]
fn self_loop_is_a_two_element_cycle() {
    let graph = GraphSpecBuilder::new().node("A", &["A"]).build();

    assert_eq!(graph.find_cycles(), vec![vec!["A".to_string(), "A".to_string()]]);
}

#[test]
fn two_node_cycle_closes_on_its_first_element() {
    let graph = GraphSpecBuilder::new()
        .node("A", &["B"])
        .node("B", &["A"])
        .build();

    // Traversal roots are lexicographic, so the loop is discovered from A.
    assert_eq!(
        graph.find_cycles(),
        vec![vec!["A".to_string(), "B".to_string(), "A".to_string()]]
    );
}

#[test]
fn disconnected_cycles_are_all_reported_in_one_pass() {
    let graph = GraphSpecBuilder::new()
        .node("A", &["B"])
        .node("B", &["A"])
        .node("C", &["D"])
        .node("D", &["C"])
        .node("E", &[])
        .build();

    assert_eq!(
        graph.find_cycles(),
        vec![
            vec!["A".to_string(), "B".to_string(), "A".to_string()],
            vec!["C".to_string(), "D".to_string(), "C".to_string()],
        ]
    );
}

#[test]
fn overlapping_cycles_are_both_found() {
    // A -> B -> A and B -> C -> B share the node B.
    let graph = GraphSpecBuilder::new()
        .node("A", &["B"])
        .node("B", &["A", "C"])
        .node("C", &["B"])
        .build();

    assert_eq!(
        graph.find_cycles(),
        vec![
            vec!["A".to_string(), "B".to_string(), "A".to_string()],
            vec!["B".to_string(), "C".to_string(), "B".to_string()],
        ]
    );
}

#[test]
fn cycle_detection_is_deterministic_across_runs() {
    let graph = GraphSpecBuilder::new()
        .node("x", &["y"])
        .node("y", &["z"])
        .node("z", &["x"])
        .node("lone", &[])
        .build();

    let first = graph.find_cycles();
    let second = graph.find_cycles();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![vec![
            "x".to_string(),
            "y".to_string(),
            "z".to_string(),
            "x".to_string()
        ]]
    );
}

#[test]
fn sort_carries_the_full_cycle_list() {
    let graph = GraphSpecBuilder::new()
        .node("A", &["A"])
        .node("B", &["C"])
        .node("C", &["B"])
        .build();

    let err = graph.sort().unwrap_err();
    match err {
        GraphError::CyclicDependencies(cycles) => {
            assert_eq!(cycles.len(), 2);
            assert!(cycles.contains(&vec!["A".to_string(), "A".to_string()]));
        }
        other => panic!("expected CyclicDependencies, got {other:?}"),
    }
}
