#![allow(dead_code)]

use plandag::graph::{Graph, NodeSpec};

/// Builder for graph node specs to simplify test setup.
pub struct GraphSpecBuilder {
    specs: Vec<NodeSpec>,
}

impl GraphSpecBuilder {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a node with the given dependencies.
    pub fn node(mut self, id: &str, deps: &[&str]) -> Self {
        self.specs.push(NodeSpec::new(
            id,
            deps.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }

    /// Add a node carrying one string attribute.
    pub fn node_with_attr(mut self, id: &str, deps: &[&str], key: &str, value: &str) -> Self {
        let mut spec = NodeSpec::new(id, deps.iter().map(|d| d.to_string()).collect());
        spec.attrs.insert(
            key.to_string(),
            serde_json::Value::String(value.to_string()),
        );
        self.specs.push(spec);
        self
    }

    /// The raw specs, for tests that exercise `Graph::build` errors.
    pub fn specs(self) -> Vec<NodeSpec> {
        self.specs
    }

    /// Build a graph, panicking on structural errors.
    pub fn build(self) -> Graph {
        Graph::build(self.specs).expect("builder graph should be structurally valid")
    }
}

impl Default for GraphSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
