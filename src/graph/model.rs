// src/graph/model.rs

//! Immutable graph storage and construction-time validation.

use std::collections::{BTreeMap, HashMap};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::graph::error::{DanglingRef, GraphError};

/// Opaque attribute bag attached to a node (status, phase, assignee,
/// free-form metadata).
///
/// The resolver never interprets attributes; they are only surfaced to
/// caller-supplied predicates and carried through tracker exports.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// One node as supplied by a loader: id, declared dependencies, attributes.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub id: String,
    pub deps: Vec<String>,
    pub attrs: Attributes,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, deps: Vec<String>) -> Self {
        Self {
            id: id.into(),
            deps,
            attrs: Attributes::new(),
        }
    }
}

/// Internal node storage.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) id: String,
    /// Dependencies in declared order; traversal follows this order.
    pub(crate) deps: Vec<String>,
    pub(crate) attrs: Attributes,
}

/// Immutable task dependency graph.
///
/// Nodes live in a dense arena; edges run dependency → dependent and
/// provide the reverse-adjacency ("dependents") view, wired once at
/// construction. Identifier lookup goes through an auxiliary id → index
/// map. Because nothing mutates a built graph, it can be shared
/// read-only across threads; a structural change requires building a
/// new graph.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) arena: DiGraph<NodeData, ()>,
    pub(crate) index_of: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Build a graph from loader-supplied node specs.
    ///
    /// Fails with [`GraphError::DuplicateNode`] on a repeated id, and
    /// with [`GraphError::DanglingDependencies`] carrying every
    /// unresolved `(node, dependency)` pair at once.
    pub fn build(specs: Vec<NodeSpec>) -> Result<Self, GraphError> {
        let mut arena = DiGraph::with_capacity(specs.len(), specs.len());
        let mut index_of: HashMap<String, NodeIndex> = HashMap::with_capacity(specs.len());

        for spec in specs {
            if index_of.contains_key(&spec.id) {
                return Err(GraphError::DuplicateNode(spec.id));
            }
            let idx = arena.add_node(NodeData {
                id: spec.id.clone(),
                deps: spec.deps,
                attrs: spec.attrs,
            });
            index_of.insert(spec.id, idx);
        }

        // Resolve every declared dependency before wiring any edge, so
        // the error lists all dangling references rather than the first.
        let mut edges: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        let mut dangling: Vec<DanglingRef> = Vec::new();

        for node in arena.node_indices() {
            let data = &arena[node];
            for dep in &data.deps {
                match index_of.get(dep) {
                    Some(&dep_idx) => edges.push((dep_idx, node)),
                    None => dangling.push(DanglingRef {
                        node: data.id.clone(),
                        dependency: dep.clone(),
                    }),
                }
            }
        }

        if !dangling.is_empty() {
            return Err(GraphError::DanglingDependencies(dangling));
        }

        for (dependency, dependent) in edges {
            arena.add_edge(dependency, dependent, ());
        }

        debug!(
            nodes = arena.node_count(),
            edges = arena.edge_count(),
            "graph built"
        );

        Ok(Self { arena, index_of })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.arena.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.node_count() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of.contains_key(id)
    }

    /// Node ids in insertion order (the order specs were supplied),
    /// preserved for diagnostics.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.arena.node_indices().map(|n| self.arena[n].id.as_str())
    }

    /// Immediate dependencies of `id` in declared order; empty for
    /// unknown ids.
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.index_of
            .get(id)
            .map(|&n| self.arena[n].deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of `id` (nodes that list it as a dependency).
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        match self.index_of.get(id) {
            Some(&n) => self
                .arena
                .neighbors_directed(n, Direction::Outgoing)
                .map(|d| self.arena[d].id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Attribute bag of `id`, if the node exists.
    pub fn attrs_of(&self, id: &str) -> Option<&Attributes> {
        self.index_of.get(id).map(|&n| &self.arena[n].attrs)
    }
}
