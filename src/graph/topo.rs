// src/graph/topo.rs

//! Deterministic topological ordering via Kahn's algorithm.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::graph::error::GraphError;
use crate::graph::model::Graph;

impl Graph {
    /// Produce the execution order: every dependency before its
    /// dependents.
    ///
    /// Cycle detection runs first; any cycle fails the whole sort with
    /// [`GraphError::CyclicDependencies`] carrying the complete list —
    /// no partial order is computed or returned. Ties between ready
    /// nodes are broken lexicographically by id, both at seeding and at
    /// every relaxation, so identical graphs always yield identical,
    /// diffable output.
    pub fn sort(&self) -> Result<Vec<String>, GraphError> {
        let cycles = self.find_cycles();
        if !cycles.is_empty() {
            return Err(GraphError::CyclicDependencies(cycles));
        }

        // In-degree here is the node's unresolved dependency count, not
        // the conventional incoming-edge count: the relation is "node
        // depends on X".
        let mut in_degree: Vec<usize> = self
            .arena
            .node_indices()
            .map(|n| self.arena[n].deps.len())
            .collect();

        let mut ready: BinaryHeap<Reverse<(&str, NodeIndex)>> = self
            .arena
            .node_indices()
            .filter(|n| in_degree[n.index()] == 0)
            .map(|n| Reverse((self.arena[n].id.as_str(), n)))
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(self.len());

        while let Some(Reverse((id, node))) = ready.pop() {
            order.push(id.to_string());

            for dependent in self.arena.neighbors_directed(node, Direction::Outgoing) {
                in_degree[dependent.index()] -= 1;
                if in_degree[dependent.index()] == 0 {
                    ready.push(Reverse((self.arena[dependent].id.as_str(), dependent)));
                }
            }
        }

        if order.len() != self.len() {
            return Err(GraphError::IncompleteSort {
                sorted: order.len(),
                total: self.len(),
            });
        }

        debug!(nodes = order.len(), "topological sort complete");
        Ok(order)
    }
}
