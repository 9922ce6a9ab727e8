// src/graph/critical.rs

//! Longest dependency chain ("critical path") analysis.

use petgraph::Direction;
use petgraph::graph::NodeIndex;

use crate::graph::error::GraphError;
use crate::graph::model::Graph;

impl Graph {
    /// Compute the longest dependency chain, by edge count.
    ///
    /// Durations are not modeled; every edge costs one step. The walk
    /// runs over the topological order from [`Graph::sort`], relaxing
    /// each dependent on strict improvement only.
    ///
    /// Tie-break, which is observable and relied on by callers: when
    /// several chains share the maximum length, the chain ending at the
    /// first node in topological order with that length wins, and a
    /// node's recorded predecessor is the dependency that first reached
    /// the winning length in topological order. In
    /// `{A: [], B: [A], C: [A], D: [B, C]}` the result is `[A, B, D]`.
    ///
    /// Cyclic graphs fail with the sort's
    /// [`GraphError::CyclicDependencies`]; an empty graph yields an
    /// empty path.
    pub fn critical_path(&self) -> Result<Vec<String>, GraphError> {
        let order = self.sort()?;
        if order.is_empty() {
            return Ok(Vec::new());
        }

        let topo: Vec<NodeIndex> = order
            .iter()
            .map(|id| self.index_of[id.as_str()])
            .collect();

        let mut longest: Vec<usize> = vec![0; self.arena.node_count()];
        let mut predecessor: Vec<Option<NodeIndex>> = vec![None; self.arena.node_count()];

        for &node in &topo {
            for dependent in self.arena.neighbors_directed(node, Direction::Outgoing) {
                if longest[node.index()] + 1 > longest[dependent.index()] {
                    longest[dependent.index()] = longest[node.index()] + 1;
                    predecessor[dependent.index()] = Some(node);
                }
            }
        }

        let mut end = topo[0];
        for &node in &topo[1..] {
            if longest[node.index()] > longest[end.index()] {
                end = node;
            }
        }

        let mut chain: Vec<NodeIndex> = vec![end];
        let mut current = end;
        while let Some(prev) = predecessor[current.index()] {
            chain.push(prev);
            current = prev;
        }
        chain.reverse();

        Ok(chain
            .into_iter()
            .map(|n| self.arena[n].id.clone())
            .collect())
    }
}
