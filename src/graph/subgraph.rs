// src/graph/subgraph.rs

//! Order-preserving subgraph views.
//!
//! Both views are subsequences of the full topological order from
//! [`Graph::sort`], never a traversal-discovery sequence, so any
//! extracted view is a valid sub-ordering of a valid total order.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use crate::graph::error::GraphError;
use crate::graph::model::{Attributes, Graph};

impl Graph {
    /// Everything `id` transitively depends on, excluding `id` itself,
    /// ordered consistently with [`Graph::sort`].
    ///
    /// Fails with [`GraphError::UnknownNode`] when `id` is absent, and
    /// propagates [`GraphError::CyclicDependencies`] from the sort.
    pub fn transitive_dependencies(&self, id: &str) -> Result<Vec<String>, GraphError> {
        let Some(&start) = self.index_of.get(id) else {
            return Err(GraphError::UnknownNode(id.to_string()));
        };

        // Breadth-first closure over dependency edges, seeded with the
        // direct dependencies so the starting node stays out.
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<NodeIndex> = self.arena[start]
            .deps
            .iter()
            .map(|d| self.index_of[d.as_str()])
            .collect();

        while let Some(node) = queue.pop_front() {
            if visited.insert(node) {
                queue.extend(
                    self.arena[node]
                        .deps
                        .iter()
                        .map(|d| self.index_of[d.as_str()]),
                );
            }
        }

        let order = self.sort()?;
        Ok(order
            .into_iter()
            .filter(|oid| visited.contains(&self.index_of[oid.as_str()]))
            .collect())
    }

    /// Ids whose `(id, attributes)` pass `predicate`, as a subsequence
    /// of the full topological order.
    pub fn filter_nodes<P>(&self, predicate: P) -> Result<Vec<String>, GraphError>
    where
        P: Fn(&str, &Attributes) -> bool,
    {
        let matching: HashSet<&str> = self
            .arena
            .node_indices()
            .filter(|&n| {
                let data = &self.arena[n];
                predicate(&data.id, &data.attrs)
            })
            .map(|n| self.arena[n].id.as_str())
            .collect();

        let order = self.sort()?;
        Ok(order
            .into_iter()
            .filter(|id| matching.contains(id.as_str()))
            .collect())
    }
}
