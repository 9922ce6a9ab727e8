// src/graph/cycles.rs

//! Cycle enumeration over the dependency graph.
//!
//! Three-color depth-first traversal: white = unvisited, gray = on the
//! current path, black = fully explored. Hitting a gray dependency means
//! the current path loops; the cycle is the path suffix starting at that
//! dependency's first occurrence, closed by repeating it. Traversal
//! keeps going after recording a cycle, so a single pass reports every
//! loop it reaches. The explicit frame stack keeps memory bounded on
//! deeply chained graphs regardless of host call-stack limits.

use petgraph::graph::NodeIndex;

use crate::graph::error::Cycle;
use crate::graph::model::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

impl Graph {
    /// Enumerate every dependency cycle in the graph.
    ///
    /// Each cycle is the ordered id sequence forming the loop, closed by
    /// repeating its first element; a self-loop on `A` comes back as
    /// `[A, A]`. Roots are visited in lexicographic id order and
    /// dependencies in declared order, so the result is stable across
    /// runs. Only path tracking (not a plain visited flag) recovers the
    /// cycle membership needed for actionable diagnostics.
    pub fn find_cycles(&self) -> Vec<Cycle> {
        let mut color = vec![Color::White; self.arena.node_count()];
        let mut cycles: Vec<Cycle> = Vec::new();

        let mut roots: Vec<NodeIndex> = self.arena.node_indices().collect();
        roots.sort_unstable_by(|&a, &b| self.arena[a].id.cmp(&self.arena[b].id));

        // Current traversal path, plus one frame per path entry holding
        // the node and its next dependency position.
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut frames: Vec<(NodeIndex, usize)> = Vec::new();

        for root in roots {
            if color[root.index()] != Color::White {
                continue;
            }
            color[root.index()] = Color::Gray;
            path.push(root);
            frames.push((root, 0));

            while let Some(&(node, pos)) = frames.last() {
                let deps = &self.arena[node].deps;

                if pos >= deps.len() {
                    color[node.index()] = Color::Black;
                    path.pop();
                    frames.pop();
                    continue;
                }
                frames.last_mut().expect("frame just observed").1 += 1;

                let dep = self.index_of[deps[pos].as_str()];
                match color[dep.index()] {
                    Color::White => {
                        color[dep.index()] = Color::Gray;
                        path.push(dep);
                        frames.push((dep, 0));
                    }
                    Color::Gray => {
                        let start = path
                            .iter()
                            .position(|&p| p == dep)
                            .expect("gray node is on the current path");
                        let mut cycle: Cycle = path[start..]
                            .iter()
                            .map(|&p| self.arena[p].id.clone())
                            .collect();
                        cycle.push(self.arena[dep].id.clone());
                        cycles.push(cycle);
                    }
                    Color::Black => {}
                }
            }
        }

        cycles
    }
}
