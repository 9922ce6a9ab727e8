// src/graph/error.rs

//! Typed failures for graph construction and resolution.

use thiserror::Error;

/// A closed cycle of node ids; the final element repeats the first, so a
/// self-loop on `A` is `[A, A]`.
pub type Cycle = Vec<String>;

/// One dependency reference that does not resolve to any node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    /// Node that declared the reference.
    pub node: String,
    /// The id it referenced.
    pub dependency: String,
}

/// Errors raised by graph construction and the resolver operations.
///
/// Every variant is terminal for the operation that raised it: callers
/// never receive a partial ordering alongside an error, and retrying an
/// unchanged graph reproduces the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    /// Every unresolved reference is collected before failing, so one
    /// error names everything there is to fix.
    #[error("unresolved dependency references:\n{}", render_dangling(.0))]
    DanglingDependencies(Vec<DanglingRef>),

    #[error("circular dependencies detected:\n{}", render_cycles(.0))]
    CyclicDependencies(Vec<Cycle>),

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// The sort covered fewer nodes than the graph holds even though no
    /// cycle was detected. Unreachable in correct code; kept as a
    /// last-resort safety net.
    #[error("topological sort produced {sorted} of {total} nodes with no detected cycle; this is a bug in plandag")]
    IncompleteSort { sorted: usize, total: usize },
}

fn render_dangling(refs: &[DanglingRef]) -> String {
    refs.iter()
        .map(|r| {
            format!(
                "  - node '{}' references missing dependency '{}'",
                r.node, r.dependency
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cycles(cycles: &[Cycle]) -> String {
    cycles
        .iter()
        .map(|c| format!("  - {}", c.join(" -> ")))
        .collect::<Vec<_>>()
        .join("\n")
}
