// src/graph/mod.rs

//! Dependency graph resolution.
//!
//! - [`model`] holds the immutable graph and its construction-time
//!   validation (duplicate ids, dangling references).
//! - [`cycles`] enumerates dependency cycles.
//! - [`topo`] produces the deterministic execution order.
//! - [`critical`] computes the longest dependency chain.
//! - [`subgraph`] extracts order-preserving transitive and filtered views.
//!
//! A graph is built exactly once from loader-supplied data and queried
//! read-only afterwards; a structural change means building a new graph.

pub mod critical;
pub mod cycles;
pub mod error;
pub mod model;
pub mod subgraph;
pub mod topo;

pub use error::{Cycle, DanglingRef, GraphError};
pub use model::{Attributes, Graph, NodeSpec};
