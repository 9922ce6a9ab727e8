// src/loader/mod.rs

//! Input boundary: graph documents and markdown plans.
//!
//! - [`format`] is the explicit format selector (json / yaml / toml).
//! - [`document`] maps on-disk `{ "nodes": ... }` documents to node specs.
//! - [`plan`] parses checklist-style markdown plans into tasks.
//!
//! All format-specific parse errors surface here, before the resolver
//! ever runs.

pub mod document;
pub mod format;
pub mod plan;

pub use document::{GraphDocument, NodeEntry, load_graph, parse_document};
pub use format::GraphFormat;
pub use plan::{PlanTask, TaskStatus, id_prefix_from_file_name, parse_plan};
