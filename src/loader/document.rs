// src/loader/document.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{PlandagError, Result};
use crate::graph::{Attributes, Graph, NodeSpec};
use crate::loader::format::GraphFormat;

/// On-disk graph document:
///
/// ```json
/// {
///   "nodes": {
///     "build": { "deps": [], "status": "pending" },
///     "test":  { "deps": ["build"] }
///   }
/// }
/// ```
///
/// The same shape is accepted as YAML and TOML. Anything next to `deps`
/// in a node entry lands in its attribute bag untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    pub nodes: BTreeMap<String, NodeEntry>,
}

/// One node entry: dependency list plus a free-form attribute bag.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    #[serde(default)]
    pub deps: Vec<String>,

    #[serde(flatten)]
    pub attrs: Attributes,
}

impl GraphDocument {
    /// Flatten the document into node specs.
    pub fn into_specs(self) -> Vec<NodeSpec> {
        self.nodes
            .into_iter()
            .map(|(id, entry)| NodeSpec {
                id,
                deps: entry.deps,
                attrs: entry.attrs,
            })
            .collect()
    }
}

/// Parse a graph document with the parser for `format`.
///
/// Exactly one parser runs; there is no content-based fallback probing,
/// so a malformed document always surfaces its own parser's error.
pub fn parse_document(contents: &str, format: GraphFormat) -> Result<GraphDocument> {
    let doc = match format {
        GraphFormat::Json => serde_json::from_str(contents)?,
        GraphFormat::Yaml => serde_yaml::from_str(contents)?,
        GraphFormat::Toml => toml::from_str(contents)?,
    };
    Ok(doc)
}

/// Load and build a graph from `path`.
///
/// `format` overrides extension inference; a path with an unrecognized
/// extension and no explicit format is an error, not a guess.
pub fn load_graph(path: &Path, format: Option<GraphFormat>) -> Result<Graph> {
    let format = match format.or_else(|| GraphFormat::from_path(path)) {
        Some(f) => f,
        None => return Err(PlandagError::UnknownFormat(path.to_path_buf())),
    };

    let contents = fs::read_to_string(path)?;
    let doc = parse_document(&contents, format)?;
    debug!(
        path = %path.display(),
        %format,
        nodes = doc.nodes.len(),
        "parsed graph document"
    );

    let graph = Graph::build(doc.into_specs())?;
    info!(path = %path.display(), nodes = graph.len(), "graph loaded");
    Ok(graph)
}
