// src/loader/format.rs

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Graph document format, selected explicitly by the caller.
///
/// Parser choice is a configuration decision: a file is parsed with
/// exactly one parser, and a malformed document surfaces that parser's
/// error instead of being silently retried as another format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
    Toml,
}

impl GraphFormat {
    /// Infer a format from a file extension, if it is one we recognize.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(GraphFormat::Json),
            Some("yaml") | Some("yml") => Some(GraphFormat::Yaml),
            Some("toml") => Some(GraphFormat::Toml),
            _ => None,
        }
    }
}

impl FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            "toml" => Ok(GraphFormat::Toml),
            other => Err(format!(
                "invalid graph format: {other} (expected \"json\", \"yaml\" or \"toml\")"
            )),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphFormat::Json => "json",
            GraphFormat::Yaml => "yaml",
            GraphFormat::Toml => "toml",
        })
    }
}
