// src/render.rs

//! Output rendering and writing.
//!
//! The resolver's outputs are id sequences and cycle lists; callers pick
//! newline-separated text or a JSON array. File output goes through a
//! temp file in the target directory and an atomic rename, so a consumer
//! never observes a half-written artifact.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::errors::Result;
use crate::graph::Cycle;

/// Output rendering as exposed on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Text,
    Json,
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => Err(format!(
                "invalid render format: {other} (expected \"text\" or \"json\")"
            )),
        }
    }
}

/// Render an ordered id sequence.
pub fn render_ids(ids: &[String], format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Text => Ok(ids.join("\n")),
        RenderFormat::Json => Ok(serde_json::to_string_pretty(ids)?),
    }
}

/// Render a cycle list: one `A -> B -> A` line per cycle in text mode.
pub fn render_cycles(cycles: &[Cycle], format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Text => Ok(cycles
            .iter()
            .map(|c| c.join(" -> "))
            .collect::<Vec<_>>()
            .join("\n")),
        RenderFormat::Json => Ok(serde_json::to_string_pretty(cycles)?),
    }
}

/// Write rendered output to `path`, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            write_atomic(path, rendered)?;
            debug!(path = %path.display(), "output written");
            Ok(())
        }
        None => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            Ok(())
        }
    }
}

/// Atomically write `contents` (newline-terminated) to `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        tmp.write_all(b"\n")?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
