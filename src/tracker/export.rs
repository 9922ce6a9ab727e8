// src/tracker/export.rs

//! CSV and JSON tracking artifacts.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::errors::Result;
use crate::render::write_atomic;
use crate::tracker::{TaskTracker, TrackedTask};

const CSV_HEADER: &str = "id,phase,name,status,dependencies,assignee,notes";

pub(super) fn export_csv(tracker: &TaskTracker, path: &Path) -> Result<()> {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for task in tracker.tasks() {
        let row = [
            task.id.clone(),
            task.phase.to_string(),
            task.name.clone(),
            task.status.clone(),
            task.dependencies.join(";"),
            task.assignee.clone(),
            task.notes.clone(),
        ];
        let line = row
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }

    write_atomic(path, &out)?;
    info!(path = %path.display(), tasks = tracker.tasks().len(), "CSV tracker exported");
    Ok(())
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[derive(Serialize)]
struct TrackerArtifact<'a> {
    version: &'static str,
    plan_file: Option<&'a str>,
    generated: String,
    tasks: &'a [TrackedTask],
    metadata: ArtifactMetadata,
}

#[derive(Serialize)]
struct ArtifactMetadata {
    total_tasks: usize,
    phases: usize,
    critical_path: Vec<String>,
    critical_path_length: usize,
}

pub(super) fn export_json(tracker: &TaskTracker, path: &Path) -> Result<()> {
    let critical_path = tracker.critical_path()?;
    let phases = tracker
        .tasks()
        .iter()
        .map(|t| t.phase)
        .collect::<BTreeSet<_>>()
        .len();

    let artifact = TrackerArtifact {
        version: "1.0",
        plan_file: tracker.plan_file(),
        generated: chrono::Local::now().to_rfc3339(),
        tasks: tracker.tasks(),
        metadata: ArtifactMetadata {
            total_tasks: tracker.tasks().len(),
            phases,
            critical_path_length: critical_path.len(),
            critical_path,
        },
    };

    write_atomic(path, &serde_json::to_string_pretty(&artifact)?)?;
    info!(path = %path.display(), tasks = tracker.tasks().len(), "JSON tracker exported");
    Ok(())
}
