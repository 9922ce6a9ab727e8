// src/loader/plan.rs

//! Checklist-style markdown plan parsing.
//!
//! Plans look like:
//!
//! ```markdown
//! ## Phase 1: Foundation
//! - [x] Set up repository
//! - [ ] Define schema Depends on: #GH12-001
//!
//! ## Phase 2: Build
//! - [ ] Implement API Depends on: #GH12-002
//! ```
//!
//! Each checkbox line becomes a task with a generated id `{prefix}-NNN`,
//! numbered in document order across phases. The prefix derives from a
//! `GH-<number>` component in the plan file name (`GH-12-schema.md` →
//! `GH12`), falling back to `T`.

use regex::Regex;
use tracing::debug;

use crate::errors::{PlandagError, Result};

/// Completion state of one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// One task parsed out of a plan file.
#[derive(Debug, Clone)]
pub struct PlanTask {
    pub id: String,
    pub phase: u32,
    pub name: String,
    pub status: TaskStatus,
    pub deps: Vec<String>,
}

/// Derive the generated-id prefix from a plan file name.
pub fn id_prefix_from_file_name(name: &str) -> String {
    let gh = Regex::new(r"GH-(\d+)").expect("valid prefix pattern");
    match gh.captures(name) {
        Some(caps) => format!("GH{}", &caps[1]),
        None => "T".to_string(),
    }
}

/// Parse plan markdown into tasks with generated ids.
///
/// Fails when the document contains no `## Phase N: Name` headings.
pub fn parse_plan(contents: &str, id_prefix: &str) -> Result<Vec<PlanTask>> {
    let phase_re =
        Regex::new(r"(?m)^##\s+(?:Phase\s+)?(\d+):\s*(.+)$").expect("valid phase pattern");
    let task_re = Regex::new(r"(?m)^-\s+\[([ x])\]\s+(.+)$").expect("valid task pattern");
    let deps_re = Regex::new(r"(?i)Depends on:\s*([#\w\-,\s]+)").expect("valid deps pattern");

    let phases: Vec<_> = phase_re.captures_iter(contents).collect();
    if phases.is_empty() {
        return Err(PlandagError::Plan(
            "no phases found in plan; expected '## Phase N: Name' headings".to_string(),
        ));
    }

    let mut tasks = Vec::new();
    let mut counter = 1u32;

    for (i, phase) in phases.iter().enumerate() {
        let phase_num: u32 = phase[1]
            .parse()
            .map_err(|_| PlandagError::Plan(format!("invalid phase number '{}'", &phase[1])))?;

        // Body runs from this heading to the next one (or end of file).
        let start = phase.get(0).expect("whole match").end();
        let end = phases
            .get(i + 1)
            .map(|next| next.get(0).expect("whole match").start())
            .unwrap_or(contents.len());
        let body = &contents[start..end];

        for task in task_re.captures_iter(body) {
            let status = if &task[1] == "x" {
                TaskStatus::Completed
            } else {
                TaskStatus::Pending
            };
            let (name, deps) = split_deps(&deps_re, task[2].trim());

            tasks.push(PlanTask {
                id: format!("{id_prefix}-{counter:03}"),
                phase: phase_num,
                name,
                status,
                deps,
            });
            counter += 1;
        }
    }

    debug!(tasks = tasks.len(), phases = phases.len(), "parsed plan");
    Ok(tasks)
}

/// Pull a `Depends on: #id, #id` annotation out of a task description.
fn split_deps(deps_re: &Regex, raw: &str) -> (String, Vec<String>) {
    match deps_re.captures(raw) {
        Some(caps) => {
            let deps = caps[1]
                .split(',')
                .map(|d| d.trim().trim_start_matches('#').to_string())
                .filter(|d| !d.is_empty())
                .collect();
            let name = deps_re.replace(raw, "").trim().to_string();
            (name, deps)
        }
        None => (raw.to_string(), Vec::new()),
    }
}
