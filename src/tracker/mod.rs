// src/tracker/mod.rs

//! Task tracker: plan ingestion and tracking artifacts.
//!
//! The tracker turns a markdown plan (or an empty template) into tracked
//! tasks, resolves them through the dependency core, and exports CSV or
//! JSON artifacts carrying the task table and the critical path.

mod export;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::errors::{PlandagError, Result};
use crate::graph::{Attributes, Graph, NodeSpec};
use crate::loader::plan::{self, PlanTask};

/// One tracked task row, as exported to CSV/JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedTask {
    pub id: String,
    pub phase: u32,
    pub name: String,
    pub status: String,
    pub dependencies: Vec<String>,
    pub assignee: String,
    pub notes: String,
}

impl From<PlanTask> for TrackedTask {
    fn from(task: PlanTask) -> Self {
        Self {
            id: task.id,
            phase: task.phase,
            name: task.name,
            status: task.status.as_str().to_string(),
            dependencies: task.deps,
            assignee: String::new(),
            notes: String::new(),
        }
    }
}

/// Tracker over tasks parsed from a plan or pre-allocated from a
/// template.
#[derive(Debug, Clone, Default)]
pub struct TaskTracker {
    tasks: Vec<TrackedTask>,
    plan_file: Option<String>,
}

impl TaskTracker {
    /// Parse a plan file into a tracker.
    ///
    /// The id prefix derives from the file name, so two plans exported
    /// side by side keep distinct task ids.
    pub fn from_plan_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let prefix = plan::id_prefix_from_file_name(file_name);
        let tasks = plan::parse_plan(&contents, &prefix)?;

        info!(path = %path.display(), tasks = tasks.len(), "plan parsed");

        Ok(Self {
            tasks: tasks.into_iter().map(TrackedTask::from).collect(),
            plan_file: Some(path.display().to_string()),
        })
    }

    /// Pre-allocate an empty template: `phases` phases of
    /// `tasks_per_phase` placeholder tasks each.
    pub fn from_template(phases: u32, tasks_per_phase: u32) -> Self {
        let mut tasks = Vec::new();
        let mut counter = 1u32;

        for phase in 1..=phases {
            for slot in 1..=tasks_per_phase {
                tasks.push(TrackedTask {
                    id: format!("T-{counter:03}"),
                    phase,
                    name: format!("[Task {slot} description]"),
                    status: "pending".to_string(),
                    dependencies: Vec::new(),
                    assignee: String::new(),
                    notes: String::new(),
                });
                counter += 1;
            }
        }

        Self {
            tasks,
            plan_file: None,
        }
    }

    pub fn tasks(&self) -> &[TrackedTask] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn plan_file(&self) -> Option<&str> {
        self.plan_file.as_deref()
    }

    /// Build the dependency graph over the tracked tasks.
    ///
    /// Status, phase and name travel as node attributes so filtered
    /// views can select on them. Dangling `Depends on:` references fail
    /// here, before any artifact is written.
    pub fn graph(&self) -> Result<Graph> {
        let specs = self
            .tasks
            .iter()
            .map(|task| {
                let mut attrs = Attributes::new();
                attrs.insert(
                    "status".to_string(),
                    serde_json::Value::String(task.status.clone()),
                );
                attrs.insert("phase".to_string(), serde_json::Value::from(task.phase));
                attrs.insert(
                    "name".to_string(),
                    serde_json::Value::String(task.name.clone()),
                );
                NodeSpec {
                    id: task.id.clone(),
                    deps: task.dependencies.clone(),
                    attrs,
                }
            })
            .collect();

        Ok(Graph::build(specs)?)
    }

    /// Execution order of the tracked tasks.
    pub fn execution_order(&self) -> Result<Vec<String>> {
        Ok(self.graph()?.sort()?)
    }

    /// Critical path through the tracked tasks.
    pub fn critical_path(&self) -> Result<Vec<String>> {
        if self.tasks.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.graph()?.critical_path()?)
    }

    /// Export to `path`; the extension picks the artifact format
    /// (`.csv` or `.json`).
    pub fn export(&self, path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => export::export_csv(self, path),
            Some("json") => export::export_json(self, path),
            _ => Err(PlandagError::Export(format!(
                "unsupported export format for '{}' (expected .csv or .json)",
                path.display()
            ))),
        }
    }
}
