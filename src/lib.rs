// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod render;
pub mod tracker;

use tracing::debug;

use crate::cli::{CliArgs, Command, ResolveArgs, TrackerArgs};
use crate::errors::{PlandagError, Result};
use crate::graph::{Attributes, Graph};
use crate::loader::load_graph;
use crate::render::{render_cycles, render_ids, write_output};
use crate::tracker::TaskTracker;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - graph loading (explicit format selection)
/// - the resolver queries (sort / cycles / critical path / subgraphs)
/// - the task tracker
/// - output rendering and exit-code mapping (any `Err` exits non-zero)
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Sort(resolve) => {
            let graph = load(&resolve)?;
            let order = graph.sort()?;
            emit(&resolve, render_ids(&order, resolve.render)?)
        }
        Command::Cycles(resolve) => {
            // A pure query: the cycle list is the output, so an empty
            // list is success rather than an error. `sort` and the
            // commands built on it are the acyclicity gates.
            let graph = load(&resolve)?;
            let cycles = graph.find_cycles();
            debug!(count = cycles.len(), "cycle scan finished");
            emit(&resolve, render_cycles(&cycles, resolve.render)?)
        }
        Command::CriticalPath(resolve) => {
            let graph = load(&resolve)?;
            let path = graph.critical_path()?;
            emit(&resolve, render_ids(&path, resolve.render)?)
        }
        Command::Deps { id, resolve } => {
            let graph = load(&resolve)?;
            let deps = graph.transitive_dependencies(&id)?;
            emit(&resolve, render_ids(&deps, resolve.render)?)
        }
        Command::Filter { clauses, resolve } => {
            let clauses = parse_clauses(&clauses)?;
            let graph = load(&resolve)?;
            let matched = graph.filter_nodes(|id, attrs| {
                clauses
                    .iter()
                    .all(|(key, want)| attr_matches(id, attrs, key, want))
            })?;
            emit(&resolve, render_ids(&matched, resolve.render)?)
        }
        Command::Tracker(tracker_args) => run_tracker(tracker_args),
    }
}

fn load(resolve: &ResolveArgs) -> Result<Graph> {
    load_graph(&resolve.input, resolve.format)
}

fn emit(resolve: &ResolveArgs, rendered: String) -> Result<()> {
    write_output(resolve.output.as_deref(), &rendered)
}

/// Parse `KEY=VALUE` clauses from `--where`.
fn parse_clauses(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|clause| match clause.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((key.to_string(), value.to_string()))
            }
            _ => Err(PlandagError::Other(anyhow::anyhow!(
                "invalid --where clause '{clause}' (expected KEY=VALUE)"
            ))),
        })
        .collect()
}

/// Match one clause against a node.
///
/// The pseudo-key `id` matches the node id; attribute values compare
/// against their string form (strings without quotes).
fn attr_matches(id: &str, attrs: &Attributes, key: &str, want: &str) -> bool {
    if key == "id" {
        return id == want;
    }
    match attrs.get(key) {
        Some(serde_json::Value::String(s)) => s == want,
        Some(value) => value.to_string() == want,
        None => false,
    }
}

fn run_tracker(args: TrackerArgs) -> Result<()> {
    let tracker = match (&args.plan, args.phases) {
        (Some(plan), None) => TaskTracker::from_plan_file(plan)?,
        (None, Some(phases)) => TaskTracker::from_template(phases, args.tasks_per_phase),
        _ => {
            return Err(PlandagError::Other(anyhow::anyhow!(
                "pass --plan <PATH> or --phases <N>"
            )));
        }
    };

    // Resolve before exporting: dangling references and cycles fail the
    // whole command here, so no artifact is written for a broken plan.
    let order = tracker.execution_order()?;
    debug!(tasks = order.len(), "tracker tasks resolved");

    tracker.export(&args.output)
}
