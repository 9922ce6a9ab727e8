// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::loader::GraphFormat;
use crate::render::RenderFormat;

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Resolve task dependency graphs: execution order, cycles, critical path.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every task in dependency order.
    Sort(ResolveArgs),

    /// List circular dependencies (empty output when there are none).
    Cycles(ResolveArgs),

    /// Print the longest dependency chain.
    CriticalPath(ResolveArgs),

    /// Print everything one task transitively depends on.
    Deps {
        /// Task id to inspect.
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Print tasks whose attributes match, in dependency order.
    Filter {
        /// Attribute clause `KEY=VALUE`; repeat to require several.
        ///
        /// The pseudo-key `id` matches the task id itself.
        #[arg(long = "where", value_name = "KEY=VALUE", required = true)]
        clauses: Vec<String>,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Build a task tracker from a markdown plan and export it.
    Tracker(TrackerArgs),
}

/// Flags shared by the resolver subcommands.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Input graph file.
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Input format (json, yaml, toml).
    ///
    /// Inferred from the file extension when omitted; there is no
    /// content-based fallback between parsers.
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<GraphFormat>,

    /// Output rendering: newline-separated text or a JSON array.
    #[arg(long, short = 'r', value_name = "FORMAT", default_value = "text")]
    pub render: RenderFormat,

    /// Write output to a file (atomically) instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Flags for the `tracker` subcommand.
#[derive(Debug, Clone, Args)]
pub struct TrackerArgs {
    /// Markdown plan file to parse.
    #[arg(long, value_name = "PATH", conflicts_with = "phases")]
    pub plan: Option<PathBuf>,

    /// Generate an empty template with this many phases instead of
    /// parsing a plan.
    #[arg(long, value_name = "N")]
    pub phases: Option<u32>,

    /// Placeholder tasks per phase in template mode.
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub tasks_per_phase: u32,

    /// Output artifact path; `.csv` or `.json` picks the format.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
