//! CLI argument parsing for opsdeck
//!
//! Uses clap for argument parsing.
//! Global flags: --root, --store, --format, --quiet, --verbose, --seed

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Opsdeck - warehouse operations dashboard CLI
#[derive(Parser, Debug)]
#[command(name = "opsdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Seed for the random source (deterministic simulation and responses)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new opsdeck store
    Init,

    /// Show the current metrics snapshot
    Status,

    /// Answer a free-text query about operations
    Ask {
        /// Query text (multiple words are joined)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Apply simulation ticks to the metrics
    Tick {
        /// Number of ticks to apply
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },

    /// Run the simulation continuously until Ctrl-C
    Watch {
        /// Seconds between ticks (defaults to the configured interval)
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Manually adjust a metric by a delta, clamped to its bounds
    Adjust {
        /// Metric name (e.g. quality-audit-rate)
        metric: String,

        /// Signed delta to apply
        #[arg(allow_hyphen_values = true)]
        delta: f64,
    },

    /// Run a checklist action
    Check {
        /// Action: waves, training, stock, or quality
        action: String,
    },

    /// Show recent query history
    History {
        /// Maximum entries to show
        #[arg(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Show threshold-derived operational insights
    Insights,

    /// Export the multi-sheet operations report
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
