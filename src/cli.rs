use std::path::PathBuf;

use clap::Parser;

/// Want-list parser and min-cost-flow trade solver for the math trade
/// problem.
#[derive(Parser)]
#[command(name = "mathtrade", version, about)]
#[command(group(clap::ArgGroup::new("input").required(true).multiple(false)))]
pub struct Cli {
    /// Read a want-file from this path.
    #[arg(long, group = "input")]
    pub input_file: Option<PathBuf>,

    /// Fetch a want-file from this URL. Not implemented in this build:
    /// fetch externally and pass the result to --input-file instead.
    #[arg(long, group = "input")]
    pub input_url: Option<String>,

    /// Skip parsing and load a previously exported canonical graph
    /// (see --export-graph).
    #[arg(long, group = "input")]
    pub input_graph: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Override the want-file's declared priority scheme.
    #[arg(long, conflicts_with = "no_priorities")]
    pub priorities: Option<String>,

    /// Force NONE priorities regardless of what the want-file declares.
    #[arg(long)]
    pub no_priorities: bool,

    /// Force non-trading items into the ITEM SUMMARY section.
    #[arg(long, conflicts_with = "hide_non_trades")]
    pub show_non_trades: bool,

    /// Omit non-trading items from the ITEM SUMMARY section.
    #[arg(long)]
    pub hide_non_trades: bool,

    /// Solver oracle to use: network-simplex (default), cost-scaling,
    /// capacity-scaling (all three names alias the same oracle), or
    /// cycle-canceling.
    #[arg(long, conflicts_with = "benchmark_all")]
    pub algorithm: Option<String>,

    /// Run every implemented oracle and report their agreement on trade
    /// count and total cost instead of solving once.
    #[arg(long)]
    pub benchmark_all: bool,

    /// Write the canonical graph export to this path, independent of
    /// whether a solve also runs.
    #[arg(long)]
    pub export_graph: Option<PathBuf>,

    /// Write a DOT visualization to this path. Not implemented in this
    /// build.
    #[arg(long)]
    pub export_dot: Option<PathBuf>,
}
