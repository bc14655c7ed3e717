//! CLI Argument Structures
//!
//! Argument definitions for the edgecombine binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Combine .edge adjacency matrices into one block-diagonal matrix
#[derive(Parser, Debug)]
#[command(name = "edgecombine")]
#[command(version = VERSION)]
#[command(about = "Combine .edge files into a block-diagonal total.edge")]
#[command(long_about = "
Assemble every *.edge adjacency-matrix file in a folder into one
block-diagonal matrix. Each input becomes a diagonal block and all
other entries are zero. The result is written into the same folder.

Common Usage:

  # Default: name order, total.edge, 5 decimal places
  edgecombine ./graphs

  # Custom output name and precision
  edgecombine ./graphs -o my_result.edge -p 8

  # Sort alphabetically, or largest matrix first
  edgecombine ./graphs -a
  edgecombine ./graphs -s

  # Machine-readable summary
  edgecombine ./graphs --format json
")]
pub struct Cli {
    /// Folder containing *.edge files
    pub folder: PathBuf,

    /// Output filename [default: total.edge]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Decimal places to keep [default: 5]
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Sort files alphabetically
    #[arg(short, long)]
    pub alphabetical: bool,

    /// Sort files by size (largest first)
    #[arg(short, long)]
    pub size: bool,

    /// Configuration file (YAML); defaults to .edgecombine.yml when present
    #[arg(short, long, env = "EDGECOMBINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Format of the summary printed after combining
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: ReportFormat,

    /// Do not print the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Summary output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable summary
    Pretty,
    /// JSON summary
    Json,
    /// YAML summary
    Yaml,
}
