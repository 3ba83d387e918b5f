//! Command-line arguments of `minpath`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Shortest paths from a single source in a weighted directed graph
#[derive(Parser, Debug)]
#[command(name = "minpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON graph description; read from stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Vertex to compute the shortest paths from
    #[arg(long, short)]
    pub source: String,

    /// Print only the shortest path to this vertex
    #[arg(long, short)]
    pub to: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Update queued priorities in place instead of enqueuing duplicates
    #[arg(long)]
    pub decrease_key: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log filter, e.g. `trace` or `minpath=debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable mappings
    Text,
    /// Machine-readable JSON
    Json,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .map_or(true, |path| path.as_os_str() == "-")
    }
}
