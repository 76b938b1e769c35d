use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursecloud", version, about = "Inspect a course catalog's relationship cloud")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Catalog document (`{"nodes": [...], "edges": [...]}`)
    #[arg(long, global = true, default_value = "mock-data.json")]
    pub data: PathBuf,
    /// Config file; defaults to `coursecloud.toml` if present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Radial layout around a focus course
    Layout {
        focus: String,
    },
    /// Map a virtual or oddly spelled id to a course
    Resolve {
        id: String,
    },
    /// Type-ahead suggestions for a partial id
    Suggest {
        query: String,
        /// Maximum results; defaults to the configured value
        #[arg(long)]
        max: Option<usize>,
    },
    /// Hop distances from a focus course
    Distances {
        focus: String,
    },
    /// Visible members of a virtual equivalence group
    Members {
        id: String,
    },
}
