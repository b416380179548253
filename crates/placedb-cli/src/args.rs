use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for placedb-cli
#[derive(Debug, Parser)]
#[command(
    name = "placedb",
    version,
    about = "CLI for querying the placedb-core autocomplete index"
)]
pub struct CliArgs {
    /// Path to a dataset file (.json, or .json.gz). Defaults to the embedded dataset.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Maximum number of search results
    #[arg(short = 'n', long = "limit", global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Autocomplete a place name (prefix match with typo fallback)
    Search {
        /// Query text (case-insensitive)
        query: String,
    },

    /// Show a single place by id
    Get {
        /// Place id (e.g. TH-1609350, US.CA, TH)
        id: String,
    },
}
