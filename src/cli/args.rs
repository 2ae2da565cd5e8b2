//! Command line argument parsing for the typotrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// typotrie - typo-tolerant lookup over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "typotrie")]
#[command(about = "Find the dictionary entries a mistyped word was probably meant to be")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypotrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TYPOTRIE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypotrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest dictionary entries for a mistyped word
    Lookup(LookupArgs),

    /// Compute the typo distance between two strings
    Distance(DistanceArgs),

    /// Show dictionary and trie statistics
    Stats(StatsArgs),
}

/// Arguments for a lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Dictionary file, one entry per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// What was typed
    #[arg(value_name = "TYPED")]
    pub typed: String,

    /// Largest typo distance to accept
    #[arg(short = 'd', long)]
    pub max_distance: Option<f32>,

    /// Expected typo distance (mean of the probability model)
    #[arg(short = 'e', long)]
    pub expected_distance: Option<f64>,

    /// Drop suggestions at or below this probability
    #[arg(short = 'p', long)]
    pub min_probability: Option<f64>,

    /// Maximum number of suggestions to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for a distance computation
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// The intended string
    #[arg(value_name = "MEANT")]
    pub meant: String,

    /// The typed string
    #[arg(value_name = "TYPED")]
    pub typed: String,

    /// Use unit costs (classic Levenshtein) instead of the keyboard model
    #[arg(long)]
    pub unit: bool,

    /// With --unit, count adjacent swaps as one edit
    #[arg(long, requires = "unit")]
    pub transpositions: bool,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary file, one entry per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
