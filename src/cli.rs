//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::algorithms::Algorithm;

/// Build version string, with the git SHA on development builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "sortviz",
    version = version(),
    about = "Watch sorting algorithms compare and swap, one step at a time",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: <config dir>/sortviz/config.toml)
    #[arg(long, global = true, env = "SORTVIZ_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append tracing logs to this file
    #[arg(long, global = true, env = "SORTVIZ_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive visualizer
    Play(PlayArgs),

    /// Run sorts headless and print statistics
    Run(RunArgs),

    /// Describe an algorithm (or all of them)
    Info {
        /// Algorithm to describe
        #[arg(value_enum)]
        algorithm: Option<Algorithm>,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Overrides shared by `play` and `run`.
#[derive(Debug, Args, Default, Clone)]
pub struct SequenceArgs {
    /// Sorting algorithm
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Number of bars
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Animation speed from 1 (slowest) to 10 (fastest)
    #[arg(short, long)]
    pub speed: Option<u8>,

    /// Seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub sequence: SequenceArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Run every algorithm on the same input
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,

    /// Sort these values instead of a random sequence (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 0.., conflicts_with = "size")]
    pub values: Option<Vec<u32>>,

    /// Pause for the real step delay instead of running instantly
    #[arg(long)]
    pub realtime: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Open the config file in $EDITOR
    Edit,
}
