//! Subcommand handlers for the `sortviz` binary.

pub mod completions;
pub mod config;
pub mod info;
pub mod play;
pub mod run;

use std::path::Path;

use anyhow::Result;

use sortviz::cli::SequenceArgs;
use sortviz::engine::{Settings, Speed};
use sortviz::Config;

/// Load the config file and layer command-line overrides on top.
pub fn resolve_settings(config_path: Option<&Path>, args: &SequenceArgs) -> Result<Settings> {
    let path = Config::resolve_path(config_path)?;
    let settings = Config::load_from(&path)?.to_settings()?;
    apply_overrides(settings, args)
}

/// Apply `--algorithm`, `--size`, `--speed` and `--seed` to `settings`.
pub fn apply_overrides(mut settings: Settings, args: &SequenceArgs) -> Result<Settings> {
    if let Some(algorithm) = args.algorithm {
        settings.algorithm = algorithm;
    }
    if let Some(size) = args.size {
        settings.size = size;
    }
    if let Some(speed) = args.speed {
        settings.speed = Speed::new(speed)?;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;
    Ok(settings)
}
