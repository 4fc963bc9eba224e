//! Interactive visualizer command

use std::path::Path;

use anyhow::Result;

use sortviz::cli::PlayArgs;

use super::resolve_settings;

#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, args: &PlayArgs) -> Result<()> {
    let settings = resolve_settings(config_path, &args.sequence)?;
    tracing::info!(
        algorithm = %settings.algorithm,
        size = settings.size,
        speed = settings.speed.get(),
        "opening visualizer"
    );
    sortviz::tui::run(settings)
}
