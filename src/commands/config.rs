//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use sortviz::tui::current_theme;
use sortviz::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load_from(&path)?;
    // Surface invalid values here rather than at the next `play`
    config.to_settings()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", Config::resolve_path(config_path)?.display());
    Ok(())
}

/// Write a default config file. Refuses to overwrite unless `force`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let theme = current_theme();
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("{}", theme.success_text(&format!("Wrote {}", path.display())));
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let theme = current_theme();

    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", path.display(), editor))
    );

    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
