//! sortviz CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use sortviz::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        sortviz::logging::init_file_logging(path)?;
    }
    tracing::debug!(command = ?cli.command, "starting");

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Play(args) => commands::play::handle(config_path, args),
        Commands::Run(args) => commands::run::handle(config_path, args),
        Commands::Info { algorithm } => {
            commands::info::handle(*algorithm);
            Ok(())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, *force),
            ConfigCommands::Edit => commands::config::handle_edit(config_path),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            Ok(())
        }
    }
}
