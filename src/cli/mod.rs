use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::args::{Cli, Command};
use crate::cli::commands::{entries, exit_for_error, list, remove, toggle};
use crate::config::{self, DEFAULT_CONFIG_FILE};

pub mod args;
pub mod commands;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let paths = match config::load_paths(&config_path) {
        Ok(paths) => paths,
        Err(err) => {
            println!("failed to load config {}: {}", config_path.display(), err);
            std::process::exit(2);
        }
    };

    let command = cli.command.unwrap_or(Command::List);
    let result = match command {
        Command::List => list::run_list(&paths),
        Command::Entries => entries::run_entries(&paths),
        Command::Toggle { name } => toggle::run_toggle(&paths, &name),
        Command::Remove { name } => remove::run_remove(&paths, &name),
    };
    if let Err(err) = result {
        exit_for_error(&err);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
