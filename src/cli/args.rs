use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bootrecov", version, about = "Manage GRUB menu entries for boot kernel backups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List discovered backups and their entry status (default)
    List,
    /// List the menu entries currently in the script
    Entries,
    /// Add or remove the menu entry for a backup
    Toggle {
        /// Backup directory base name
        name: String,
    },
    /// Remove a menu entry by name
    Remove {
        /// Entry display name
        name: String,
    },
}
