//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod replay;

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replay a JSON event script before rendering.
    #[arg(short, long)]
    pub events: Option<PathBuf>,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of UI events.
    pub file: PathBuf,

    /// Print the rendered page after the summary.
    #[arg(long)]
    pub render: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Which fixture set to list.
    #[arg(value_enum, default_value_t = CatalogKind::Products)]
    pub kind: CatalogKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Products,
    Categories,
    Reviews,
    Posts,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
