//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all hanlift
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `extract`: List hardcoded Chinese texts found in source files
//! - `rewrite`: Rewrite hardcoded texts into `$t(...)` calls
//! - `init`: Initialize hanlift configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print extracted texts as JSON instead of the plain listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Parser)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub args: RewriteArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hardcoded Chinese texts from source files
    Extract(ExtractCommand),
    /// Rewrite hardcoded Chinese texts into $t(...) calls using the primary locale messages
    Rewrite(RewriteCommand),
    /// Initialize a new .hanliftrc.json configuration file
    Init,
}
