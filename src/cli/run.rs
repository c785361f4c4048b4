/// Main entry point for the hanlift CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{CommandResult, CommandSummary, InitSummary};
use super::commands::{extract::extract, rewrite::rewrite};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Rewrite(cmd)) => rewrite(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                error_count: 0,
                exit_on_errors: true,
                source_files_checked: 0,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
