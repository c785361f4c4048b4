use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_code;
mod report;
mod run;

pub use args::{Arguments, Command};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitCode::SUCCESS);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_code::exit_code_from_result(&result))
}
