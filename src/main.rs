use std::process::ExitCode;

use clap::Parser;
use hanlift::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match hanlift::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
