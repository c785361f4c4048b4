use std::process::ExitCode;

use super::commands::CommandResult;

pub fn exit_code_from_result(result: &CommandResult) -> ExitCode {
    if result.exit_on_errors && result.error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
