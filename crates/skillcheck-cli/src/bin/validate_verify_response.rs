use std::process::ExitCode;

use skillcheck_payments::ValidateVerifyResponse;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&ValidateVerifyResponse)
}
