use std::process::ExitCode;

use skillcheck_auth::ValidateOutputSchema;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&ValidateOutputSchema)
}
