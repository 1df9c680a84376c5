use std::process::ExitCode;

use skillcheck_auth::ValidateRedirectUri;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&ValidateRedirectUri)
}
