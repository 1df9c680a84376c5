use std::process::ExitCode;

use skillcheck_auth::TranslateProviderCredentials;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&TranslateProviderCredentials)
}
