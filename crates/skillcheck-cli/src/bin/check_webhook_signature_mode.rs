use std::process::ExitCode;

use skillcheck_payments::CheckWebhookSignatureMode;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&CheckWebhookSignatureMode)
}
