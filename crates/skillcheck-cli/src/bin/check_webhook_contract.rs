use std::process::ExitCode;

use skillcheck_payments::CheckWebhookContract;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&CheckWebhookContract)
}
