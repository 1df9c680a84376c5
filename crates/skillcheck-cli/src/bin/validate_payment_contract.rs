use std::process::ExitCode;

use skillcheck_payments::ValidatePaymentContract;

fn main() -> ExitCode {
    skillcheck_cli::run_tool(&ValidatePaymentContract)
}
