use std::process::ExitCode;

use clap::{Parser, Subcommand};
use skillcheck_auth::{TranslateProviderCredentials, ValidateOutputSchema, ValidateRedirectUri};
use skillcheck_cli::{InputArgs, execute, finish, init_from_env, print_envelope_schema};
use skillcheck_payments::{
    CheckWebhookContract, CheckWebhookSignatureMode, ValidatePaymentContract,
    ValidateVerifyResponse,
};

#[derive(Parser, Debug)]
#[command(
    name = "skillcheck",
    version,
    about = "Contract checks for social-login and payment-gateway integrations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map OAuth provider credentials onto environment variable names.
    TranslateProviderCredentials(InputArgs),
    /// Check the summary/artifacts/machine_json output shape.
    ValidateOutputSchema(InputArgs),
    /// Check an OAuth callback URI against the backend base URL.
    ValidateRedirectUri(InputArgs),
    /// Check Flutterwave webhook signature-mode prerequisites.
    CheckWebhookSignatureMode(InputArgs),
    /// Check a Flutterwave verify response against the stored order.
    ValidateVerifyResponse(InputArgs),
    /// Check a Paystack webhook handler contract.
    CheckWebhookContract(InputArgs),
    /// Check a Paystack verify response against the stored order.
    ValidatePaymentContract(InputArgs),
    /// Print the JSON Schema of the result envelope.
    EnvelopeSchema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = init_from_env().and_then(|()| match cli.command {
        Command::TranslateProviderCredentials(args) => {
            execute(&TranslateProviderCredentials, args.input.as_deref())
        }
        Command::ValidateOutputSchema(args) => execute(&ValidateOutputSchema, args.input.as_deref()),
        Command::ValidateRedirectUri(args) => execute(&ValidateRedirectUri, args.input.as_deref()),
        Command::CheckWebhookSignatureMode(args) => {
            execute(&CheckWebhookSignatureMode, args.input.as_deref())
        }
        Command::ValidateVerifyResponse(args) => {
            execute(&ValidateVerifyResponse, args.input.as_deref())
        }
        Command::CheckWebhookContract(args) => execute(&CheckWebhookContract, args.input.as_deref()),
        Command::ValidatePaymentContract(args) => {
            execute(&ValidatePaymentContract, args.input.as_deref())
        }
        Command::EnvelopeSchema => print_envelope_schema(),
    });

    finish(outcome)
}
