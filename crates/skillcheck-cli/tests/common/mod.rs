use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;

pub const TOOLS: [&str; 7] = [
    "translate-provider-credentials",
    "validate-output-schema",
    "validate-redirect-uri",
    "check-webhook-signature-mode",
    "validate-verify-response",
    "check-webhook-contract",
    "validate-payment-contract",
];

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

pub fn tool(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("tool binary");
    cmd.env_remove("SKILLCHECK_CONFIG")
        .env_remove("SKILLCHECK_LOG")
        .env("SKILLCHECK_LOG_FORMAT", "off");
    cmd
}

pub fn skillcheck() -> Command {
    tool("skillcheck")
}

pub fn parse_stdout(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("valid json output")
}
