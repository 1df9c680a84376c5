use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{
    Document, Envelope, RuleError, ValidationReport, Validator, as_object_or_empty, is_truthy,
};

use crate::order::raw_body_enabled;

pub const TOOL: &str = "check-webhook-signature-mode";

const VERIF_HASH: &str = "verif-hash";
const HMAC_SHA256: &str = "hmac-sha256";
const HMAC_HEADER: &str = "x-flutterwave-signature";

/// Checks that the webhook route carries what its signature mode needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckWebhookSignatureMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum SignatureModeResult {
    ProcessWebhook { signature_mode: String },
    Reject,
}

impl Validator for CheckWebhookSignatureMode {
    type Output = SignatureModeResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<SignatureModeResult> {
        let mut report = ValidationReport::default();

        let mode = input
            .get("signature_mode")
            .and_then(Value::as_str)
            .filter(|mode| [HMAC_SHA256, VERIF_HASH].contains(mode));
        if mode.is_none() {
            report.push_error(RuleError::new(
                "INVALID_SIGNATURE_MODE",
                format!("signature_mode must be one of ['{HMAC_SHA256}', '{VERIF_HASH}']"),
                "signature_mode",
                "Set signature mode to `verif-hash` or `hmac-sha256`.",
            ));
        }

        let raw_headers = input.get("headers");
        if !raw_headers.is_some_and(Value::is_object) {
            report.push_error(RuleError::new(
                "INVALID_HEADERS",
                "headers must be an object",
                "headers",
                "Provide webhook request headers object.",
            ));
        }
        let headers = as_object_or_empty(raw_headers);
        let has_header = |name: &str| headers.get(name).is_some_and(is_truthy);

        match mode {
            Some(VERIF_HASH) if !has_header(VERIF_HASH) => {
                report.push_error(RuleError::new(
                    "MISSING_VERIF_HASH",
                    "Missing verif-hash header",
                    "headers.verif-hash",
                    "Configure FLW_SECRET_HASH and require verif-hash header.",
                ));
            }
            Some(HMAC_SHA256) => {
                if !raw_body_enabled(input) {
                    report.push_error(RuleError::new(
                        "RAW_BODY_REQUIRED",
                        "raw_body_enabled must be true for hmac-sha256 mode",
                        "raw_body_enabled",
                        "Enable raw body capture before parsing JSON payload.",
                    ));
                }
                if !has_header(HMAC_HEADER) {
                    report.push_error(RuleError::new(
                        "MISSING_HMAC_HEADER",
                        "Missing x-flutterwave-signature header",
                        "headers.x-flutterwave-signature",
                        "Require x-flutterwave-signature for HMAC mode.",
                    ));
                }
            }
            _ => {}
        }

        let result = match mode {
            Some(mode) if report.is_ok() => SignatureModeResult::ProcessWebhook {
                signature_mode: mode.to_string(),
            },
            _ => SignatureModeResult::Reject,
        };
        Envelope::from_report(TOOL, report, result)
    }
}
