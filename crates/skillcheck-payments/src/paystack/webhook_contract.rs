use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{
    Document, Envelope, RuleError, ValidationReport, Validator, as_object_or_empty, is_truthy,
};

use crate::order::{AlreadyPaid, amounts_differ, is_already_paid, raw_body_enabled};

pub const TOOL: &str = "check-webhook-contract";

const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Checks a Paystack webhook handler's raw-body, signature, and order
/// matching setup.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckWebhookContract;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum WebhookContractResult {
    NoOp(AlreadyPaid),
    ProcessWebhook { signature_header: &'static str },
    Reject,
}

impl Validator for CheckWebhookContract {
    type Output = WebhookContractResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<WebhookContractResult> {
        let mut report = ValidationReport::default();

        if !raw_body_enabled(input) {
            report.push_error(RuleError::new(
                "RAW_BODY_REQUIRED",
                "raw_body_enabled must be true for signature verification",
                "raw_body_enabled",
                "Enable raw body parsing on webhook route before JSON parse.",
            ));
        }

        if input.get("signature_header_name").and_then(Value::as_str) != Some(SIGNATURE_HEADER) {
            report.push_error(RuleError::new(
                "WRONG_SIGNATURE_HEADER",
                "signature_header_name must be x-paystack-signature",
                "signature_header_name",
                "Read signature from `x-paystack-signature` header.",
            ));
        }

        let raw_headers = input.get("headers");
        if !raw_headers.is_some_and(Value::is_object) {
            report.push_error(RuleError::new(
                "INVALID_HEADERS",
                "headers must be an object",
                "headers",
                "Provide request headers object.",
            ));
        }
        let headers = as_object_or_empty(raw_headers);
        if !headers.get(SIGNATURE_HEADER).is_some_and(is_truthy) {
            report.push_error(RuleError::new(
                "MISSING_SIGNATURE",
                "Missing x-paystack-signature header",
                "headers.x-paystack-signature",
                "Require raw body and reject unsigned webhook payloads.",
            ));
        }

        if is_already_paid(input) {
            tracing::info!(event = "short_circuit", tool = TOOL, reason = "order already paid");
            return Envelope::success(TOOL, Vec::new(), WebhookContractResult::NoOp(AlreadyPaid::default()));
        }

        let expected_reference = input.get("expected_reference").filter(|value| is_truthy(value));
        let event_reference = input.get("event_reference").filter(|value| is_truthy(value));
        if let (Some(expected), Some(event)) = (expected_reference, event_reference) {
            if expected != event {
                report.push_error(RuleError::new(
                    "REFERENCE_MISMATCH",
                    "Webhook reference does not match expected reference",
                    "event_reference",
                    "Lookup order by Paystack reference and reject mismatches.",
                ));
            }
        }

        if amounts_differ(input.get("expected_amount_kobo"), input.get("event_amount_kobo")) {
            report.push_error(RuleError::new(
                "AMOUNT_MISMATCH",
                "Webhook amount does not match expected amount",
                "event_amount_kobo",
                "Compare smallest-unit integers before fulfillment.",
            ));
        }

        let result = if report.is_ok() {
            WebhookContractResult::ProcessWebhook {
                signature_header: SIGNATURE_HEADER,
            }
        } else {
            WebhookContractResult::Reject
        };
        Envelope::from_report(TOOL, report, result)
    }
}
