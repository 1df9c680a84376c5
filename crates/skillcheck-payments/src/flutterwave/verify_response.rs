use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{Document, Envelope, RuleError, ValidationReport, Validator, stringify};

use crate::order::{
    AlreadyPaid, amounts_differ, is_already_paid, require_root_fields, strings_differ,
    verify_payload,
};

pub const TOOL: &str = "validate-verify-response";

const SUCCESSFUL: &str = "successful";
const PENDING_VALIDATION: &str = "success-pending-validation";
const AWAIT_WEBHOOK_WARNING: &str = "await webhook confirmation before fulfillment";

/// Checks a Flutterwave verify response against the stored order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateVerifyResponse;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum VerifyResponseResult {
    NoOp(AlreadyPaid),
    AwaitWebhook {
        settled: bool,
    },
    MarkPaid {
        tx_ref: Value,
        amount: Value,
        settled: bool,
    },
    Reject,
}

impl Validator for ValidateVerifyResponse {
    type Output = VerifyResponseResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<VerifyResponseResult> {
        let mut report = ValidationReport::default();

        require_root_fields(
            input,
            &["expected_tx_ref", "expected_amount", "verify_payload"],
            &mut report,
        );
        let payload = verify_payload(
            input,
            &["status", "tx_ref", "amount"],
            "verify API response",
            &mut report,
        );

        if is_already_paid(input) {
            tracing::info!(event = "short_circuit", tool = TOOL, reason = "order already paid");
            return Envelope::success(TOOL, Vec::new(), VerifyResponseResult::NoOp(AlreadyPaid::default()));
        }

        if strings_differ(input.get("expected_tx_ref"), payload.get("tx_ref")) {
            report.push_error(RuleError::new(
                "TX_REF_MISMATCH",
                "verify tx_ref does not match expected tx_ref",
                "verify_payload.tx_ref",
                "Use stored tx_ref and reject mismatches.",
            ));
        }

        if amounts_differ(input.get("expected_amount"), payload.get("amount")) {
            report.push_error(RuleError::new(
                "AMOUNT_MISMATCH",
                "verify amount does not match expected amount",
                "verify_payload.amount",
                "Compare integer smallest-unit amounts from DB and verify payload.",
            ));
        }

        let status = payload.get("status");
        match status.and_then(Value::as_str) {
            Some(SUCCESSFUL) => {}
            Some(PENDING_VALIDATION) => {
                // Settlement is decided by the webhook; earlier findings are dropped.
                tracing::info!(
                    event = "await_webhook",
                    tool = TOOL,
                    dropped_errors = report.errors.len()
                );
                let mut advisory = ValidationReport::default();
                advisory.push_warning(AWAIT_WEBHOOK_WARNING);
                return Envelope::from_report(
                    TOOL,
                    advisory,
                    VerifyResponseResult::AwaitWebhook { settled: false },
                );
            }
            _ => {
                let got = status.map(stringify).unwrap_or_else(|| "null".to_string());
                report.push_error(RuleError::new(
                    "INVALID_STATUS",
                    format!("status must be successful for immediate fulfillment, got: {got}"),
                    "verify_payload.status",
                    "Treat pending/failed statuses as non-settled.",
                ));
            }
        }

        if !report.is_ok() {
            return Envelope::from_report(TOOL, report, VerifyResponseResult::Reject);
        }

        let result = VerifyResponseResult::MarkPaid {
            tx_ref: payload.get("tx_ref").cloned().unwrap_or(Value::Null),
            amount: payload.get("amount").cloned().unwrap_or(Value::Null),
            settled: true,
        };
        Envelope::from_report(TOOL, report, result)
    }
}
