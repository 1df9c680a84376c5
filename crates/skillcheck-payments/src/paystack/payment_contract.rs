use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{Document, Envelope, RuleError, ValidationReport, Validator, stringify};

use crate::order::{
    AlreadyPaid, amounts_differ, is_already_paid, require_root_fields, strings_differ,
    verify_payload,
};

pub const TOOL: &str = "validate-payment-contract";

const SUCCESS: &str = "success";

/// Checks a Paystack transaction-verify response before fulfilling an
/// order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatePaymentContract;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PaymentContractResult {
    NoOp(AlreadyPaid),
    MarkPaid {
        idempotent: bool,
        reference: Value,
        amount_kobo: Value,
    },
    Reject,
}

impl Validator for ValidatePaymentContract {
    type Output = PaymentContractResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<PaymentContractResult> {
        let mut report = ValidationReport::default();

        require_root_fields(
            input,
            &["expected_reference", "expected_amount_kobo", "verify_payload"],
            &mut report,
        );
        let payload = verify_payload(
            input,
            &["status", "reference", "amount"],
            "Paystack verify response",
            &mut report,
        );

        if is_already_paid(input) {
            tracing::info!(event = "short_circuit", tool = TOOL, reason = "order already paid");
            return Envelope::success(TOOL, Vec::new(), PaymentContractResult::NoOp(AlreadyPaid::default()));
        }

        if strings_differ(input.get("expected_reference"), payload.get("reference")) {
            report.push_error(RuleError::new(
                "REFERENCE_MISMATCH",
                "Verified reference does not match expected reference",
                "verify_payload.reference",
                "Use Paystack returned reference from initialization and verify against DB.",
            ));
        }

        if amounts_differ(input.get("expected_amount_kobo"), payload.get("amount")) {
            report.push_error(RuleError::new(
                "AMOUNT_MISMATCH",
                "Verified amount does not match expected amount",
                "verify_payload.amount",
                "Store expected amount in kobo and compare exact integer values.",
            ));
        }

        let status = payload.get("status");
        if status.and_then(Value::as_str) != Some(SUCCESS) {
            let got = status.map(stringify).unwrap_or_else(|| "null".to_string());
            report.push_error(RuleError::new(
                "INVALID_STATUS",
                format!("Verified status must be success, got: {got}"),
                "verify_payload.status",
                "Do not fulfill order unless verify status is `success`.",
            ));
        }

        if !report.is_ok() {
            return Envelope::from_report(TOOL, report, PaymentContractResult::Reject);
        }

        let result = PaymentContractResult::MarkPaid {
            idempotent: false,
            reference: payload.get("reference").cloned().unwrap_or(Value::Null),
            amount_kobo: payload.get("amount").cloned().unwrap_or(Value::Null),
        };
        Envelope::from_report(TOOL, report, result)
    }
}
