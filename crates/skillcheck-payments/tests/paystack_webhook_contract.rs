mod common;

use serde_json::{Value, json};
use skillcheck_payments::CheckWebhookContract;

use common::{codes, paths, run};

fn webhook_input() -> Value {
    json!({
        "raw_body_enabled": true,
        "signature_header_name": "x-paystack-signature",
        "headers": {"x-paystack-signature": "sha512-digest"},
        "expected_reference": "ref-42",
        "event_reference": "ref-42",
        "expected_amount_kobo": 500000,
        "event_amount_kobo": 500000
    })
}

#[test]
fn well_formed_webhook_is_processed() {
    let envelope = run(&CheckWebhookContract, webhook_input());
    assert_eq!(envelope["ok"], true);
    assert_eq!(
        envelope["result"],
        json!({"action": "process-webhook", "signature_header": "x-paystack-signature"})
    );
}

#[test]
fn setup_problems_are_all_reported() {
    let envelope = run(
        &CheckWebhookContract,
        json!({"raw_body_enabled": false, "signature_header_name": "x-signature", "headers": []}),
    );
    assert_eq!(
        codes(&envelope),
        ["RAW_BODY_REQUIRED", "WRONG_SIGNATURE_HEADER", "INVALID_HEADERS", "MISSING_SIGNATURE"]
    );
    assert_eq!(envelope["result"], json!({"action": "reject"}));
}

#[test]
fn reference_and_amount_mismatches_point_at_event_fields() {
    let mut input = webhook_input();
    input["event_reference"] = json!("ref-43");
    input["event_amount_kobo"] = json!(499999);

    let envelope = run(&CheckWebhookContract, input);
    assert_eq!(codes(&envelope), ["REFERENCE_MISMATCH", "AMOUNT_MISMATCH"]);
    assert_eq!(paths(&envelope), ["event_reference", "event_amount_kobo"]);
}

#[test]
fn absent_event_reference_is_not_compared() {
    let mut input = webhook_input();
    input.as_object_mut().expect("object").remove("event_reference");

    let envelope = run(&CheckWebhookContract, input);
    assert_eq!(envelope["ok"], true);
}

#[test]
fn paid_order_short_circuits_despite_setup_errors() {
    let envelope = run(&CheckWebhookContract, json!({"order_status": "paid"}));
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["result"]["idempotent"], true);
}
