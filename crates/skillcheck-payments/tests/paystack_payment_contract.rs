mod common;

use serde_json::{Value, json};
use skillcheck_payments::ValidatePaymentContract;

use common::{codes, paths, run};

fn contract_input(status: &str) -> Value {
    json!({
        "expected_reference": "ps_ref_77",
        "expected_amount_kobo": 1500000,
        "verify_payload": {"status": status, "reference": "ps_ref_77", "amount": 1500000}
    })
}

#[test]
fn matching_success_marks_paid() {
    let envelope = run(&ValidatePaymentContract, contract_input("success"));
    assert_eq!(envelope["ok"], true);
    assert_eq!(
        envelope["result"],
        json!({
            "action": "mark-paid",
            "idempotent": false,
            "reference": "ps_ref_77",
            "amount_kobo": 1500000
        })
    );
}

#[test]
fn pending_status_is_invalid() {
    let envelope = run(&ValidatePaymentContract, contract_input("pending"));
    assert_eq!(envelope["ok"], false);
    assert_eq!(codes(&envelope), ["INVALID_STATUS"]);
    assert_eq!(
        envelope["errors"][0]["message"],
        "Verified status must be success, got: pending"
    );
    assert_eq!(envelope["result"], json!({"action": "reject"}));
}

#[test]
fn status_must_match_exactly() {
    let envelope = run(&ValidatePaymentContract, contract_input("Success"));
    assert_eq!(codes(&envelope), ["INVALID_STATUS"]);
}

#[test]
fn float_amounts_are_not_compared() {
    let mut input = contract_input("success");
    input["verify_payload"]["amount"] = json!(15000.5);

    let envelope = run(&ValidatePaymentContract, input);
    assert_eq!(envelope["ok"], true);
}

#[test]
fn boolean_amount_is_not_compared() {
    let mut input = contract_input("success");
    input["expected_amount_kobo"] = json!(true);
    input["verify_payload"]["amount"] = json!(1);

    let envelope = run(&ValidatePaymentContract, input);
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["result"]["amount_kobo"], 1);
}

#[test]
fn missing_fields_and_non_object_payload_are_reported() {
    let envelope = run(&ValidatePaymentContract, json!({"verify_payload": "oops"}));
    assert_eq!(envelope["ok"], false);
    assert_eq!(
        codes(&envelope),
        [
            "MISSING_FIELD",
            "MISSING_FIELD",
            "INVALID_TYPE",
            "MISSING_FIELD",
            "MISSING_FIELD",
            "MISSING_FIELD",
            "INVALID_STATUS",
        ]
    );
    assert_eq!(
        paths(&envelope),
        [
            "expected_reference",
            "expected_amount_kobo",
            "verify_payload",
            "verify_payload.status",
            "verify_payload.reference",
            "verify_payload.amount",
            "verify_payload.status",
        ]
    );
    assert_eq!(envelope["result"], json!({"action": "reject"}));
}

#[test]
fn mismatched_reference_and_amount_are_rejected() {
    let mut input = contract_input("success");
    input["verify_payload"]["reference"] = json!("ps_ref_78");
    input["verify_payload"]["amount"] = json!(150000);

    let envelope = run(&ValidatePaymentContract, input);
    assert_eq!(codes(&envelope), ["REFERENCE_MISMATCH", "AMOUNT_MISMATCH"]);
}

#[test]
fn paid_order_is_idempotent_regardless_of_payload() {
    let mut input = contract_input("failed");
    input["order_status"] = json!("paid");
    input["verify_payload"]["amount"] = json!(1);

    let envelope = run(&ValidatePaymentContract, input);
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["warnings"], json!([]));
    assert_eq!(
        envelope["result"],
        json!({"action": "no-op", "reason": "order already paid", "idempotent": true})
    );
}
