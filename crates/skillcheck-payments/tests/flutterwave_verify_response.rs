mod common;

use serde_json::{Value, json};
use skillcheck_payments::ValidateVerifyResponse;

use common::{codes, paths, run};

fn verify_input(status: &str) -> Value {
    json!({
        "expected_tx_ref": "tx-1001",
        "expected_amount": 250000,
        "verify_payload": {"status": status, "tx_ref": "tx-1001", "amount": 250000}
    })
}

#[test]
fn successful_verify_marks_paid() {
    let envelope = run(&ValidateVerifyResponse, verify_input("successful"));
    assert_eq!(envelope["ok"], true);
    assert_eq!(
        envelope["result"],
        json!({"action": "mark-paid", "tx_ref": "tx-1001", "amount": 250000, "settled": true})
    );
}

#[test]
fn pending_validation_awaits_webhook() {
    let envelope = run(&ValidateVerifyResponse, verify_input("success-pending-validation"));
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["errors"], json!([]));
    assert_eq!(
        envelope["warnings"],
        json!(["await webhook confirmation before fulfillment"])
    );
    assert_eq!(envelope["result"], json!({"action": "await-webhook", "settled": false}));
}

#[test]
fn pending_validation_awaits_webhook_even_with_mismatches() {
    let input = json!({
        "expected_tx_ref": "tx-1",
        "expected_amount": 100,
        "verify_payload": {"status": "success-pending-validation", "tx_ref": "tx-2", "amount": 1}
    });

    let envelope = run(&ValidateVerifyResponse, input);
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["errors"], json!([]));
    assert_eq!(
        envelope["warnings"],
        json!(["await webhook confirmation before fulfillment"])
    );
    assert_eq!(envelope["result"], json!({"action": "await-webhook", "settled": false}));
}

#[test]
fn mismatches_and_failed_status_are_collected() {
    let input = json!({
        "expected_tx_ref": "tx-1001",
        "expected_amount": 250000,
        "verify_payload": {"status": "failed", "tx_ref": "tx-9999", "amount": 100}
    });
    let envelope = run(&ValidateVerifyResponse, input);
    assert_eq!(codes(&envelope), ["TX_REF_MISMATCH", "AMOUNT_MISMATCH", "INVALID_STATUS"]);
    assert_eq!(
        envelope["errors"][2]["message"],
        "status must be successful for immediate fulfillment, got: failed"
    );
}

#[test]
fn missing_fields_use_dotted_paths() {
    let envelope = run(&ValidateVerifyResponse, json!({"verify_payload": "oops"}));
    assert_eq!(
        paths(&envelope),
        [
            "expected_tx_ref",
            "expected_amount",
            "verify_payload",
            "verify_payload.status",
            "verify_payload.tx_ref",
            "verify_payload.amount",
            "verify_payload.status",
        ]
    );
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
}

#[test]
fn paid_order_short_circuits() {
    let envelope = run(&ValidateVerifyResponse, json!({"order_status": "paid"}));
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["errors"], json!([]));
    assert_eq!(
        envelope["result"],
        json!({"action": "no-op", "reason": "order already paid", "idempotent": true})
    );
}
