//! Rules shared by the order-settlement validators.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{
    Document, RuleError, ValidationReport, as_integer, as_object_or_empty,
};

/// Idempotent no-op payload for orders that were already settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlreadyPaid {
    pub reason: &'static str,
    pub idempotent: bool,
}

impl Default for AlreadyPaid {
    fn default() -> Self {
        Self {
            reason: "order already paid",
            idempotent: true,
        }
    }
}

/// True when the caller reports the order as already paid.
pub fn is_already_paid(input: &Document) -> bool {
    input.get("order_status").and_then(Value::as_str) == Some("paid")
}

/// Record `MISSING_FIELD` for every absent top-level key.
pub fn require_root_fields(input: &Document, keys: &[&str], report: &mut ValidationReport) {
    for key in keys {
        if !input.contains_key(*key) {
            report.push_error(RuleError::missing_field(
                *key,
                format!("Missing required field: {key}"),
                format!("Provide `{key}` in input JSON."),
            ));
        }
    }
}

/// Extract `verify_payload` and require `keys` inside it.
///
/// A present non-object payload is an `INVALID_TYPE` error; it is then
/// treated as empty so the nested key checks still run.
pub fn verify_payload<'a>(
    input: &'a Document,
    keys: &[&str],
    source: &str,
    report: &mut ValidationReport,
) -> Cow<'a, Document> {
    let raw = input.get("verify_payload");
    if raw.is_some_and(|value| !value.is_object()) {
        report.push_error(RuleError::new(
            "INVALID_TYPE",
            "verify_payload must be an object",
            "verify_payload",
            "Set `verify_payload` to a JSON object.",
        ));
    }
    let payload = as_object_or_empty(raw);

    for key in keys {
        if !payload.contains_key(*key) {
            report.push_error(RuleError::missing_field(
                format!("verify_payload.{key}"),
                format!("verify_payload missing: {key}"),
                format!("Populate `verify_payload.{key}` from {source}."),
            ));
        }
    }

    payload
}

/// Both values are strings and they differ.
pub fn strings_differ(expected: Option<&Value>, actual: Option<&Value>) -> bool {
    match (
        expected.and_then(Value::as_str),
        actual.and_then(Value::as_str),
    ) {
        (Some(expected), Some(actual)) => expected != actual,
        _ => false,
    }
}

/// Both values are integer amounts and they differ.
pub fn amounts_differ(expected: Option<&Value>, actual: Option<&Value>) -> bool {
    match (expected.and_then(as_integer), actual.and_then(as_integer)) {
        (Some(expected), Some(actual)) => expected != actual,
        _ => false,
    }
}

/// `raw_body_enabled` is exactly `true`.
pub fn raw_body_enabled(input: &Document) -> bool {
    input.get("raw_body_enabled") == Some(&Value::Bool(true))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    #[test]
    fn paid_requires_exact_status() {
        assert!(is_already_paid(&doc(json!({"order_status": "paid"}))));
        assert!(!is_already_paid(&doc(json!({"order_status": "PAID"}))));
        assert!(!is_already_paid(&doc(json!({}))));
    }

    #[test]
    fn mismatches_ignore_wrong_types() {
        assert!(strings_differ(Some(&json!("a")), Some(&json!("b"))));
        assert!(!strings_differ(Some(&json!("a")), Some(&json!(1))));
        assert!(amounts_differ(Some(&json!(500)), Some(&json!(501))));
        assert!(!amounts_differ(Some(&json!(500)), Some(&json!(500.0))));
        assert!(!amounts_differ(None, Some(&json!(1))));
    }

    #[test]
    fn booleans_are_not_amounts() {
        assert!(!amounts_differ(Some(&json!(1)), Some(&json!(true))));
        assert!(!amounts_differ(Some(&json!(false)), Some(&json!(0))));
    }

    #[test]
    fn raw_body_must_be_literal_true() {
        assert!(raw_body_enabled(&doc(json!({"raw_body_enabled": true}))));
        assert!(!raw_body_enabled(&doc(json!({"raw_body_enabled": "true"}))));
        assert!(!raw_body_enabled(&doc(json!({"raw_body_enabled": 1}))));
    }

    #[test]
    fn non_object_payload_still_checks_nested_keys() {
        let input = doc(json!({"verify_payload": [1]}));
        let mut report = ValidationReport::default();
        let payload = verify_payload(&input, &["status", "amount"], "the verify API", &mut report);
        assert!(payload.is_empty());
        let codes: Vec<_> = report.errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["INVALID_TYPE", "MISSING_FIELD", "MISSING_FIELD"]);
    }
}
