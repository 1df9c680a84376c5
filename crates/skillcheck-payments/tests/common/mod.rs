use serde_json::Value;
use skillcheck_core::Validator;

/// Run a validator and return its envelope as plain JSON.
pub fn run<V: Validator>(validator: &V, input: Value) -> Value {
    let Value::Object(document) = input else {
        panic!("test input must be a JSON object");
    };
    let envelope = validator.evaluate(&document);
    serde_json::to_value(&envelope).expect("serialize envelope")
}

/// Error codes in evaluation order.
pub fn codes(envelope: &Value) -> Vec<String> {
    envelope["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|error| error["code"].as_str().expect("code").to_string())
        .collect()
}

/// Error paths in evaluation order.
pub fn paths(envelope: &Value) -> Vec<String> {
    envelope["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|error| error["path"].as_str().expect("path").to_string())
        .collect()
}
