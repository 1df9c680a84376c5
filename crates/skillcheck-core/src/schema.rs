use schemars::schema::RootSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::envelope::Envelope;

/// Emit the JSON Schema shared by every tool's output.
pub fn envelope_json_schema() -> RootSchema {
    schema_for!(Envelope<Value>)
}
