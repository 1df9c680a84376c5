use serde::Serialize;
use serde_json::Value;
use skillcheck_core::{
    Document, Envelope, RuleError, ValidationReport, Validator, as_object_or_empty,
};

pub const TOOL: &str = "validate-output-schema";

const REQUIRED_ROOT: [&str; 4] = ["summary", "artifacts", "next_actions", "machine_json"];
const REQUIRED_MACHINE: [&str; 4] = ["decisions", "risks", "required_inputs", "validation_results"];
const ARRAY_FIELDS: [&str; 2] = ["artifacts", "next_actions"];

/// Checks the summary/artifacts/machine_json shape of a workflow output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateOutputSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum OutputSchemaResult {
    SchemaValid,
    FixOutput,
}

impl Validator for ValidateOutputSchema {
    type Output = OutputSchemaResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<OutputSchemaResult> {
        let mut report = ValidationReport::default();

        for key in REQUIRED_ROOT {
            if !input.contains_key(key) {
                report.push_error(RuleError::missing_field(
                    key,
                    format!("Missing root field: {key}"),
                    format!("Add `{key}` to output."),
                ));
            }
        }

        let raw_machine = input.get("machine_json");
        if !raw_machine.is_some_and(Value::is_object) {
            report.push_error(RuleError::new(
                "INVALID_TYPE",
                "machine_json must be an object",
                "machine_json",
                "Set machine_json to an object.",
            ));
        }
        let machine = as_object_or_empty(raw_machine);

        for key in REQUIRED_MACHINE {
            if !machine.contains_key(key) {
                report.push_error(RuleError::missing_field(
                    format!("machine_json.{key}"),
                    format!("machine_json missing: {key}"),
                    format!("Add `machine_json.{key}` to output."),
                ));
            }
        }

        if let Some(Value::String(summary)) = input.get("summary") {
            if summary.trim().is_empty() {
                report.push_error(RuleError::new(
                    "EMPTY_SUMMARY",
                    "summary must be non-empty",
                    "summary",
                    "Provide a concise summary sentence.",
                ));
            }
        }

        for key in ARRAY_FIELDS {
            if input.get(key).is_some_and(|value| !value.is_null() && !value.is_array()) {
                report.push_error(RuleError::new(
                    "INVALID_TYPE",
                    format!("{key} must be an array"),
                    key,
                    format!("Set `{key}` to an array of strings."),
                ));
            }
        }

        check_validation_results(machine.get("validation_results"), &mut report);

        let result = if report.is_ok() {
            OutputSchemaResult::SchemaValid
        } else {
            OutputSchemaResult::FixOutput
        };
        Envelope::from_report(TOOL, report, result)
    }
}

fn check_validation_results(results: Option<&Value>, report: &mut ValidationReport) {
    let items = match results {
        None | Some(Value::Null) => return,
        Some(Value::Array(items)) => items,
        Some(_) => {
            report.push_error(RuleError::new(
                "INVALID_TYPE",
                "validation_results must be an array",
                "machine_json.validation_results",
                "Provide array of {name, ok, details?}.",
            ));
            return;
        }
    };

    for (idx, item) in items.iter().enumerate() {
        let path = format!("machine_json.validation_results[{idx}]");
        let Some(item) = item.as_object() else {
            report.push_error(RuleError::new(
                "INVALID_ITEM",
                "validation_results item must be object",
                path,
                "Use object with name and ok fields.",
            ));
            continue;
        };
        if !item.contains_key("name") || !item.contains_key("ok") {
            report.push_error(RuleError::missing_field(
                path,
                "validation_results item requires name and ok",
                "Add `name` and `ok` fields.",
            ));
        }
    }
}
