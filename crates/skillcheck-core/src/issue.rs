use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error code used whenever a required field is absent.
pub const MISSING_FIELD: &str = "MISSING_FIELD";

/// Structured rule violation with a dotted locator and a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleError {
    /// Stable identifier such as `MISSING_FIELD` or `AMOUNT_MISMATCH`.
    pub code: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Dotted path of the offending field (ex.: `verify_payload.amount`).
    pub path: String,
    /// Suggested fix for the caller.
    pub remediation: String,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: path.into(),
            remediation: remediation.into(),
        }
    }

    /// Shortcut for a `MISSING_FIELD` error.
    pub fn missing_field(
        path: impl Into<String>,
        message: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self::new(MISSING_FIELD, message, path, remediation)
    }
}

/// Ordered errors and advisory warnings collected during one evaluation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<RuleError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error.
    pub fn push_error(&mut self, error: RuleError) {
        tracing::debug!(event = "rule_failed", code = %error.code, path = %error.path);
        self.errors.push(error);
    }

    /// Add a warning.
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
