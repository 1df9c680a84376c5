use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issue::{RuleError, ValidationReport};
use crate::{EXIT_FAILED, EXIT_OK};

/// Uniform result document printed by every tool.
///
/// `ok` always equals `errors.is_empty()`; the constructors are the only
/// place it is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Envelope<R> {
    /// True when no rule error was recorded.
    pub ok: bool,
    /// Name of the validator that produced this envelope.
    pub tool: String,
    /// Rule errors in evaluation order.
    pub errors: Vec<RuleError>,
    /// Advisory warnings; never affect `ok`.
    pub warnings: Vec<String>,
    /// Tool-specific payload.
    pub result: R,
}

impl<R> Envelope<R> {
    /// Successful envelope with no errors.
    pub fn success(tool: impl Into<String>, warnings: Vec<String>, result: R) -> Self {
        Self {
            ok: true,
            tool: tool.into(),
            errors: Vec::new(),
            warnings,
            result,
        }
    }

    /// Envelope carrying everything a report collected.
    pub fn from_report(tool: impl Into<String>, report: ValidationReport, result: R) -> Self {
        Self {
            ok: report.is_ok(),
            tool: tool.into(),
            errors: report.errors,
            warnings: report.warnings,
            result,
        }
    }

    /// Process exit status matching `ok`.
    pub fn exit_code(&self) -> u8 {
        if self.ok { EXIT_OK } else { EXIT_FAILED }
    }
}

/// Result payload that serializes as `{}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmptyResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_tracks_errors() {
        let mut report = ValidationReport::default();
        report.push_error(RuleError::new("X", "x", "x", "x"));
        let envelope = Envelope::from_report("demo", report, EmptyResult {});
        assert!(!envelope.ok);
        assert_eq!(envelope.exit_code(), EXIT_FAILED);

        let envelope = Envelope::from_report("demo", ValidationReport::default(), EmptyResult {});
        assert!(envelope.ok);
        assert_eq!(envelope.exit_code(), EXIT_OK);
    }
}
