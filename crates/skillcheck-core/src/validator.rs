use serde::Serialize;

use crate::envelope::Envelope;
use crate::value::Document;

/// A fixed, ordered checklist applied to one input document.
pub trait Validator {
    /// Tool-specific `result` payload.
    type Output: Serialize;

    /// Tool name reported in the envelope and used as the binary name.
    fn tool(&self) -> &'static str;

    /// Evaluate every rule and build the envelope. Must be pure.
    fn evaluate(&self, input: &Document) -> Envelope<Self::Output>;

    /// `evaluate` wrapped with run-level tracing.
    fn check(&self, input: &Document) -> Envelope<Self::Output> {
        let tool = self.tool();
        tracing::info!(event = "evaluation_started", tool = tool, fields = input.len());
        let envelope = self.evaluate(input);
        tracing::info!(
            event = "evaluation_finished",
            tool = tool,
            ok = envelope.ok,
            errors = envelope.errors.len(),
            warnings = envelope.warnings.len()
        );
        envelope
    }
}
