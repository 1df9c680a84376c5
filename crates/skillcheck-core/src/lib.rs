//! Core contracts shared by every skillcheck validator.
//!
//! Defines the result envelope, the structured rule error, the report
//! accumulator, and the loader/reporter pair that wraps each validator run.

pub mod envelope;
pub mod error;
pub mod issue;
pub mod loader;
pub mod reporter;
pub mod schema;
pub mod validator;
pub mod value;

pub use envelope::{EmptyResult, Envelope};
pub use error::{LoadError, ReportError};
pub use issue::{MISSING_FIELD, RuleError, ValidationReport};
pub use loader::{load_document, load_document_from_reader};
pub use reporter::{render_envelope, write_envelope};
pub use schema::envelope_json_schema;
pub use validator::Validator;
pub use value::{Document, as_integer, as_object_or_empty, is_truthy, stringify};

/// Exit status for a run whose envelope reports `ok: true`.
pub const EXIT_OK: u8 = 0;
/// Exit status for a run with at least one rule error.
pub const EXIT_FAILED: u8 = 1;
