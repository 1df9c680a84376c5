use skillcheck_core::{LoadError, ReportError};
use thiserror::Error;

use crate::settings::SettingsError;

/// Failures that abort a CLI run before or after evaluation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("{0}")]
    Report(#[from] ReportError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = std::result::Result<T, CliError>;
