use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the input document. These abort the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Failures while writing the result envelope.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
