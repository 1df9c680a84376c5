use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::value::{Document, kind_name};

/// Load the input document from `path`, or from stdin when no path is given.
pub fn load_document(path: Option<&Path>) -> Result<Document, LoadError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(event = "input_opened", path = %path.display());
            load_document_from_reader(BufReader::new(file))
        }
        None => {
            tracing::debug!(event = "input_opened", path = "-");
            load_document_from_reader(io::stdin().lock())
        }
    }
}

/// Parse exactly one JSON object from `reader`.
pub fn load_document_from_reader<R: Read>(reader: R) -> Result<Document, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(LoadError::NotAnObject(kind_name(&other))),
    }
}
