//! Reading and writing JSON element documents for the `apply` command.
//!
//! A document is a JSON array of DOM-shaped element objects:
//!
//! ```json
//! [
//!   { "naturalWidth": 800, "naturalHeight": 600, "classList": ["hero"] },
//!   { "naturalWidth": 250, "naturalHeight": 250 }
//! ]
//! ```
//!
//! Keys other than `naturalWidth`, `naturalHeight` and `classList` are
//! carried through untouched.

use crate::batch::{ApplyOptions, BatchReport, classify_document};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON array of elements, found {0}")]
    NotAnArray(&'static str),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read and parse a document.
pub fn read_document(path: &Path) -> Result<Value, DocumentError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Apply classes to a parsed document.
///
/// A document that isn't an array is an error here, and is left unchanged.
pub fn apply_document(
    document: &mut Value,
    options: &ApplyOptions,
) -> Result<BatchReport, DocumentError> {
    match classify_document(document, options) {
        Some(report) => Ok(report),
        None => Err(DocumentError::NotAnArray(kind(document))),
    }
}

/// Serialize a document as pretty JSON with a trailing newline.
pub fn render_document(document: &Value) -> Result<String, DocumentError> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Write a document to `output`, or to stdout when `None`.
pub fn write_document(document: &Value, output: Option<&Path>) -> Result<(), DocumentError> {
    let json = render_document(document)?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => std::io::stdout().lock().write_all(json.as_bytes())?,
    }
    Ok(())
}
