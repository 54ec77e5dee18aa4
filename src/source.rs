// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the text to search.
//!
//! Scanned documents usually arrive as JSON with the OCR output under a
//! `"text"` key, so that is the default. Plain UTF-8 files are read as-is.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key read from JSON documents unless told otherwise.
pub const DEFAULT_TEXT_FIELD: &str = "text";

/// Where in a file the searchable text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Top-level string field of a JSON object.
    JsonField(String),
    /// The whole file.
    Plain,
}

impl Default for TextSource {
    fn default() -> Self {
        TextSource::JsonField(DEFAULT_TEXT_FIELD.to_string())
    }
}

/// Read the searchable text from `path`.
pub fn load_text(path: &Path, source: &TextSource) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match source {
        TextSource::Plain => raw,
        TextSource::JsonField(field) => {
            let document: Value = serde_json::from_str(&raw)?;
            match document.get(field) {
                Some(Value::String(text)) => text.clone(),
                _ => {
                    return Err(Error::MissingField {
                        path: path.to_path_buf(),
                        field: field.clone(),
                    })
                }
            }
        }
    };

    debug!(path = %path.display(), chars = text.chars().count(), "loaded text");
    Ok(text)
}
