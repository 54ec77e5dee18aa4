// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the boundary layers.
//!
//! The matching core is total and never returns these. They come from loading
//! text sources and encoding results.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for phrasefind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the matching core.
#[derive(Debug, Error)]
pub enum Error {
    /// Text source could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding or encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text source document has no string at the requested key
    #[error("{path}: no string field '{field}' at top level")]
    MissingField { path: PathBuf, field: String },

    /// Threshold is NaN or infinite
    #[error("invalid threshold {0}: must be a finite number")]
    InvalidThreshold(f64),
}
