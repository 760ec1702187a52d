// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Write the export document to disk as pretty-printed JSON.

use crate::error::{ExportError, Result};
use crate::models::ExportDocument;
use std::fs;
use std::path::Path;

/// Render the document: two-space indent, UTF-8 kept as is, trailing newline.
pub fn render(document: &ExportDocument) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Write the document to `destination`, creating parent directories and
/// overwriting any previous export.
pub fn write_output(document: &ExportDocument, destination: &Path) -> Result<()> {
    let json = render(document)?;

    let io_err = |source| ExportError::Io {
        path: destination.display().to_string(),
        source,
    };

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(destination, json).map_err(io_err)?;

    tracing::info!(path = %destination.display(), "Wrote output");
    Ok(())
}
