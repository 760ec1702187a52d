// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Export error types and their exit-status mapping.

use crate::config::ConfigError;

/// Any failure that aborts an export run.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to Firestore: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Firestore refused an ordered sample (missing index or unorderable field).
    #[error("Ordered query on '{field}' rejected: {details}")]
    OrderedQuery { field: String, details: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Exit status for setup failures (bad config, credentials, connection).
    pub const EXIT_SETUP: u8 = 2;
    /// Exit status for failures once the export has started.
    pub const EXIT_RUNTIME: u8 = 1;

    /// True when the run failed before any Firestore data was read.
    pub fn is_setup_error(&self) -> bool {
        matches!(self, ExportError::Config(_) | ExportError::Connection(_))
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_setup_error() {
            Self::EXIT_SETUP
        } else {
            Self::EXIT_RUNTIME
        }
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
