// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Export configuration loaded from environment variables and `.env`.
//!
//! Every setting is read once at startup. Credential problems are reported
//! here, before a Firestore client is created or any output is written.

use crate::models::SamplingPolicy;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "output/firestore_structure.json";

/// Export configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Firestore project to export
    pub project_id: String,
    /// Absolute path to the service-account key file.
    /// `None` only when talking to the emulator.
    pub credentials_path: Option<PathBuf>,
    /// Where the JSON summary is written
    pub output_file: PathBuf,
    /// Document sampling limit and ordering
    pub sampling: SamplingPolicy,
    /// Emulator address (`FIRESTORE_EMULATOR_HOST`)
    pub emulator_host: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call [`load_dotenv`] first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_dir =
            env::current_dir().map_err(|e| ConfigError::WorkingDir(e.to_string()))?;
        Self::from_lookup(|key| env::var(key).ok(), &base_dir)
    }

    /// Parse configuration from an arbitrary key lookup.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn from_lookup<F>(lookup: F, base_dir: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let project_id = non_empty("FIRESTORE_PROJECT_ID")
            .ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?;

        let emulator_host = non_empty("FIRESTORE_EMULATOR_HOST");

        let credentials_path = match non_empty("GOOGLE_APPLICATION_CREDENTIALS") {
            Some(raw) => Some(resolve_credentials_path(&raw, base_dir, lookup("HOME"))?),
            None if emulator_host.is_some() => None,
            None => return Err(ConfigError::Missing("GOOGLE_APPLICATION_CREDENTIALS")),
        };

        let output_file = non_empty("OUTPUT_FILE")
            .map(|raw| absolutize(expand_home(&raw, lookup("HOME")), base_dir))
            .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_FILE));

        let limit = match non_empty("SAMPLE_DOCUMENT_LIMIT") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "SAMPLE_DOCUMENT_LIMIT",
                value: raw,
            })?,
            None => SamplingPolicy::DEFAULT_LIMIT,
        };

        let order_field = non_empty("SAMPLE_ORDER_FIELD")
            .unwrap_or_else(|| SamplingPolicy::DEFAULT_ORDER_FIELD.to_string());

        Ok(Self {
            project_id,
            credentials_path,
            output_file,
            sampling: SamplingPolicy::new(limit, order_field),
            emulator_host,
        })
    }
}

/// Load `.env` from the working directory, if present.
///
/// Variables already set in the environment win.
pub fn load_dotenv() {
    dotenvy::from_path(".env").ok();
}

/// Resolve the credential path to an absolute path and check that it exists.
pub fn resolve_credentials_path(
    raw: &str,
    base_dir: &Path,
    home: Option<String>,
) -> Result<PathBuf, ConfigError> {
    let full_path = absolutize(expand_home(raw, home), base_dir);

    if !full_path.is_file() {
        return Err(ConfigError::CredentialsNotFound(full_path));
    }

    Ok(full_path)
}

/// Expand a leading `~` to the home directory.
fn expand_home(raw: &str, home: Option<String>) -> PathBuf {
    match (raw.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            PathBuf::from(format!("{}{}", home, rest))
        }
        _ => PathBuf::from(raw),
    }
}

fn absolutize(path: PathBuf, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("Service account file not found: {}", .0.display())]
    CredentialsNotFound(PathBuf),

    #[error("Cannot determine working directory: {0}")]
    WorkingDir(String),
}
