// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore schema export
//!
//! Samples documents from every collection of a Firestore project and writes
//! the inferred field types as JSON. Configured entirely through the
//! environment (and `.env`).

use firestore_schema_export::config::{self, Config};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry LOG_LEVEL / LOG_FORMAT, so load it before logging starts
    config::load_dotenv();
    init_logging();

    let result = match Config::from_env() {
        Ok(config) => firestore_schema_export::run(&config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(structure) => {
            tracing::info!(
                collections = structure.collections.len(),
                "Export complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, setup = e.is_setup_error(), "Export failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize logging: compact text by default, flattened JSON with LOG_FORMAT=json.
fn init_logging() {
    let level = std::env::var("LOG_LEVEL")
        .map(|v| v.to_lowercase())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("firestore_schema_export={level},{level}"))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact(),
            )
            .init();
    }
}
