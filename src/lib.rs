// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore schema export: sample documents from every collection and
//! subcollection, infer field types and write the result as JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{DocumentSource, FirestoreDb};
use error::Result;
use models::ExportDocument;
use services::{write_output, SchemaExporter};

/// Export the schema reachable through `source` and write it to the configured file.
pub async fn export_to_file<S: DocumentSource>(
    source: &S,
    config: &Config,
) -> Result<ExportDocument> {
    tracing::info!("Starting export...");
    let structure = SchemaExporter::new(source, config.sampling.clone())
        .export(&config.project_id)
        .await?;
    write_output(&structure, &config.output_file)?;
    Ok(structure)
}

/// Connect to Firestore and run a full export.
pub async fn run(config: &Config) -> Result<ExportDocument> {
    tracing::info!(project = %config.project_id, "Connecting to Firestore");
    let db = FirestoreDb::connect(config).await?;
    export_to_file(&db, config).await
}
