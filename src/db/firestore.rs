// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper.
//!
//! Provides the read-only operations the exporter needs:
//! - Listing collection ids at the root or under a document
//! - Sampling documents, optionally ordered and limited

use crate::config::{Config, ConfigError};
use crate::db::DocumentSource;
use crate::error::{ExportError, Result};
use crate::models::SampledDocument;
use firestore::errors::FirestoreError;
use futures_util::TryStreamExt;

/// gRPC codes Firestore returns when an ordered query needs an index
/// that does not exist or orders on an unusable field.
const ORDER_REJECTION_CODES: [&str; 2] = ["FailedPrecondition", "InvalidArgument"];

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Connect using the configured service-account key file.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(config: &Config) -> Result<Self> {
        install_crypto_provider()?;

        if config.emulator_host.is_some() {
            return Self::create_emulator_client(&config.project_id).await;
        }

        let key_path = config
            .credentials_path
            .clone()
            .ok_or(ConfigError::Missing("GOOGLE_APPLICATION_CREDENTIALS"))?;

        let options = firestore::FirestoreDbOptions::new(config.project_id.clone());
        let client =
            firestore::FirestoreDb::with_options_service_account_key_file(options, key_path)
                .await
                .map_err(|e| ExportError::Connection(e.to_string()))?;

        tracing::info!(project = %config.project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            ExportError::Connection(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an offline client for testing.
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// The underlying client, or an error if offline.
    pub fn client(&self) -> Result<&firestore::FirestoreDb> {
        self.client.as_ref().ok_or_else(|| {
            ExportError::Database("Database not connected (offline mode)".to_string())
        })
    }
}

impl DocumentSource for FirestoreDb {
    async fn collection_ids(&self, parent: Option<&str>) -> Result<Vec<String>> {
        let builder = self.client()?.fluent().list().collections();
        let builder = match parent {
            Some(parent) => builder.parent(parent),
            None => builder,
        };

        builder
            .stream_all_with_errors()
            .await
            .map_err(|e| ExportError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| ExportError::Database(e.to_string()))
    }

    async fn query_documents(
        &self,
        parent: Option<&str>,
        collection_id: &str,
        order_field: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<SampledDocument>> {
        let query = self.client()?.fluent().select().from(collection_id);
        let query = match parent {
            Some(parent) => query.parent(parent),
            None => query,
        };
        let query = match order_field {
            Some(field) => {
                query.order_by([(field, firestore::FirestoreQueryDirection::Descending)])
            }
            None => query,
        };
        let query = match limit {
            Some(limit) => query.limit(limit),
            None => query,
        };

        query
            .stream_query_with_errors()
            .await
            .map_err(|e| query_error(e, order_field))?
            .map_ok(|doc| SampledDocument::from(&doc))
            .try_collect()
            .await
            .map_err(|e| query_error(e, order_field))
    }
}

/// Install rustls' `ring` provider for the gRPC TLS channel.
///
/// A provider already installed by the host process is kept.
pub fn install_crypto_provider() -> Result<()> {
    if rustls::crypto::CryptoProvider::get_default().is_some() {
        return Ok(());
    }

    match rustls::crypto::ring::default_provider().install_default() {
        Ok(()) => Ok(()),
        // Lost a race with another installer; a provider is in place either way.
        Err(_) if rustls::crypto::CryptoProvider::get_default().is_some() => Ok(()),
        Err(_) => Err(ExportError::Connection(
            "Failed to install rustls crypto provider".to_string(),
        )),
    }
}

/// Map a query failure, separating rejected orderings from everything else.
fn query_error(err: FirestoreError, order_field: Option<&str>) -> ExportError {
    match (&err, order_field) {
        (FirestoreError::DatabaseError(db_err), Some(field))
            if ORDER_REJECTION_CODES.contains(&db_err.public.code.as_str()) =>
        {
            ExportError::OrderedQuery {
                field: field.to_string(),
                details: db_err.details.clone(),
            }
        }
        _ => ExportError::Database(err.to_string()),
    }
}
