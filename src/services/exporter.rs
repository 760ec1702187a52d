// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection walker and schema inference.
//!
//! Walks every top-level collection, samples its documents, records the type
//! of each field and recurses into the subcollections of every sampled
//! document with the same sampling policy.

use crate::db::DocumentSource;
use crate::error::{ExportError, Result};
use crate::models::{CollectionSchema, ExportDocument, SampledDocument, SamplingPolicy};
use chrono::{DateTime, Utc};
use futures_util::future::{FutureExt, LocalBoxFuture};

/// Builds an [`ExportDocument`] from a [`DocumentSource`].
pub struct SchemaExporter<'a, S> {
    source: &'a S,
    policy: SamplingPolicy,
}

impl<'a, S: DocumentSource> SchemaExporter<'a, S> {
    pub fn new(source: &'a S, policy: SamplingPolicy) -> Self {
        Self { source, policy }
    }

    /// Describe every top-level collection, stamped with the current time.
    pub async fn export(&self, project_id: &str) -> Result<ExportDocument> {
        self.export_at(project_id, Utc::now()).await
    }

    /// Describe every top-level collection with an explicit export time.
    pub async fn export_at(
        &self,
        project_id: &str,
        exported_at: DateTime<Utc>,
    ) -> Result<ExportDocument> {
        let mut structure = ExportDocument::new(project_id, exported_at);

        for collection_id in self.source.collection_ids(None).await? {
            tracing::info!(collection = %collection_id, "Processing collection");
            let schema = self.describe_collection(None, &collection_id).await?;
            structure.collections.insert(collection_id, schema);
        }

        Ok(structure)
    }

    /// Aggregate schema of one collection across its sampled documents.
    pub fn describe_collection<'b>(
        &'b self,
        parent: Option<&'b str>,
        collection_id: &'b str,
    ) -> LocalBoxFuture<'b, Result<CollectionSchema>> {
        async move {
            let documents = self.sample(parent, collection_id).await?;
            let count = documents.len();

            let mut aggregate = CollectionSchema::default();
            for doc in &documents {
                let doc_schema = self.describe_document(doc).await?;
                aggregate.merge(doc_schema);
            }

            tracing::info!(
                collection = %collection_id,
                count,
                "Described documents in collection"
            );
            if self.policy.reached_limit(count) {
                tracing::info!(
                    collection = %collection_id,
                    limit = self.policy.limit,
                    "Reached sample limit; remaining documents are skipped"
                );
            }

            Ok(aggregate)
        }
        .boxed_local()
    }

    /// Field types of one document plus the structure of its subcollections.
    pub async fn describe_document(&self, doc: &SampledDocument) -> Result<CollectionSchema> {
        let mut structure = CollectionSchema::from_document(doc);

        for sub_id in self.source.collection_ids(Some(&doc.name)).await? {
            tracing::debug!(
                document = %doc.id(),
                subcollection = %sub_id,
                "Descending into subcollection"
            );
            let sub_schema = self.describe_collection(Some(&doc.name), &sub_id).await?;
            structure.subcollections.insert(sub_id, sub_schema);
        }

        Ok(structure)
    }

    /// Fetch up to `limit` documents, newest first by the ordering field.
    ///
    /// Falls back to an unordered read when Firestore rejects the ordering.
    async fn sample(
        &self,
        parent: Option<&str>,
        collection_id: &str,
    ) -> Result<Vec<SampledDocument>> {
        let limit = self.policy.query_limit();

        let ordered = self
            .source
            .query_documents(parent, collection_id, self.policy.ordering(), limit)
            .await;

        let mut documents = match ordered {
            Ok(documents) => documents,
            Err(ExportError::OrderedQuery { field, details }) => {
                tracing::warn!(
                    collection = %collection_id,
                    field = %field,
                    error = %details,
                    "Ordered sampling rejected; falling back to unordered read"
                );
                self.source
                    .query_documents(parent, collection_id, None, limit)
                    .await?
            }
            Err(e) => return Err(e),
        };

        self.policy.truncate(&mut documents);
        Ok(documents)
    }
}
