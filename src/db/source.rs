// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only access to collections and documents.

use crate::error::Result;
use crate::models::SampledDocument;

/// Where the exporter reads collections and documents from.
///
/// `parent` is a document resource name; `None` means the database root.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Ids of the collections directly under `parent`.
    async fn collection_ids(&self, parent: Option<&str>) -> Result<Vec<String>>;

    /// Documents of `collection_id` under `parent`.
    ///
    /// With `order_field` set, documents come back in descending order of
    /// that field. A rejected ordering is reported as
    /// [`ExportError::OrderedQuery`](crate::error::ExportError::OrderedQuery).
    async fn query_documents(
        &self,
        parent: Option<&str>,
        collection_id: &str,
        order_field: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<SampledDocument>>;
}
