// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use firestore_schema_export::db::DocumentSource;
use firestore_schema_export::error::{ExportError, Result};
use firestore_schema_export::models::SampledDocument;
use std::cell::RefCell;
use std::collections::HashMap;

#[allow(dead_code)]
pub const DOCUMENTS_ROOT: &str = "projects/test-project/databases/(default)/documents";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Full resource name for a document path like `users/alice`.
#[allow(dead_code)]
pub fn doc_name(path: &str) -> String {
    format!("{}/{}", DOCUMENTS_ROOT, path)
}

/// One recorded `query_documents` call.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCall {
    pub parent: Option<String>,
    pub collection_id: String,
    pub order_field: Option<String>,
    pub limit: Option<u32>,
}

/// In-memory document source.
///
/// Documents come back in insertion order; ordering on `__name__` sorts by
/// resource name, descending.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemorySource {
    collections: HashMap<Option<String>, Vec<String>>,
    documents: HashMap<(Option<String>, String), Vec<SampledDocument>>,
    /// Reject every ordered query like a missing index would.
    pub reject_ordering: bool,
    /// Return every document even when a limit is requested.
    pub ignore_limit: bool,
    calls: RefCell<Vec<QueryCall>>,
}

#[allow(dead_code)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection under `parent` (a document name, or `None` for the root).
    pub fn with_collection(
        mut self,
        parent: Option<&str>,
        collection_id: &str,
        documents: Vec<SampledDocument>,
    ) -> Self {
        let parent = parent.map(str::to_string);
        let ids = self.collections.entry(parent.clone()).or_default();
        if !ids.iter().any(|id| id == collection_id) {
            ids.push(collection_id.to_string());
        }
        self.documents
            .entry((parent, collection_id.to_string()))
            .or_default()
            .extend(documents);
        self
    }

    pub fn calls(&self) -> Vec<QueryCall> {
        self.calls.borrow().clone()
    }
}

impl DocumentSource for MemorySource {
    async fn collection_ids(&self, parent: Option<&str>) -> Result<Vec<String>> {
        Ok(self
            .collections
            .get(&parent.map(str::to_string))
            .cloned()
            .unwrap_or_default())
    }

    async fn query_documents(
        &self,
        parent: Option<&str>,
        collection_id: &str,
        order_field: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<SampledDocument>> {
        self.calls.borrow_mut().push(QueryCall {
            parent: parent.map(str::to_string),
            collection_id: collection_id.to_string(),
            order_field: order_field.map(str::to_string),
            limit,
        });

        if let (true, Some(field)) = (self.reject_ordering, order_field) {
            return Err(ExportError::OrderedQuery {
                field: field.to_string(),
                details: "The query requires an index".to_string(),
            });
        }

        let mut docs = self
            .documents
            .get(&(parent.map(str::to_string), collection_id.to_string()))
            .cloned()
            .unwrap_or_default();

        if order_field == Some("__name__") {
            docs.sort_by(|a, b| b.name.cmp(&a.name));
        }
        if let (false, Some(limit)) = (self.ignore_limit, limit) {
            docs.truncate(limit as usize);
        }

        Ok(docs)
    }
}
