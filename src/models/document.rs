// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A sampled document reduced to what schema inference needs.

use crate::models::FieldType;
use gcloud_sdk::google::firestore::v1::Document;
use std::collections::BTreeMap;

/// One sampled document: where it lives and the type of each field.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledDocument {
    /// Full resource name
    /// (`projects/{p}/databases/{d}/documents/{collection}/{id}/...`).
    /// Used as the parent path for its subcollections.
    pub name: String,
    /// Field name → inferred type
    pub fields: BTreeMap<String, FieldType>,
}

impl SampledDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style helper used mostly by tests.
    pub fn with_field(mut self, field: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(field.into(), field_type);
        self
    }

    /// Last path segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl From<&Document> for SampledDocument {
    fn from(doc: &Document) -> Self {
        Self {
            name: doc.name.clone(),
            fields: doc
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), FieldType::from(value)))
                .collect(),
        }
    }
}
