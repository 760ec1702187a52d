// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Inferred schema structures and the merge rule.
//!
//! All maps are `BTreeMap` so the serialized output has a stable key order.

use crate::models::{FieldType, SampledDocument};
use crate::time_utils::format_export_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Inferred structure of one collection (or subcollection).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionSchema {
    /// Field name → type name, across all sampled documents
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldType>,
    /// Subcollection name → nested schema
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub subcollections: BTreeMap<String, CollectionSchema>,
}

impl CollectionSchema {
    /// Schema contributed by a single document, before its subcollections are described.
    pub fn from_document(doc: &SampledDocument) -> Self {
        Self {
            fields: doc.fields.clone(),
            subcollections: BTreeMap::new(),
        }
    }

    /// Merge `other` into `self`.
    ///
    /// Field types from `other` overwrite existing entries (last sample wins);
    /// subcollections with the same name merge recursively.
    pub fn merge(&mut self, other: CollectionSchema) {
        self.fields.extend(other.fields);

        for (name, sub) in other.subcollections {
            match self.subcollections.get_mut(&name) {
                Some(existing) => existing.merge(sub),
                None => {
                    self.subcollections.insert(name, sub);
                }
            }
        }
    }
}

/// The exported file: project, timestamp and top-level collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub project_id: String,
    /// ISO-8601 with UTC offset
    pub exported_at: String,
    pub collections: BTreeMap<String, CollectionSchema>,
}

impl ExportDocument {
    pub fn new(project_id: impl Into<String>, exported_at: DateTime<Utc>) -> Self {
        Self {
            project_id: project_id.into(),
            exported_at: format_export_timestamp(exported_at),
            collections: BTreeMap::new(),
        }
    }
}
