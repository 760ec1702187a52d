// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the schema export.

pub mod document;
pub mod field_type;
pub mod sampling;
pub mod schema;

pub use document::SampledDocument;
pub use field_type::FieldType;
pub use sampling::SamplingPolicy;
pub use schema::{CollectionSchema, ExportDocument};
