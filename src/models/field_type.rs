// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field type inference from Firestore values.

use gcloud_sdk::google::firestore::v1::{value::ValueType, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// Inferred type of a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Double,
    Boolean,
    Null,
    Timestamp,
    Bytes,
    Reference,
    GeoPoint,
    Array,
    Map,
    Unknown,
}

impl FieldType {
    /// Stable type name written to the output file.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "str",
            FieldType::Integer => "int",
            FieldType::Double => "float",
            FieldType::Boolean => "bool",
            FieldType::Null => "null",
            FieldType::Timestamp => "timestamp",
            FieldType::Bytes => "bytes",
            FieldType::Reference => "reference",
            FieldType::GeoPoint => "geopoint",
            FieldType::Array => "list",
            FieldType::Map => "map",
            FieldType::Unknown => "unknown",
        }
    }
}

impl From<&Value> for FieldType {
    fn from(value: &Value) -> Self {
        match &value.value_type {
            Some(ValueType::StringValue(_)) => FieldType::String,
            Some(ValueType::IntegerValue(_)) => FieldType::Integer,
            Some(ValueType::DoubleValue(_)) => FieldType::Double,
            Some(ValueType::BooleanValue(_)) => FieldType::Boolean,
            Some(ValueType::NullValue(_)) => FieldType::Null,
            Some(ValueType::TimestampValue(_)) => FieldType::Timestamp,
            Some(ValueType::BytesValue(_)) => FieldType::Bytes,
            Some(ValueType::ReferenceValue(_)) => FieldType::Reference,
            Some(ValueType::GeoPointValue(_)) => FieldType::GeoPoint,
            Some(ValueType::ArrayValue(_)) => FieldType::Array,
            Some(ValueType::MapValue(_)) => FieldType::Map,
            _ => FieldType::Unknown,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
