// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - export logic layer.

pub mod exporter;
pub mod writer;

pub use exporter::SchemaExporter;
pub use writer::write_output;
