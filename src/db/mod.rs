// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore).

pub mod firestore;
pub mod source;

pub use firestore::FirestoreDb;
pub use source::DocumentSource;
