// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document sampling policy.

/// How many documents to read per collection and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingPolicy {
    /// Maximum documents per collection; 0 reads every document unordered.
    pub limit: u32,
    /// Field to order samples by, descending.
    pub order_field: String,
}

impl SamplingPolicy {
    pub const DEFAULT_LIMIT: u32 = 100;
    /// Firestore's pseudo-field for the document name.
    pub const DEFAULT_ORDER_FIELD: &'static str = "__name__";

    pub fn new(limit: u32, order_field: impl Into<String>) -> Self {
        let order_field = order_field.into();
        Self {
            limit,
            order_field: if order_field.is_empty() {
                Self::DEFAULT_ORDER_FIELD.to_string()
            } else {
                order_field
            },
        }
    }

    /// `None` when sampling is unbounded.
    pub fn max_documents(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit as usize)
    }

    /// Limit to pass to Firestore, if any.
    pub fn query_limit(&self) -> Option<u32> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Ordering field, or `None` when the whole collection is read.
    pub fn ordering(&self) -> Option<&str> {
        self.max_documents().map(|_| self.order_field.as_str())
    }

    /// Whether `count` sampled documents means the limit cut the collection short.
    pub fn reached_limit(&self, count: usize) -> bool {
        self.max_documents() == Some(count)
    }

    /// Drop anything beyond the limit.
    pub fn truncate<T>(&self, items: &mut Vec<T>) {
        if let Some(max) = self.max_documents() {
            items.truncate(max);
        }
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, Self::DEFAULT_ORDER_FIELD)
    }
}
