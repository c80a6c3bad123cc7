//! Record traits defining what a list screen can query

use crate::core::field::FieldValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a record within its collection
///
/// Seeded mock data keeps whatever ids it shipped with ("m1",
/// "GB-1042", 1, ...); records created at runtime get a fresh UUID so
/// rapid successive creates can never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, collision-free id
    pub fn fresh() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value.to_string())
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        RecordId(value.to_string())
    }
}

/// Base trait for all records managed by a [`RecordStore`]
///
/// A record is a plain domain object (member, ticket, post, ...) that
/// exposes its filterable and sortable fields by name through
/// [`FieldValue`]. Unknown fields must come back as
/// [`FieldValue::Null`], which predicates treat as "no match" and
/// comparators order first.
///
/// Records serialize with their id under the `"id"` key; the store
/// relies on that when it injects a fresh id into submitted form
/// fields.
///
/// The [`impl_record!`](crate::impl_record) macro generates the three
/// required items from a field list.
///
/// [`RecordStore`]: crate::storage::RecordStore
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Unique identifier of this record
    fn record_id(&self) -> &RecordId;

    /// Fields concatenated into the free-text search haystack
    fn searchable_fields() -> &'static [&'static str];

    /// Value of a field by name, `Null` when absent
    fn field(&self, name: &str) -> FieldValue;

    /// Lowercased concatenation of the searchable fields
    ///
    /// Override to widen the haystack, e.g. tickets also match on
    /// their display id.
    fn search_haystack(&self) -> String {
        let mut parts = Vec::new();
        for field in Self::searchable_fields() {
            if let Some(text) = self.field(field).search_text() {
                parts.push(text);
            }
        }
        parts.join(" ").to_lowercase()
    }
}
