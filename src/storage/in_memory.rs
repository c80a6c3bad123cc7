//! Insertion-ordered in-memory record store
//!
//! The authoritative collection for one entity type of one view. The
//! store owns no business rules; it supplies the create/update/delete
//! /list primitives the mutation gateway drives. Everything is
//! synchronous: the view model's contract is a single-threaded UI
//! event loop, so a mutation always completes before the next read.

use crate::core::error::{ValidationError, ViewError, ViewResult};
use crate::core::record::{Record, RecordId};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

/// In-memory record collection preserving insertion order
///
/// Every mutation bumps a revision counter, which is what invalidates
/// any memoized visible slice computed from an earlier state.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    entity: &'static str,
    records: IndexMap<RecordId, T>,
    revision: u64,
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store for one entity type ("member", "ticket")
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            records: IndexMap::new(),
            revision: 0,
        }
    }

    /// Entity type name this store holds
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Bulk-load records that already carry ids (mock/seed rows)
    ///
    /// Rejects the whole batch on the first duplicate id; ids must be
    /// unique for the lifetime of the store.
    pub fn seed(&mut self, records: impl IntoIterator<Item = T>) -> ViewResult<()> {
        for record in records {
            let id = record.record_id().clone();
            if self.records.contains_key(&id) {
                return Err(ViewError::DuplicateId {
                    entity: self.entity,
                    id,
                });
            }
            self.records.insert(id, record);
        }
        self.revision += 1;
        Ok(())
    }

    /// All current records in insertion order
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Iterate records in insertion order without cloning
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic counter bumped by every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Assign a fresh id, build the record from the submitted fields,
    /// and append it
    ///
    /// The fresh id is injected under the `"id"` key before the field
    /// map is deserialized into `T`; fields that fail to deserialize
    /// surface as a [`ValidationError`].
    pub fn create(&mut self, mut fields: Map<String, Value>) -> ViewResult<T> {
        let mut id = RecordId::fresh();
        while self.records.contains_key(&id) {
            id = RecordId::fresh();
        }
        fields.insert("id".to_string(), Value::String(id.to_string()));
        let record = self.deserialize(fields)?;
        self.records.insert(id.clone(), record.clone());
        self.revision += 1;
        debug!(entity = self.entity, %id, "record created");
        Ok(record)
    }

    /// Replace every field of the record matching `id` except the id
    /// itself
    ///
    /// The stored record keeps its position in insertion order.
    pub fn update(&mut self, id: &RecordId, mut fields: Map<String, Value>) -> ViewResult<T> {
        if !self.records.contains_key(id) {
            return Err(ViewError::NotFound {
                entity: self.entity,
                id: id.clone(),
            });
        }
        fields.insert("id".to_string(), Value::String(id.to_string()));
        let record = self.deserialize(fields)?;
        self.records.insert(id.clone(), record.clone());
        self.revision += 1;
        debug!(entity = self.entity, %id, "record updated");
        Ok(record)
    }

    /// Delete the record matching `id`; a no-op when absent
    pub fn remove(&mut self, id: &RecordId) {
        if self.records.shift_remove(id).is_some() {
            self.revision += 1;
            debug!(entity = self.entity, %id, "record removed");
        }
    }

    fn deserialize(&self, fields: Map<String, Value>) -> ViewResult<T> {
        serde_json::from_value(Value::Object(fields)).map_err(|err| {
            ValidationError::Malformed {
                message: err.to_string(),
            }
            .into()
        })
    }
}
