//! The mutation gateway: the only write path into a record store
//!
//! Create/edit/delete submissions from the UI go through here so the
//! query view model never observes a half-updated state. Validation
//! runs first; only a fully validated field map reaches the store.
//! Everything is synchronous, so no incidental asynchrony can
//! interleave a stale read with a pending write.

use crate::core::error::{ValidationError, ViewError, ViewResult};
use crate::core::record::{Record, RecordId};
use crate::core::validation::RuleSet;
use crate::storage::RecordStore;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use tracing::debug;

/// Validates and applies form submissions for one record type
#[derive(Debug, Clone)]
pub struct MutationGateway<T: Record> {
    entity: &'static str,
    rules: RuleSet,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> MutationGateway<T> {
    pub fn new(entity: &'static str, rules: RuleSet) -> Self {
        Self {
            entity,
            rules,
            _marker: PhantomData,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate the submitted fields and create a new record
    pub fn submit_create(&self, store: &mut RecordStore<T>, fields: Value) -> ViewResult<T> {
        let map = Self::as_object(fields)?;
        self.rules.check(&map)?;
        store.create(map)
    }

    /// Validate the submitted fields and replace an existing record
    pub fn submit_edit(
        &self,
        store: &mut RecordStore<T>,
        id: &RecordId,
        fields: Value,
    ) -> ViewResult<T> {
        let map = Self::as_object(fields)?;
        self.rules.check(&map)?;
        store.update(id, map)
    }

    /// Delete a record; confirmation, if any, is a UI concern
    pub fn submit_delete(&self, store: &mut RecordStore<T>, id: &RecordId) {
        store.remove(id);
    }

    /// Set one field on every record in `ids`, skipping missing ids
    ///
    /// Returns how many records were touched. Mirrors the triage
    /// screens' bulk status/assignee updates; per-form validation
    /// does not apply since only a single field changes.
    pub fn submit_bulk_edit(
        &self,
        store: &mut RecordStore<T>,
        ids: &[RecordId],
        field: &str,
        value: Value,
    ) -> ViewResult<usize> {
        let mut touched = 0;
        for id in ids {
            let Some(existing) = store.get(id) else {
                continue;
            };
            let mut map = match serde_json::to_value(existing) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(ValidationError::Malformed {
                        message: format!("{} does not serialize to an object", self.entity),
                    }
                    .into());
                }
                Err(err) => {
                    return Err(ValidationError::Malformed {
                        message: err.to_string(),
                    }
                    .into());
                }
            };
            map.insert(field.to_string(), value.clone());
            store.update(id, map)?;
            touched += 1;
        }
        debug!(entity = self.entity, field, touched, "bulk edit applied");
        Ok(touched)
    }

    fn as_object(fields: Value) -> Result<Map<String, Value>, ValidationError> {
        match fields {
            Value::Object(map) => Ok(map),
            _ => Err(ValidationError::NotAnObject),
        }
    }
}

/// Whether the open form creates a record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Lifecycle of a view's create/edit form
///
/// `Idle → Editing → Submitting → Idle` on success, or back to
/// `Editing` with the error message on failure so the form stays open
/// for correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing {
        mode: FormMode,
        error: Option<String>,
    },
    Submitting {
        mode: FormMode,
    },
}

/// Tracks the form lifecycle for one view
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    phase: FormPhase,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Idle
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Open the form in create mode, discarding any previous state
    pub fn open_create(&mut self) {
        self.phase = FormPhase::Editing {
            mode: FormMode::Create,
            error: None,
        };
    }

    /// Open the form to edit an existing record
    pub fn open_edit(&mut self, id: RecordId) {
        self.phase = FormPhase::Editing {
            mode: FormMode::Edit(id),
            error: None,
        };
    }

    /// Close the form without submitting
    pub fn cancel(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Move `Editing → Submitting`, yielding the mode to dispatch on
    pub fn begin_submit(&mut self) -> ViewResult<FormMode> {
        match &self.phase {
            FormPhase::Editing { mode, .. } => {
                let mode = mode.clone();
                self.phase = FormPhase::Submitting { mode: mode.clone() };
                Ok(mode)
            }
            _ => Err(ViewError::FormClosed),
        }
    }

    /// Successful submission: back to idle
    pub fn finish(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Failed submission: reopen with the error message shown inline
    pub fn fail(&mut self, mode: FormMode, message: String) {
        self.phase = FormPhase::Editing {
            mode,
            error: Some(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    struct Coach {
        id: RecordId,
        name: String,
        specialty: String,
    }

    impl Record for Coach {
        fn record_id(&self) -> &RecordId {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name", "specialty"]
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => FieldValue::from(self.name.clone()),
                "specialty" => FieldValue::from(self.specialty.clone()),
                _ => FieldValue::Null,
            }
        }
    }

    fn gateway() -> MutationGateway<Coach> {
        MutationGateway::new("coach", RuleSet::new().required("name"))
    }

    #[test]
    fn test_create_validates_first() {
        let mut store = RecordStore::new("coach");
        let gw = gateway();

        let err = gw
            .submit_create(&mut store, json!({"specialty": "strength"}))
            .expect_err("missing name");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(store.is_empty());

        let coach = gw
            .submit_create(&mut store, json!({"name": "Maya", "specialty": "strength"}))
            .expect("create");
        assert_eq!(coach.name, "Maya");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_non_object() {
        let mut store = RecordStore::new("coach");
        let err = gateway()
            .submit_create(&mut store, json!(["not", "an", "object"]))
            .expect_err("not an object");
        assert!(matches!(
            err,
            ViewError::Validation(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn test_edit_replaces_all_fields() {
        let mut store = RecordStore::new("coach");
        let gw = gateway();
        let coach = gw
            .submit_create(&mut store, json!({"name": "Maya", "specialty": "strength"}))
            .expect("create");

        let updated = gw
            .submit_edit(
                &mut store,
                &coach.id,
                json!({"name": "Maya", "specialty": "mobility"}),
            )
            .expect("edit");
        assert_eq!(updated.id, coach.id);
        assert_eq!(updated.specialty, "mobility");
    }

    #[test]
    fn test_edit_missing_record() {
        let mut store: RecordStore<Coach> = RecordStore::new("coach");
        let err = gateway()
            .submit_edit(&mut store, &RecordId::from("ghost"), json!({"name": "X"}))
            .expect_err("not found");
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_delete_then_absent() {
        let mut store = RecordStore::new("coach");
        let gw = gateway();
        let coach = gw
            .submit_create(&mut store, json!({"name": "Maya", "specialty": "strength"}))
            .expect("create");
        gw.submit_delete(&mut store, &coach.id);
        assert!(store.get(&coach.id).is_none());
        // Deleting again is a no-op, not an error
        gw.submit_delete(&mut store, &coach.id);
    }

    #[test]
    fn test_bulk_edit_skips_missing_ids() {
        let mut store = RecordStore::new("coach");
        let gw = gateway();
        let a = gw
            .submit_create(&mut store, json!({"name": "Maya", "specialty": "strength"}))
            .expect("create");
        let b = gw
            .submit_create(&mut store, json!({"name": "Vikram", "specialty": "hiit"}))
            .expect("create");

        let touched = gw
            .submit_bulk_edit(
                &mut store,
                &[a.id.clone(), RecordId::from("ghost"), b.id.clone()],
                "specialty",
                json!("recovery"),
            )
            .expect("bulk edit");
        assert_eq!(touched, 2);
        assert!(store.iter().all(|c| c.specialty == "recovery"));
    }

    #[test]
    fn test_form_session_lifecycle() {
        let mut form = FormSession::new();
        assert_eq!(*form.phase(), FormPhase::Idle);

        form.open_create();
        let mode = form.begin_submit().expect("editing");
        assert_eq!(mode, FormMode::Create);
        assert!(matches!(form.phase(), FormPhase::Submitting { .. }));

        form.finish();
        assert_eq!(*form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_form_session_failure_reopens_with_message() {
        let mut form = FormSession::new();
        form.open_edit(RecordId::from("m1"));
        let mode = form.begin_submit().expect("editing");
        form.fail(mode, "'name' is required".to_string());
        match form.phase() {
            FormPhase::Editing { mode, error } => {
                assert_eq!(*mode, FormMode::Edit(RecordId::from("m1")));
                assert_eq!(error.as_deref(), Some("'name' is required"));
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn test_submit_without_open_form() {
        let mut form = FormSession::new();
        let err = form.begin_submit().expect_err("idle");
        assert!(matches!(err, ViewError::FormClosed));
    }
}
