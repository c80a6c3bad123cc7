//! The stateful per-screen view model
//!
//! A [`ListView`] is what one list screen instantiates: it owns the
//! record store, the filter/sort/pagination state, the form session,
//! and a revision-keyed memo of the last computed slice. UI controls
//! bind to the setters; rendering binds to [`ListView::visible`].
//!
//! Any filter change resets the page to 1; a narrowed result set on a
//! stale page number is never shown.

use crate::config::ViewConfig;
use crate::core::error::ViewResult;
use crate::core::filter::{FilterState, Selection};
use crate::core::gateway::{FormMode, FormPhase, FormSession, MutationGateway};
use crate::core::query::{PageRequest, PageSlice, run_query};
use crate::core::record::{Record, RecordId};
use crate::core::sort::SortOrder;
use crate::core::validation::RuleSet;
use crate::storage::RecordStore;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

#[derive(Debug, Clone)]
struct CachedSlice<T> {
    key: (u64, u64),
    slice: PageSlice<T>,
}

/// One list screen's complete state: store, query state, form session
#[derive(Debug, Clone)]
pub struct ListView<T: Record> {
    store: RecordStore<T>,
    gateway: MutationGateway<T>,
    filter: FilterState,
    sort: SortOrder,
    page: PageRequest,
    form: FormSession,
    state_rev: u64,
    cache: Option<CachedSlice<T>>,
}

impl<T: Record> ListView<T> {
    /// Create an empty view for one entity type
    pub fn new(entity: &'static str, rules: RuleSet, page_size: usize) -> Self {
        Self {
            store: RecordStore::new(entity),
            gateway: MutationGateway::new(entity, rules),
            filter: FilterState::new(),
            sort: SortOrder::Unsorted,
            page: PageRequest::new(page_size),
            form: FormSession::new(),
            state_rev: 0,
            cache: None,
        }
    }

    /// Create a view from a loaded [`ViewConfig`]
    pub fn from_config(entity: &'static str, config: &ViewConfig) -> Self {
        let mut view = Self::new(entity, config.rules(), config.page_size);
        view.sort = config.sort_order();
        view
    }

    /// Bulk-load seed records carrying their own ids
    pub fn seed(&mut self, records: impl IntoIterator<Item = T>) -> ViewResult<()> {
        self.store.seed(records)
    }

    // === Read side ===

    /// The visible slice for the current store contents and state
    ///
    /// Memoized against the store and state revisions; a slice
    /// computed before any mutation or state change is never served.
    pub fn visible(&mut self) -> &PageSlice<T> {
        let key = (self.store.revision(), self.state_rev);
        if !matches!(&self.cache, Some(cached) if cached.key == key) {
            trace!(
                entity = self.store.entity(),
                store_rev = key.0,
                state_rev = key.1,
                "recomputing visible slice"
            );
            let slice = run_query(self.store.iter(), &self.filter, &self.sort, &self.page);
            self.cache = Some(CachedSlice { key, slice });
        }
        &self.cache.as_ref().expect("cache populated above").slice
    }

    /// Count of records per distinct label of `field`, over the
    /// unfiltered store: the numbers the KPI header cards show
    pub fn facet_counts(&self, field: &str) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for record in self.store.iter() {
            if let Some(label) = record.field(field).as_text() {
                *counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortOrder {
        &self.sort
    }

    // === Filter / sort / pagination state ===

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.filter_changed();
    }

    pub fn select(&mut self, field: impl Into<String>, selection: Selection) {
        self.filter.select(field, selection);
        self.filter_changed();
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.filter.clear(field);
        self.filter_changed();
    }

    pub fn clear_filters(&mut self) {
        self.filter.reset();
        self.filter_changed();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.state_rev += 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
        self.state_rev += 1;
    }

    pub fn next_page(&mut self) {
        let total = self.visible().total_pages;
        let next = (self.page.page() + 1).min(total);
        if next != self.page.page() {
            self.page.set_page(next);
            self.state_rev += 1;
        }
    }

    pub fn prev_page(&mut self) {
        let prev = self.page.page().saturating_sub(1).max(1);
        if prev != self.page.page() {
            self.page.set_page(prev);
            self.state_rev += 1;
        }
    }

    fn filter_changed(&mut self) {
        self.page.reset();
        self.state_rev += 1;
    }

    // === Mutations (direct) ===

    pub fn submit_create(&mut self, fields: Value) -> ViewResult<T> {
        self.gateway.submit_create(&mut self.store, fields)
    }

    pub fn submit_edit(&mut self, id: &RecordId, fields: Value) -> ViewResult<T> {
        self.gateway.submit_edit(&mut self.store, id, fields)
    }

    pub fn submit_delete(&mut self, id: &RecordId) {
        self.gateway.submit_delete(&mut self.store, id);
    }

    pub fn submit_bulk_edit(
        &mut self,
        ids: &[RecordId],
        field: &str,
        value: Value,
    ) -> ViewResult<usize> {
        self.gateway
            .submit_bulk_edit(&mut self.store, ids, field, value)
    }

    // === Mutations (form-driven) ===

    pub fn form_phase(&self) -> &FormPhase {
        self.form.phase()
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit(&mut self, id: RecordId) {
        self.form.open_edit(id);
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form; on failure the form reopens with the
    /// error message for inline display
    pub fn submit_form(&mut self, fields: Value) -> ViewResult<T> {
        let mode = self.form.begin_submit()?;
        let result = match &mode {
            FormMode::Create => self.gateway.submit_create(&mut self.store, fields),
            FormMode::Edit(id) => self.gateway.submit_edit(&mut self.store, id, fields),
        };
        match &result {
            Ok(_) => self.form.finish(),
            Err(err) => self.form.fail(mode, err.to_string()),
        }
        result
    }
}
