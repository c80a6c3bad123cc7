//! # Ironview
//!
//! An in-memory query view model for dashboard list screens.
//!
//! Every list screen in a management dashboard repeats the same shape:
//! a collection of records, a search box, a handful of filter selects,
//! a sort control, a pagination footer, and create/edit/delete forms.
//! Ironview extracts that shape once, framework-free and synchronous,
//! so a UI layer only has to bind controls to state setters and render
//! the visible slice.
//!
//! ## Architecture
//!
//! - [`storage::RecordStore`]: insertion-ordered in-memory collection
//!   for one record type, the single source of truth per screen
//! - [`core::filter::FilterState`]: active filter selections, combined
//!   with AND semantics into one predicate per record
//! - [`core::sort::SortOrder`]: the active ordering, including rank
//!   tables and pinned-first compound orders; always a stable sort
//! - [`core::query::run_query`]: the pure recomputation: filter, sort,
//!   clamp the page, slice
//! - [`core::view::ListView`]: the stateful per-screen wrapper binding
//!   the above together with a revision-keyed memo of the last slice
//! - [`core::gateway::MutationGateway`]: the only write path; validates
//!   form fields, then creates/updates/deletes through the store
//!
//! ## Quick Start
//!
//! ```rust
//! use ironview::prelude::*;
//! use serde_json::json;
//!
//! let mut view = ListView::new("member", Member::rules(), 10);
//! view.seed(Member::seed()).unwrap();
//!
//! view.set_query("aarav");
//! assert_eq!(view.visible().total_matched, 1);
//!
//! view.set_query("");
//! view.select("plan", Selection::is("Annual"));
//! view.set_sort(SortOrder::Ascending("joined".into()));
//! let slice = view.visible();
//! assert!(slice.items.iter().all(|m| m.plan == "Annual"));
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, ValidationError, ViewError, ViewResult},
        field::{FieldFormat, FieldValue},
        filter::{DateRange, FilterState, Selection},
        gateway::{FormMode, FormPhase, FormSession, MutationGateway},
        query::{PageRequest, PageSlice, run_query},
        record::{Record, RecordId},
        sort::SortOrder,
        validation::{Rule, RuleSet},
        view::ListView,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Storage ===
    pub use crate::storage::RecordStore;

    // === Config ===
    pub use crate::config::{SortConfig, SortDirection, ViewConfig};

    // === Bundled entities ===
    pub use crate::entities::{Member, Post, Ticket};

    // === External dependencies ===
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
