//! Core module containing the query view model building blocks

pub mod error;
pub mod field;
pub mod filter;
pub mod gateway;
pub mod query;
pub mod record;
pub mod sort;
pub mod validation;
pub mod view;

pub use error::{ConfigError, ValidationError, ViewError, ViewResult};
pub use field::{FieldFormat, FieldValue};
pub use filter::{DateRange, FilterState, Selection};
pub use gateway::{FormMode, FormPhase, FormSession, MutationGateway};
pub use query::{PageRequest, PageSlice, run_query};
pub use record::{Record, RecordId};
pub use sort::SortOrder;
pub use validation::{Rule, RuleSet};
pub use view::ListView;
