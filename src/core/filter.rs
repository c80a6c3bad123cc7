//! Filter state and predicate construction
//!
//! A [`FilterState`] holds the active selection for every filter
//! dimension of a list screen and turns them into one predicate
//! applied per record. All active dimensions combine with AND: a
//! record is visible only when it satisfies every one of them.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Inclusive date range, open on either end
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Everything on or after `from`
    pub fn since(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// The active selection for one filter dimension
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The "all" sentinel: matches everything
    Any,
    /// Exact label match against a text field
    Is(String),
    /// Membership in a tag-set field
    HasTag(String),
    /// Field date falls within the range
    Within(DateRange),
}

impl Selection {
    /// Convenience constructor for exact label selections
    pub fn is(label: impl Into<String>) -> Self {
        Selection::Is(label.into())
    }

    /// Convenience constructor for tag selections
    pub fn has_tag(tag: impl Into<String>) -> Self {
        Selection::HasTag(tag.into())
    }

    fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Selection::Any => true,
            Selection::Is(label) => value.label_eq(label),
            Selection::HasTag(tag) => value.has_tag(tag),
            Selection::Within(range) => value.as_date().is_some_and(|d| range.contains(d)),
        }
    }
}

/// The current selection per filter dimension of one list screen
///
/// Defaults to no restriction: empty query and no dimension
/// selections. Dimension order is preserved for deterministic
/// inspection, though it does not affect matching.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    query: String,
    selections: IndexMap<String, Selection>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    ///
    /// The query is matched as a case-insensitive substring of the
    /// record's search haystack. The empty query matches everything;
    /// a whitespace-only query is kept literal, not trimmed to empty.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the selection for a dimension; `Selection::Any` clears it
    pub fn select(&mut self, field: impl Into<String>, selection: Selection) {
        let field = field.into();
        if selection == Selection::Any {
            self.selections.shift_remove(&field);
        } else {
            self.selections.insert(field, selection);
        }
    }

    /// Reset one dimension to the "all" sentinel
    pub fn clear(&mut self, field: &str) {
        self.selections.shift_remove(field);
    }

    /// Reset every dimension and the query
    pub fn reset(&mut self) {
        self.query.clear();
        self.selections.clear();
    }

    /// Whether any dimension or a non-empty query is active
    pub fn is_restrictive(&self) -> bool {
        !self.query.is_empty() || !self.selections.is_empty()
    }

    /// Apply the combined predicate to one record
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            if !record.search_haystack().contains(&needle) {
                return false;
            }
        }
        self.selections
            .iter()
            .all(|(field, selection)| selection.matches(&record.field(field)))
    }
}
