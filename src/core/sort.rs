//! Sort orders and comparator construction
//!
//! A [`SortOrder`] describes the active ordering of a list screen and
//! compares records through their [`FieldValue`]s. Applying an order
//! never touches the record store; it reorders the filtered copy with
//! a stable sort, so records that compare equal keep their store
//! order across recomputations.

use crate::core::record::Record;
use std::cmp::Ordering;

/// The active ordering for a list screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SortOrder {
    /// Keep store (insertion) order
    #[default]
    Unsorted,

    /// Ascending by field value
    Ascending(String),

    /// Descending by field value
    Descending(String),

    /// Explicit rank table: a value's position in `table` is its
    /// rank, earlier is first; values missing from the table sort
    /// last. Covers ticket priority (Urgent, High, Medium, Low).
    Ranked { field: String, table: Vec<String> },

    /// Records with the boolean `flag` set come first, then the
    /// inner order decides. Covers the blog's featured-first feed.
    Pinned { flag: String, then: Box<SortOrder> },
}

impl SortOrder {
    /// Compare two records under this order
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortOrder::Unsorted => Ordering::Equal,
            SortOrder::Ascending(field) => a.field(field).compare(&b.field(field)),
            SortOrder::Descending(field) => b.field(field).compare(&a.field(field)),
            SortOrder::Ranked { field, table } => {
                let rank = |record: &T| {
                    record
                        .field(field)
                        .as_text()
                        .and_then(|label| table.iter().position(|entry| entry == label))
                        .unwrap_or(table.len())
                };
                rank(a).cmp(&rank(b))
            }
            SortOrder::Pinned { flag, then } => {
                let pinned = |record: &T| record.field(flag).as_flag().unwrap_or(false);
                match (pinned(a), pinned(b)) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => then.compare(a, b),
                }
            }
        }
    }

    /// Stable-sort a filtered copy in place
    pub fn apply<T: Record>(&self, items: &mut [T]) {
        if *self != SortOrder::Unsorted {
            items.sort_by(|a, b| self.compare(a, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::RecordId;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Row {
        id: RecordId,
        priority: String,
        score: i64,
        featured: bool,
    }

    impl Record for Row {
        fn record_id(&self) -> &RecordId {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &[]
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "priority" => FieldValue::from(self.priority.clone()),
                "score" => FieldValue::from(self.score),
                "featured" => FieldValue::from(self.featured),
                _ => FieldValue::Null,
            }
        }
    }

    fn row(id: u64, priority: &str, score: i64, featured: bool) -> Row {
        Row {
            id: RecordId::from(id),
            priority: priority.to_string(),
            score,
            featured,
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let mut rows = vec![row(1, "Low", 3, false), row(2, "High", 1, false)];
        SortOrder::Unsorted.apply(&mut rows);
        assert_eq!(ids(&rows), ["1", "2"]);
    }

    #[test]
    fn test_ascending_descending() {
        let mut rows = vec![
            row(1, "Low", 3, false),
            row(2, "High", 1, false),
            row(3, "Medium", 2, false),
        ];
        SortOrder::Ascending("score".to_string()).apply(&mut rows);
        assert_eq!(ids(&rows), ["2", "3", "1"]);
        SortOrder::Descending("score".to_string()).apply(&mut rows);
        assert_eq!(ids(&rows), ["1", "3", "2"]);
    }

    #[test]
    fn test_ranked_table() {
        let order = SortOrder::Ranked {
            field: "priority".to_string(),
            table: vec![
                "Urgent".to_string(),
                "High".to_string(),
                "Medium".to_string(),
                "Low".to_string(),
            ],
        };
        let mut rows = vec![
            row(1, "Low", 0, false),
            row(2, "Urgent", 0, false),
            row(3, "Medium", 0, false),
        ];
        order.apply(&mut rows);
        assert_eq!(ids(&rows), ["2", "3", "1"]);
    }

    #[test]
    fn test_ranked_unknown_values_last() {
        let order = SortOrder::Ranked {
            field: "priority".to_string(),
            table: vec!["Urgent".to_string(), "High".to_string()],
        };
        let mut rows = vec![row(1, "Whenever", 0, false), row(2, "High", 0, false)];
        order.apply(&mut rows);
        assert_eq!(ids(&rows), ["2", "1"]);
    }

    #[test]
    fn test_pinned_then_inner() {
        let order = SortOrder::Pinned {
            flag: "featured".to_string(),
            then: Box::new(SortOrder::Descending("score".to_string())),
        };
        let mut rows = vec![
            row(1, "", 5, false),
            row(2, "", 1, true),
            row(3, "", 9, false),
            row(4, "", 3, true),
        ];
        order.apply(&mut rows);
        assert_eq!(ids(&rows), ["4", "2", "3", "1"]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let mut rows = vec![
            row(1, "High", 7, false),
            row(2, "High", 7, false),
            row(3, "High", 7, false),
        ];
        SortOrder::Descending("score".to_string()).apply(&mut rows);
        assert_eq!(ids(&rows), ["1", "2", "3"]);
    }
}
