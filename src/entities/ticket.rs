//! Support ticket records

use crate::core::field::FieldValue;
use crate::core::record::{Record, RecordId};
use crate::core::sort::SortOrder;
use crate::core::validation::RuleSet;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority labels in triage order, most urgent first
pub const PRIORITY_RANKS: [&str; 4] = ["Urgent", "High", "Medium", "Low"];

/// A support ticket as the triage screen lists them
///
/// Fields omitted from a submitted form default to their empty value
/// rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: RecordId,
    pub subject: String,
    pub member: String,
    pub club: String,
    /// One of [`PRIORITY_RANKS`]
    pub priority: String,
    /// Open, Pending, or Resolved
    pub status: String,
    pub category: String,
    pub assignee: String,
    pub replies: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

// Implemented by hand rather than with impl_record! because the
// triage search also matches the display id ("GB-1042").
impl Record for Ticket {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["subject", "member", "club", "assignee"]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "subject" => FieldValue::from(self.subject.clone()),
            "member" => FieldValue::from(self.member.clone()),
            "club" => FieldValue::from(self.club.clone()),
            "priority" => FieldValue::from(self.priority.clone()),
            "status" => FieldValue::from(self.status.clone()),
            "category" => FieldValue::from(self.category.clone()),
            "assignee" => FieldValue::from(self.assignee.clone()),
            "replies" => FieldValue::from(self.replies),
            "created" => FieldValue::from(self.created),
            "updated" => FieldValue::from(self.updated),
            _ => FieldValue::Null,
        }
    }

    fn search_haystack(&self) -> String {
        let mut parts = vec![self.id.as_str().to_string()];
        for field in Self::searchable_fields() {
            if let Some(text) = self.field(field).search_text() {
                parts.push(text);
            }
        }
        parts.join(" ").to_lowercase()
    }
}

impl Ticket {
    /// Form rules for the compose drawer: only the subject is required
    pub fn rules() -> RuleSet {
        RuleSet::new()
            .required("subject")
            .one_of("priority", PRIORITY_RANKS)
    }

    /// Rank-table ordering by priority, Urgent first
    pub fn priority_order() -> SortOrder {
        SortOrder::Ranked {
            field: "priority".to_string(),
            table: PRIORITY_RANKS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// The mock queue the crate ships with
    pub fn seed() -> Vec<Ticket> {
        let ticket = |id: &str,
                      subject: &str,
                      member: &str,
                      club: &str,
                      priority: &str,
                      status: &str,
                      category: &str,
                      assignee: &str,
                      replies: i64,
                      created: &str,
                      updated: &str| Ticket {
            id: RecordId::from(id),
            subject: subject.to_string(),
            member: member.to_string(),
            club: club.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
            category: category.to_string(),
            assignee: assignee.to_string(),
            replies,
            created: seed_timestamp(created),
            updated: seed_timestamp(updated),
        };

        vec![
            ticket("GB-1042", "App not logging workouts", "Aarav S.", "Hyderabad", "High", "Open", "App", "Vikram", 2, "2025-10-01 09:34", "2025-10-03 14:12"),
            ticket("GB-1041", "Refund for canceled class", "Nisha K.", "Agra", "Medium", "Pending", "Billing", "Maya", 3, "2025-10-01 08:02", "2025-10-02 11:51"),
            ticket("GB-1039", "Door access not working", "Rahul P.", "Delhi", "Urgent", "Open", "Facilities", "Aisha", 1, "2025-09-30 18:11", "2025-10-01 07:41"),
            ticket("GB-1038", "PT session reschedule", "Sanya R.", "Hyderabad", "Low", "Resolved", "Training", "Vikram", 2, "2025-09-29 10:19", "2025-09-29 13:44"),
            ticket("GB-1035", "Unable to renew membership", "Zara A.", "Agra", "High", "Open", "Billing", "—", 0, "2025-09-28 15:03", "2025-09-30 12:15"),
            ticket("GB-1032", "Steam room temperature", "Club: Delhi", "Delhi", "Medium", "Pending", "Facilities", "Ops", 5, "2025-09-26 12:33", "2025-09-27 09:10"),
            ticket("GB-1027", "Diet plan not syncing", "Ritika", "Online", "Low", "Resolved", "App", "Maya", 4, "2025-09-23 16:45", "2025-09-24 08:55"),
        ]
    }
}

fn seed_timestamp(value: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .expect("seed timestamps are well-formed")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_queue() {
        let tickets = Ticket::seed();
        assert_eq!(tickets.len(), 7);
        assert_eq!(tickets[0].id.as_str(), "GB-1042");
    }

    #[test]
    fn test_search_includes_display_id() {
        let ticket = &Ticket::seed()[0];
        assert!(ticket.search_haystack().contains("gb-1042"));
        assert!(ticket.search_haystack().contains("vikram"));
    }

    #[test]
    fn test_priority_order() {
        let mut tickets = Ticket::seed();
        Ticket::priority_order().apply(&mut tickets);
        assert_eq!(tickets[0].priority, "Urgent");
        assert_eq!(tickets[tickets.len() - 1].priority, "Low");
    }

    #[test]
    fn test_rules_reject_unknown_priority() {
        let err = Ticket::rules()
            .check(
                json!({"subject": "Broken treadmill", "priority": "Whenever"})
                    .as_object()
                    .expect("object"),
            )
            .expect_err("bad priority");
        assert!(err.to_string().contains("priority"));
    }
}
