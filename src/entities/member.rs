//! Gym member records

use crate::core::field::FieldFormat;
use crate::core::record::RecordId;
use crate::core::validation::RuleSet;
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gym member as the member management screen lists them
///
/// Fields omitted from a submitted form default to their empty value
/// rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Membership plan: Monthly, Quarterly, Annual, or PT
    pub plan: String,
    /// Active, Paused, or Expired
    pub status: String,
    pub joined: NaiveDate,
    pub last_checkin: NaiveDate,
    pub next_due: NaiveDate,
    /// Attendance percentage over the trailing month
    pub attendance: i64,
    /// Outstanding dues in rupees
    pub due: i64,
}

impl_record!(
    Member,
    searchable = [name, email],
    fields = [
        name,
        email,
        phone,
        plan,
        status,
        joined,
        last_checkin,
        next_due,
        attendance,
        due
    ]
);

impl Member {
    /// Form rules for the member screen: name and email are required,
    /// and the email must look like one
    pub fn rules() -> RuleSet {
        RuleSet::new()
            .required("name")
            .required("email")
            .format("email", FieldFormat::Email)
    }

    /// The mock roster the crate ships with
    pub fn seed() -> Vec<Member> {
        let member = |id: &str,
                      name: &str,
                      email: &str,
                      phone: &str,
                      plan: &str,
                      status: &str,
                      joined: &str,
                      last_checkin: &str,
                      next_due: &str,
                      attendance: i64,
                      due: i64| Member {
            id: RecordId::from(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            plan: plan.to_string(),
            status: status.to_string(),
            joined: seed_date(joined),
            last_checkin: seed_date(last_checkin),
            next_due: seed_date(next_due),
            attendance,
            due,
        };

        vec![
            member("m1", "Aarav Mehta", "aarav@example.com", "+91 98980 11111", "Monthly", "Active", "2025-05-03", "2025-10-02", "2025-10-07", 82, 1499),
            member("m2", "Isha Verma", "isha@example.com", "+91 98980 22222", "Annual", "Active", "2025-01-12", "2025-10-01", "2026-01-12", 76, 0),
            member("m3", "Kabir Sharma", "kabir@example.com", "+91 98980 33333", "Quarterly", "Paused", "2025-06-10", "2025-09-20", "2025-11-10", 40, 0),
            member("m4", "Zara Khan", "zara@example.com", "+91 98980 44444", "PT", "Active", "2025-07-01", "2025-10-02", "2025-10-15", 88, 3500),
            member("m5", "Rohan Gupta", "rohan@example.com", "+91 98980 55555", "Monthly", "Expired", "2025-04-08", "2025-09-05", "2025-09-08", 22, 1499),
            member("m6", "Maya Iyer", "maya@example.com", "+91 98980 66666", "Annual", "Active", "2024-12-02", "2025-09-29", "2025-12-02", 65, 0),
            member("m7", "Arjun Nair", "arjun@example.com", "+91 98980 77777", "Monthly", "Active", "2025-08-14", "2025-10-02", "2025-10-14", 71, 1499),
            member("m8", "Saanvi Rao", "saanvi@example.com", "+91 98980 88888", "Quarterly", "Active", "2025-03-22", "2025-10-01", "2025-12-22", 59, 0),
            member("m9", "Dev Patel", "dev@example.com", "+91 98980 99999", "PT", "Paused", "2025-07-18", "2025-09-30", "2025-10-18", 34, 1200),
            member("m10", "Anaya Singh", "anaya@example.com", "+91 98980 11112", "Monthly", "Active", "2025-09-01", "2025-10-02", "2025-10-08", 79, 1499),
            member("m11", "Vivaan Joshi", "vivaan@example.com", "+91 98980 13131", "Annual", "Active", "2025-02-10", "2025-10-01", "2026-02-10", 73, 0),
            member("m12", "Kiara Bhat", "kiara@example.com", "+91 98980 12121", "Quarterly", "Expired", "2025-05-05", "2025-09-02", "2025-09-05", 28, 2499),
        ]
    }
}

pub(crate) fn seed_date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed dates are well-formed")
}
