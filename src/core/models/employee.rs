use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single employee record in the roster.
///
/// An `id` of 0 marks a draft that has not been stored yet; stores
/// assign the real identifier on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    /// Calendar date the employee joined, no time component.
    pub joined_on: NaiveDate,
}

impl Employee {
    /// Build a draft record (id 0) ready to be saved.
    pub fn draft(first_name: &str, last_name: &str, joined_on: NaiveDate) -> Self {
        Self {
            id: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            joined_on,
        }
    }

    /// "First Last", the form used in log lines and table output.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when `today`'s month and day equal the joining month and
    /// day. The year is ignored: this is an anniversary check, not an
    /// exact-date check.
    pub fn is_anniversary(&self, today: NaiveDate) -> bool {
        self.joined_on.month() == today.month() && self.joined_on.day() == today.day()
    }
}
