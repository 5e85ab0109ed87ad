//! The expense record model.
//!
//! An [Expense] is immutable once it reaches the analytics engine. Records
//! arrive from upstream (a persistence gateway or an import file) with the
//! occurrence date as an ISO 8601 `YYYY-MM-DD` string; the engine parses the
//! date on demand and treats records whose date does not parse as belonging
//! to no window at all.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse an ISO 8601 `YYYY-MM-DD` string into a [Date].
///
/// # Errors
/// Returns [Error::InvalidDate] if the string is not a valid calendar date.
pub fn parse_iso_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// A single expense, i.e. an event where money was spent.
///
/// Field names serialize in camelCase to match the JSON produced by the
/// expense API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The unique identifier of the expense. Opaque to the engine.
    pub id: String,
    /// A short display name for the expense.
    pub title: String,
    /// The amount of money spent, in currency units. Always positive;
    /// enforced upstream, not re-validated here.
    pub amount: f64,
    /// A free-form category label, e.g. "Food" or "Transport".
    ///
    /// Categories are opaque strings, not a closed set. The engine must
    /// handle labels it has never seen before.
    pub category: String,
    /// When the expense occurred, as an ISO 8601 `YYYY-MM-DD` string.
    ///
    /// This is the raw value delivered by upstream. Use [Expense::parsed_date]
    /// to get a typed date.
    pub date: String,
    /// Optional free-text details. Not used by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the record was created. Bookkeeping only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// When the record was last updated. Bookkeeping only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Expense {
    /// Create an expense with the fields the engine cares about.
    ///
    /// Mostly a convenience for tests and examples; records normally come
    /// from a store or an import file.
    pub fn new(id: &str, title: &str, amount: f64, category: &str, date: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            amount,
            category: category.to_owned(),
            date: date.to_owned(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// The occurrence date of the expense as a typed calendar date.
    ///
    /// Returns `None` if the stored string is not a valid `YYYY-MM-DD` date.
    /// Upstream data quality is outside this engine's control, so a
    /// malformed date is not an error: the record is simply excluded from
    /// every time window.
    pub fn parsed_date(&self) -> Option<Date> {
        Date::parse(&self.date, DATE_FORMAT).ok()
    }
}

/// The fields needed to create a new expense in a store.
///
/// The store assigns the record's ID and bookkeeping timestamps when the
/// draft is finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// A short display name for the expense.
    pub title: String,
    /// The amount of money spent. Must be positive.
    pub amount: f64,
    /// A free-form category label.
    pub category: String,
    /// When the expense occurred.
    pub date: Date,
    /// Optional free-text details.
    pub description: Option<String>,
}

impl ExpenseDraft {
    /// Create a draft for an expense with no description.
    pub fn new(title: &str, amount: f64, category: &str, date: Date) -> Self {
        Self {
            title: title.to_owned(),
            amount,
            category: category.to_owned(),
            date,
            description: None,
        }
    }

    /// Set the description for the expense.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

#[cfg(test)]
mod expense_tests {
    use time::macros::date;

    use crate::Error;

    use super::{Expense, parse_iso_date};

    #[test]
    fn parses_valid_date() {
        let expense = Expense::new("1", "Coffee", 5.0, "Food", "2024-03-10");

        assert_eq!(expense.parsed_date(), Some(date!(2024 - 03 - 10)));
    }

    #[test]
    fn malformed_date_parses_as_none() {
        for bad_date in ["not-a-date", "2024-13-01", "2024-02-30", "", "15/03/2024"] {
            let expense = Expense::new("1", "Coffee", 5.0, "Food", bad_date);

            assert_eq!(
                expense.parsed_date(),
                None,
                "expected {bad_date:?} to parse as None"
            );
        }
    }

    #[test]
    fn parse_iso_date_rejects_garbage() {
        let result = parse_iso_date("yesterday");

        assert_eq!(result, Err(Error::InvalidDate("yesterday".to_owned())));
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "id": "abc-123",
            "title": "Gas",
            "amount": 40.0,
            "category": "Transport",
            "date": "2024-03-12",
            "createdAt": "2024-03-12T08:00:00Z",
            "updatedAt": "2024-03-12T08:00:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, "abc-123");
        assert_eq!(expense.amount, 40.0);
        assert_eq!(expense.created_at.as_deref(), Some("2024-03-12T08:00:00Z"));
        assert_eq!(expense.description, None);
    }
}
