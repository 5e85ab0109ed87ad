//! Spendsight derives time-windowed spending summaries from expense records.
//!
//! The engine is a pure function of its inputs: a set of [Expense] records,
//! a [TimeRange] selector, and an explicit reference date. Given the same
//! inputs it always produces the same [AnalyticsSummary], which makes the
//! whole pipeline deterministic and testable without touching the system
//! clock.
//!
//! ```rust
//! use time::macros::date;
//!
//! use spendsight::{Expense, TimeRange, analyze};
//!
//! let expenses = vec![Expense::new("1", "Coffee", 5.0, "Food", "2024-03-10")];
//! let summary = analyze(&expenses, TimeRange::SevenDays, date!(2024 - 03 - 15));
//!
//! assert_eq!(summary.total, 5.0);
//! assert_eq!(summary.count, 1);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod analytics;
pub mod category;
pub mod expense;
pub mod filter;
pub mod import;
pub mod report;
pub mod store;
pub mod trend;
pub mod window;

pub use analytics::{AnalyticsSummary, analyze};
pub use expense::{Expense, ExpenseDraft, parse_iso_date};
pub use store::{ExpenseStore, InMemoryExpenseStore};
pub use trend::TrendBucket;
pub use window::{TimeRange, TimeWindow};

/// The errors that may occur in the analytics engine and its loaders.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A time range selector outside the closed set `7d`, `30d`, `90d`, `1y`.
    ///
    /// An unknown selector is a contract violation by the caller and is
    /// rejected rather than silently defaulted, since defaulting would
    /// produce a window the caller did not ask for.
    #[error("\"{0}\" is not a valid time range (expected one of: 7d, 30d, 90d, 1y)")]
    InvalidTimeRange(String),

    /// A string that could not be parsed as a `YYYY-MM-DD` calendar date.
    ///
    /// This is only returned at the input boundary (CLI arguments, expense
    /// drafts). Malformed dates on records that are already in the engine
    /// are excluded from every window instead of raising an error.
    #[error("\"{0}\" is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// The JSON had issues that prevented it from being parsed.
    #[error("could not parse the JSON file: {0}")]
    InvalidJson(String),

    /// An error occurred while serializing a summary as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),

    /// The requested expense could not be found in the store.
    #[error("the requested expense could not be found")]
    NotFound,

    /// An error occurred while reading an expense file.
    #[error("could not read the expense file: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
