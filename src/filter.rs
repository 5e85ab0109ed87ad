//! Partitions expense records by time window.
//!
//! Filtering is independent per window: a record may appear in several
//! subsets at once (for example in both the current window and the current
//! calendar month). Records whose date string does not parse are excluded
//! from every window; see [crate::Expense::parsed_date].

use time::Date;

use crate::{expense::Expense, window::TimeWindow};

/// The expenses whose occurrence date falls within `window`.
///
/// Input order is preserved. The engine assumes no particular ordering from
/// upstream, so callers must not rely on the result being sorted by date.
pub fn in_window<'a>(expenses: &'a [Expense], window: &TimeWindow) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| {
            expense
                .parsed_date()
                .is_some_and(|date| window.contains(date))
        })
        .collect()
}

/// The expenses that occurred in the calendar month containing `now`.
///
/// Membership is an exact month and year match, independent of the selected
/// time window.
pub fn in_month_of(expenses: &[Expense], now: Date) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|expense| {
            expense
                .parsed_date()
                .is_some_and(|date| date.month() == now.month() && date.year() == now.year())
        })
        .collect()
}
