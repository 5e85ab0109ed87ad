//! Totals, averages, and period-over-period growth.

use crate::expense::Expense;

/// The headline figures computed from the filtered record subsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    /// Sum of amounts in the current window.
    pub total: f64,
    /// Sum of amounts in the calendar month of the reference date.
    pub this_month: f64,
    /// Sum of amounts in the comparison window.
    pub previous_period_total: f64,
    /// Number of records in the current window.
    pub count: usize,
    /// Average amount per record in the current window, or 0 if empty.
    pub avg_per_expense: f64,
    /// Percentage change of `total` against `previous_period_total`, or 0
    /// when there is no baseline to compare against.
    pub period_growth: f64,
}

/// Sum the amounts of a filtered record subset. Zero for the empty set.
pub fn sum_amounts(expenses: &[&Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Compute the headline figures from the three filtered subsets.
///
/// Pure function of its inputs: no I/O, no randomness. The divide-by-zero
/// cases (empty current window, zero baseline) resolve to 0 rather than
/// NaN or infinity. Growth against a zero baseline is undefined, not
/// infinite, so it reports as 0 regardless of the current total.
pub fn aggregate(current: &[&Expense], previous: &[&Expense], this_month: &[&Expense]) -> Totals {
    let total = sum_amounts(current);
    let previous_period_total = sum_amounts(previous);
    let count = current.len();

    let avg_per_expense = if count > 0 { total / count as f64 } else { 0.0 };

    let period_growth = if previous_period_total > 0.0 {
        (total - previous_period_total) / previous_period_total * 100.0
    } else {
        0.0
    };

    Totals {
        total,
        this_month: sum_amounts(this_month),
        previous_period_total,
        count,
        avg_per_expense,
        period_growth,
    }
}
