//! The analytics pipeline and its summary output.
//!
//! [analyze] wires the components together: resolve the windows, filter the
//! record set, then aggregate, rank categories, and bucket the trend. The
//! summary is a derived, throwaway value with no identity of its own;
//! whenever the record set, the selector, or the reference date changes,
//! consumers recompute from scratch instead of patching a stale summary.

use indexmap::IndexMap;
use serde::Serialize;
use time::Date;

use crate::{
    aggregate::aggregate,
    category::{category_breakdown, top_categories},
    expense::Expense,
    filter::{in_month_of, in_window},
    trend::{TrendBucket, daily_trend},
    window::{TimeRange, TimeWindow},
};

/// The complete output of one analytics computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Sum of amounts in the current window.
    pub total: f64,
    /// Sum of amounts in the calendar month of the reference date.
    pub this_month: f64,
    /// Sum of amounts in the comparison window.
    pub previous_period_total: f64,
    /// Average amount per record in the current window, or 0 if empty.
    pub avg_per_expense: f64,
    /// Percentage change against the comparison window, or 0 with no
    /// baseline.
    pub period_growth: f64,
    /// Number of records in the current window.
    pub count: usize,
    /// Per-category sums for the current window, in first-seen order.
    pub category_breakdown: IndexMap<String, f64>,
    /// The top spending categories, descending by sum, at most five.
    pub top_categories: Vec<(String, f64)>,
    /// The daily or weekly trend series, chronological.
    pub daily_trend: Vec<TrendBucket>,
    /// The selector this summary was computed for.
    pub time_range: TimeRange,
}

/// Compute a spending summary for `range` ending at the reference date
/// `now`.
///
/// `expenses` may arrive in any order; the engine never mutates or reorders
/// them. `now` is an explicit parameter rather than a read of the system
/// clock so the computation is deterministic and testable.
///
/// After the summary is computed a single structured event is emitted via
/// `tracing`. The event is advisory telemetry: it carries the selector,
/// record counts, and key totals, and never affects the returned value.
pub fn analyze(expenses: &[Expense], range: TimeRange, now: Date) -> AnalyticsSummary {
    let window = TimeWindow::current(range, now);
    let previous_window = window.preceding();

    let current = in_window(expenses, &window);
    let previous = in_window(expenses, &previous_window);
    let this_month = in_month_of(expenses, now);

    let totals = aggregate(&current, &previous, &this_month);
    let breakdown = category_breakdown(&current);
    let top = top_categories(&breakdown);
    let trend = daily_trend(&current, &window);

    tracing::info!(
        time_range = %range,
        total_expenses = expenses.len(),
        filtered_expenses = totals.count,
        total_amount = totals.total,
        this_month_amount = totals.this_month,
        period_growth = totals.period_growth,
        top_category_count = top.len(),
        "analytics computation completed"
    );

    AnalyticsSummary {
        total: totals.total,
        this_month: totals.this_month,
        previous_period_total: totals.previous_period_total,
        avg_per_expense: totals.avg_per_expense,
        period_growth: totals.period_growth,
        count: totals.count,
        category_breakdown: breakdown,
        top_categories: top,
        daily_trend: trend,
        time_range: range,
    }
}
