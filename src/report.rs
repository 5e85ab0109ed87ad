//! Plain-text rendering of an analytics summary.
//!
//! Presentation concerns live here, not in the engine: currency formatting,
//! percentage-of-total for the category ranking (guarded against a zero
//! total), and trend bars scaled against the largest bucket (guarded
//! against an empty or all-zero series).

use std::fmt::Write;
use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::analytics::AnalyticsSummary;

const BAR_WIDTH: usize = 20;

/// Format a non-negative amount as dollars and cents, e.g. `$1,234.50`.
pub fn currency(number: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if number == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let mut formatted_string = fmt.fmt_string(number);

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// The share of `total` that `amount` represents, as a percentage.
///
/// Returns 0 when `total` is zero; a share of nothing is undefined, not
/// infinite.
pub fn percentage_of_total(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// A spending bar scaled against the largest amount in the series.
///
/// An empty series or an all-zero maximum yields an empty bar.
fn bar(amount: f64, max: f64) -> String {
    if max <= 0.0 || amount <= 0.0 {
        return String::new();
    }

    let width = ((amount / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(width.max(1))
}

/// Render the summary as a text dashboard.
pub fn render_summary(summary: &AnalyticsSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Spending summary ({})", summary.time_range);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Total spending    {:>12}  ({:+.1}% vs previous period)",
        currency(summary.total),
        summary.period_growth
    );
    let _ = writeln!(
        out,
        "  This month        {:>12}",
        currency(summary.this_month)
    );
    let _ = writeln!(
        out,
        "  Avg per expense   {:>12}",
        currency(summary.avg_per_expense)
    );
    let _ = writeln!(out, "  Expense count     {:>12}", summary.count);

    let _ = writeln!(out);
    let _ = writeln!(out, "Top categories");
    if summary.top_categories.is_empty() {
        let _ = writeln!(out, "  (no expenses in this period)");
    }
    for (category, amount) in &summary.top_categories {
        let _ = writeln!(
            out,
            "  {category:<16} {:>12}  {:>5.1}%",
            currency(*amount),
            percentage_of_total(*amount, summary.total)
        );
    }

    let max_bucket = summary
        .daily_trend
        .iter()
        .map(|bucket| bucket.amount)
        .fold(0.0_f64, f64::max);

    let _ = writeln!(out);
    let _ = writeln!(out, "Spending trend");
    for bucket in &summary.daily_trend {
        let label = if bucket.is_weekly {
            format!("Week of {}", bucket.date)
        } else {
            bucket.date.to_string()
        };
        let _ = writeln!(
            out,
            "  {label:<18} {:>12}  {}",
            currency(bucket.amount),
            bar(bucket.amount, max_bucket)
        );
    }

    out
}


#[cfg(test)]
mod report_tests {
    use time::macros::date;

    use crate::{analytics::analyze, expense::Expense, window::TimeRange};

    use super::{bar, percentage_of_total, render_summary};

    #[test]
    fn percentage_guards_against_zero_total() {
        assert_eq!(percentage_of_total(5.0, 0.0), 0.0);
        assert_eq!(percentage_of_total(5.0, 20.0), 25.0);
    }

    #[test]
    fn bar_is_empty_for_zero_maximum() {
        assert_eq!(bar(0.0, 0.0), "");
        assert_eq!(bar(5.0, 0.0), "");
    }

    #[test]
    fn bar_scales_against_maximum() {
        assert_eq!(bar(10.0, 10.0).len(), 20);
        assert_eq!(bar(5.0, 10.0).len(), 10);
        // Tiny amounts still show a sliver.
        assert_eq!(bar(0.001, 10.0).len(), 1);
    }

    #[test]
    fn renders_summary_sections() {
        let expenses = vec![
            Expense::new("1", "Coffee", 5.0, "Food", "2024-03-10"),
            Expense::new("2", "Gas", 40.0, "Transport", "2024-03-12"),
        ];
        let summary = analyze(&expenses, TimeRange::SevenDays, date!(2024 - 03 - 15));

        let text = render_summary(&summary);

        assert!(text.contains("Spending summary (7d)"));
        assert!(text.contains("$45.00"));
        assert!(text.contains("Transport"));
        assert!(text.contains("2024-03-12"));
    }

    #[test]
    fn renders_empty_summary_without_panicking() {
        let summary = analyze(&[], TimeRange::SevenDays, date!(2024 - 03 - 15));

        let text = render_summary(&summary);

        assert!(text.contains("(no expenses in this period)"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn weekly_buckets_are_labelled_as_weeks() {
        let summary = analyze(&[], TimeRange::OneYear, date!(2024 - 03 - 15));

        let text = render_summary(&summary);

        assert!(text.contains("Week of "));
    }
}
