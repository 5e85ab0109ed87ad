//! The adaptively-granular spending trend series.
//!
//! Short windows get one bucket per day; anything spanning more than 30
//! calendar days collapses into 7-day buckets so a one-year window never
//! produces 365 data points. Both granularities run through the same
//! bucketing routine, only the chunk size differs.

use serde::Serialize;
use time::Date;

use crate::{expense::Expense, window::TimeWindow};

/// Windows spanning more than this many calendar days use weekly buckets.
const DAILY_RESOLUTION_LIMIT: usize = 30;

/// How many trailing daily buckets to keep.
pub const MAX_DAILY_BUCKETS: usize = 14;

/// How many trailing weekly buckets to keep.
pub const MAX_WEEKLY_BUCKETS: usize = 10;

/// One point of the trend series: a day or a 7-day span with its summed
/// spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket {
    /// The first (or only) day of the bucket.
    pub date: Date,
    /// The summed amounts of current-window records falling in the bucket.
    pub amount: f64,
    /// Whether this bucket covers a 7-day span rather than a single day.
    pub is_weekly: bool,
}

/// Bucket the current-window records into a chronological trend series.
///
/// Every calendar date from `window.start` to `window.end` inclusive is
/// enumerated; if that is more than 30 days the series collapses into
/// consecutive 7-day buckets (the final bucket may be shorter) and keeps
/// the last [MAX_WEEKLY_BUCKETS], otherwise it keeps the last
/// [MAX_DAILY_BUCKETS] single days. Days without spending produce buckets
/// with an amount of 0, so an empty record set yields an all-zero series
/// rather than an empty or missing one.
pub fn daily_trend(current: &[&Expense], window: &TimeWindow) -> Vec<TrendBucket> {
    let days = enumerate_days(window);

    let (days_per_bucket, max_buckets, is_weekly) = if days.len() > DAILY_RESOLUTION_LIMIT {
        (7, MAX_WEEKLY_BUCKETS, true)
    } else {
        (1, MAX_DAILY_BUCKETS, false)
    };

    let mut buckets: Vec<TrendBucket> = days
        .chunks(days_per_bucket)
        .map(|bucket_days| {
            let first = bucket_days[0];
            let last = bucket_days[bucket_days.len() - 1];
            let amount = current
                .iter()
                .filter(|expense| {
                    expense
                        .parsed_date()
                        .is_some_and(|date| first <= date && date <= last)
                })
                .map(|expense| expense.amount)
                .sum();

            TrendBucket {
                date: first,
                amount,
                is_weekly,
            }
        })
        .collect();

    if buckets.len() > max_buckets {
        buckets.drain(..buckets.len() - max_buckets);
    }

    buckets
}

/// Every calendar date from `window.start` to `window.end` inclusive.
fn enumerate_days(window: &TimeWindow) -> Vec<Date> {
    let mut days = Vec::new();
    let mut day = window.start;

    while day <= window.end {
        days.push(day);
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    days
}

#[cfg(test)]
mod trend_tests {
    use time::{Duration, macros::date};

    use crate::{
        expense::Expense,
        window::{TimeRange, TimeWindow},
    };

    use super::{MAX_DAILY_BUCKETS, MAX_WEEKLY_BUCKETS, TrendBucket, daily_trend};

    #[test]
    fn seven_day_window_produces_daily_buckets() {
        let coffee = Expense::new("1", "Coffee", 5.0, "Food", "2024-03-10");
        let gas = Expense::new("2", "Gas", 40.0, "Transport", "2024-03-12");
        let window = TimeWindow::current(TimeRange::SevenDays, date!(2024 - 03 - 15));

        let got = daily_trend(&[&coffee, &gas], &window);

        // 2024-03-08 through 2024-03-15 inclusive.
        assert_eq!(got.len(), 8);
        assert!(got.iter().all(|bucket| !bucket.is_weekly));
        assert_eq!(got[0].date, date!(2024 - 03 - 08));
        assert_eq!(got[2].amount, 5.0);
        assert_eq!(got[4].amount, 40.0);
        assert_eq!(got.iter().map(|bucket| bucket.amount).sum::<f64>(), 45.0);
    }

    #[test]
    fn empty_record_set_yields_all_zero_buckets() {
        let window = TimeWindow::current(TimeRange::SevenDays, date!(2024 - 03 - 15));

        let got = daily_trend(&[], &window);

        assert_eq!(got.len(), 8);
        assert!(got.iter().all(|bucket| bucket.amount == 0.0));
    }

    #[test]
    fn thirty_day_window_collapses_to_weekly_buckets() {
        // 30 days back from the reference date spans 31 calendar days
        // inclusive, which is past the daily resolution limit.
        let window = TimeWindow::current(TimeRange::ThirtyDays, date!(2024 - 03 - 15));

        let got = daily_trend(&[], &window);

        assert_eq!(got.len(), 5);
        assert!(got.iter().all(|bucket| bucket.is_weekly));
        assert_eq!(got[0].date, window.start);
        // 31 = 4 * 7 + 3, so the final bucket covers only 3 days.
        assert_eq!(got[4].date, window.start + Duration::days(28));
    }

    #[test]
    fn long_windows_keep_the_last_ten_weeks() {
        let window = TimeWindow::current(TimeRange::OneYear, date!(2024 - 03 - 15));
        // One expense of 1.0 on every day of the current window.
        let expenses: Vec<Expense> = (0..(window.end - window.start).whole_days())
            .map(|offset| {
                let day = window.start + Duration::days(offset);
                Expense::new(&offset.to_string(), "Daily", 1.0, "Other", &day.to_string())
            })
            .collect();
        let refs: Vec<&Expense> = expenses.iter().collect();

        let got = daily_trend(&refs, &window);

        assert_eq!(got.len(), MAX_WEEKLY_BUCKETS);
        assert!(got.iter().all(|bucket| bucket.is_weekly));

        // Chronological order, 7 days apart.
        for pair in got.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(7));
        }

        // Each full bucket holds seven 1.0 expenses. The final bucket spans
        // 3 days (367 = 52 * 7 + 3) but its last day is the window end,
        // which the half-open window excludes, leaving 2 records.
        for bucket in &got[..MAX_WEEKLY_BUCKETS - 1] {
            assert_eq!(bucket.amount, 7.0);
        }
        assert_eq!(got[MAX_WEEKLY_BUCKETS - 1].amount, 2.0);
    }

    #[test]
    fn daily_buckets_never_exceed_fourteen() {
        // A 30-day span exactly at the daily resolution limit: 29 days back
        // gives 30 inclusive days, still daily.
        let window = TimeWindow {
            start: date!(2024 - 02 - 15),
            end: date!(2024 - 03 - 15),
        };
        assert_eq!((window.end - window.start).whole_days(), 29);

        let got = daily_trend(&[], &window);

        assert_eq!(got.len(), MAX_DAILY_BUCKETS);
        assert!(got.iter().all(|bucket| !bucket.is_weekly));
    }

    #[test]
    fn trailing_days_are_kept_when_truncating() {
        // 20 inclusive days, daily resolution, truncated to the last 14.
        let window = TimeWindow {
            start: date!(2024 - 03 - 01),
            end: date!(2024 - 03 - 20),
        };
        let early = Expense::new("1", "Early", 9.0, "Other", "2024-03-02");
        let late = Expense::new("2", "Late", 4.0, "Other", "2024-03-19");

        let got = daily_trend(&[&early, &late], &window);

        assert_eq!(got.len(), MAX_DAILY_BUCKETS);
        assert_eq!(got[0].date, date!(2024 - 03 - 07));
        // The early expense fell off the front of the series.
        assert_eq!(got.iter().map(|bucket| bucket.amount).sum::<f64>(), 4.0);
        assert_eq!(got[12].amount, 4.0);
    }

    #[test]
    fn buckets_are_in_nondecreasing_date_order() {
        for range in TimeRange::ALL {
            let window = TimeWindow::current(range, date!(2024 - 03 - 15));
            let got = daily_trend(&[], &window);

            for pair in got.windows(2) {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let bucket = TrendBucket {
            date: date!(2024 - 03 - 08),
            amount: 5.0,
            is_weekly: false,
        };

        let json = serde_json::to_value(&bucket).unwrap();

        assert_eq!(json["date"], "2024-03-08");
        assert_eq!(json["isWeekly"], false);
    }
}
