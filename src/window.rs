//! Time range selectors and the windows they resolve to.
//!
//! A [TimeRange] is the only externally configurable input to the engine
//! besides the record set and the reference date. [TimeWindow::current]
//! resolves a selector against a reference date, and
//! [TimeWindow::preceding] gives the equal-length comparison window used
//! for period-over-period growth.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::Error;

/// How far back from the reference date the current window reaches.
///
/// This is a closed set: any other selector string is rejected with
/// [Error::InvalidTimeRange].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    /// The last 7 days.
    #[serde(rename = "7d")]
    SevenDays,
    /// The last 30 days.
    #[serde(rename = "30d")]
    ThirtyDays,
    /// The last 90 days.
    #[serde(rename = "90d")]
    NinetyDays,
    /// The last calendar year.
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    /// Every valid selector, in ascending order of span.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    /// The selector's canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
            TimeRange::OneYear => "1y",
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "7d" => Ok(TimeRange::SevenDays),
            "30d" => Ok(TimeRange::ThirtyDays),
            "90d" => Ok(TimeRange::NinetyDays),
            "1y" => Ok(TimeRange::OneYear),
            _ => Err(Error::InvalidTimeRange(text.to_owned())),
        }
    }
}

/// A half-open interval of calendar time: `start <= date < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// The first date inside the window.
    pub start: Date,
    /// The first date after the window.
    pub end: Date,
}

impl TimeWindow {
    /// Resolve `range` against the reference date `now`.
    ///
    /// The window ends at `now` (exclusive) and starts the selector's span
    /// earlier. The one-year selector uses calendar-year arithmetic rather
    /// than a fixed 365-day offset, so the window start falls on the same
    /// month and day of the previous year (Feb 29 clamps to Feb 28).
    pub fn current(range: TimeRange, now: Date) -> Self {
        let start = match range {
            TimeRange::SevenDays => now - Duration::days(7),
            TimeRange::ThirtyDays => now - Duration::days(30),
            TimeRange::NinetyDays => now - Duration::days(90),
            TimeRange::OneYear => one_calendar_year_before(now),
        };

        Self { start, end: now }
    }

    /// The contiguous window of equal length immediately before this one.
    ///
    /// `preceding().end == start`, so the two windows never overlap and
    /// together cover twice the selector's span.
    pub fn preceding(&self) -> Self {
        let span = self.end - self.start;

        Self {
            start: self.start - span,
            end: self.start,
        }
    }

    /// Whether `date` falls within the window (`start <= date < end`).
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

/// The same month and day one year earlier, clamping Feb 29 to Feb 28 when
/// the previous year is not a leap year.
fn one_calendar_year_before(date: Date) -> Date {
    let year = date.year() - 1;

    Date::from_calendar_date(year, date.month(), date.day())
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .expect("date clamped to Feb 28 is always valid")
}
