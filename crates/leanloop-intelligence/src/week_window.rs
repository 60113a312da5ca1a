// ABOUTME: Week window calculator producing Monday-aligned seven-day windows
// ABOUTME: Oldest window first, the last one always contains the reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use leanloop_core::models::{DateRange, WeekWindow};

/// Pure date arithmetic for weekly reporting windows
pub struct WeekWindowCalculator;

impl WeekWindowCalculator {
    /// Monday on or before `date`, if the calendar reaches back that far
    #[must_use]
    pub fn week_start_for(date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
    }

    /// `week_count` windows ending with the week that contains `now`
    ///
    /// Civil dates are taken in the timezone carried by `now`.
    #[must_use]
    pub fn windows<Tz: TimeZone>(now: &DateTime<Tz>, week_count: usize) -> Vec<WeekWindow> {
        Self::windows_ending_on(now.date_naive(), week_count)
    }

    /// `week_count` windows ending with the week that contains `today`
    ///
    /// Weeks that would fall outside the supported calendar are skipped, so a date at
    /// the very edge of the calendar yields fewer windows instead of panicking.
    #[must_use]
    pub fn windows_ending_on(today: NaiveDate, week_count: usize) -> Vec<WeekWindow> {
        let Some(current) = Self::week_start_for(today) else {
            return Vec::new();
        };
        (0..week_count as u64)
            .rev()
            .filter_map(|weeks_back| current.checked_sub_days(Days::new(weeks_back * 7)))
            .filter_map(WeekWindow::starting)
            .collect()
    }

    /// Date range spanning every window, or `None` when there are none
    #[must_use]
    pub fn combined_range(windows: &[WeekWindow]) -> Option<DateRange> {
        let first = windows.first()?;
        let last = windows.last()?;
        Some(DateRange::new(first.week_start, last.week_end))
    }
}
