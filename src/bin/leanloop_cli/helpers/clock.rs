// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Reference-time helpers for leanloop-cli
// ABOUTME: Resolves "now" in the local timezone, optionally pinned to a given date

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone};
use leanloop::errors::{AppError, AppResult};

/// Current local time, or local noon on `today` when given
///
/// Noon keeps the pinned instant inside `today` regardless of daylight-saving shifts.
pub fn reference_time(today: Option<NaiveDate>) -> AppResult<DateTime<FixedOffset>> {
    let now = Local::now().fixed_offset();
    let Some(date) = today else {
        return Ok(now);
    };

    let noon = NaiveTime::from_hms_opt(12, 0, 0)
        .ok_or_else(|| AppError::internal("Invalid reference time of day"))?;
    now.offset()
        .from_local_datetime(&date.and_time(noon))
        .single()
        .ok_or_else(|| {
            AppError::invalid_input(format!("Cannot resolve {date} in the local timezone"))
                .with_field("today")
        })
}
