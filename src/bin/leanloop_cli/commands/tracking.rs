// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Daily habit, workout, and weekly check-in logging commands
// ABOUTME: Every command validates input, writes through the service, and saves the snapshot

use super::CommandContext;
use crate::helpers::clock::reference_time;
use crate::helpers::display::{display_checkin, display_habit_log, display_workout, print_json};
use chrono::{DateTime, NaiveDate, Utc};
use leanloop::errors::AppResult;

/// Log protein and/or steps for a day (defaults to today)
pub async fn log_habits(
    ctx: &CommandContext,
    date: Option<NaiveDate>,
    protein: Option<f64>,
    steps: Option<f64>,
) -> AppResult<()> {
    let date = match date {
        Some(date) => date,
        None => reference_time(None)?.date_naive(),
    };
    let log = ctx.service.log_habits(date, protein, steps).await?;
    ctx.save().await?;

    if ctx.json {
        print_json(&log)
    } else {
        display_habit_log(&log);
        Ok(())
    }
}

/// Record a completed workout (defaults to now)
pub async fn log_workout(ctx: &CommandContext, at: Option<DateTime<Utc>>) -> AppResult<()> {
    let workout = ctx
        .service
        .record_workout(at.unwrap_or_else(Utc::now))
        .await?;
    ctx.save().await?;

    if ctx.json {
        print_json(&workout)
    } else {
        display_workout(&workout);
        Ok(())
    }
}

/// Record this week's check-in
pub async fn checkin(
    ctx: &CommandContext,
    weight: Option<f64>,
    note: Option<String>,
    today: Option<NaiveDate>,
) -> AppResult<()> {
    let now = reference_time(today)?;
    let checkin = ctx.service.record_checkin(&now, weight, note).await?;
    ctx.save().await?;

    if ctx.json {
        print_json(&checkin)
    } else {
        display_checkin(&checkin);
        Ok(())
    }
}
