// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Weekly report, adjustment preview, and adjustment apply commands
// ABOUTME: Apply recomputes the proposal and writes it to the stored goal profile

use super::CommandContext;
use crate::helpers::clock::reference_time;
use crate::helpers::display::{display_adjustment, display_goals, display_report, print_json};
use chrono::NaiveDate;
use leanloop::errors::AppResult;
use leanloop::models::GoalMode;
use tracing::info;

/// Print the weekly scoreboard
pub async fn report(ctx: &CommandContext, weeks: usize, today: Option<NaiveDate>) -> AppResult<()> {
    let now = reference_time(today)?;
    let report = ctx.service.weekly_report(&now, weeks).await?;
    if ctx.json {
        print_json(&report)
    } else {
        display_report(&report, &ctx.targets);
        Ok(())
    }
}

/// Preview next week's targets without changing anything
pub async fn adjust(
    ctx: &CommandContext,
    goal: Option<GoalMode>,
    today: Option<NaiveDate>,
) -> AppResult<()> {
    let now = reference_time(today)?;
    let adjustment = ctx.service.weekly_adjustment(&now, goal).await?;
    if ctx.json {
        print_json(&adjustment)
    } else {
        display_adjustment(&adjustment, &ctx.targets);
        Ok(())
    }
}

/// Compute next week's targets and write them to the goal profile
pub async fn apply(
    ctx: &CommandContext,
    goal: Option<GoalMode>,
    today: Option<NaiveDate>,
) -> AppResult<()> {
    let now = reference_time(today)?;
    let adjustment = ctx.service.weekly_adjustment(&now, goal).await?;

    if !adjustment.result.changes(&adjustment.current_goals) {
        info!("Proposal matches current goals, nothing to write");
        if ctx.json {
            return print_json(&adjustment.current_goals);
        }
        println!("Targets unchanged.");
        display_goals(&adjustment.current_goals, Some(adjustment.goal));
        return Ok(());
    }

    let goals = ctx.service.apply_adjustment(&adjustment.result).await?;
    ctx.save().await?;

    if ctx.json {
        print_json(&goals)
    } else {
        println!("Applied next-week targets.");
        display_goals(&goals, Some(adjustment.goal));
        Ok(())
    }
}
