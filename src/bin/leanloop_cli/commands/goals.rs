// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Goal profile and goal mode command
// ABOUTME: Shows the current goals when called without changes

use super::CommandContext;
use crate::helpers::display::{display_goals, print_json};
use leanloop::data_store::FitnessDataStore;
use leanloop::errors::AppResult;
use leanloop::models::GoalMode;
use serde_json::json;

/// Show or update the goal profile and goal mode
///
/// A target left out keeps its stored value.
pub async fn goals(
    ctx: &CommandContext,
    protein: Option<f64>,
    steps: Option<f64>,
    mode: Option<GoalMode>,
) -> AppResult<()> {
    let store = ctx.service.store();
    let mut goals = store.get_goal_profile().await?;
    let changed = protein.is_some() || steps.is_some() || mode.is_some();

    if protein.is_some() || steps.is_some() {
        goals = ctx
            .service
            .update_goals(
                protein.unwrap_or_else(|| f64::from(goals.protein_goal_grams_per_day)),
                steps.unwrap_or_else(|| f64::from(goals.steps_goal_per_day)),
            )
            .await?;
    }
    if let Some(mode) = mode {
        ctx.service.set_goal_mode(mode).await?;
    }
    if changed {
        ctx.save().await?;
    }

    let mode = store.get_goal_mode().await?;
    if ctx.json {
        print_json(&json!({ "goal_mode": mode, "goals": goals }))
    } else {
        display_goals(&goals, Some(mode));
        Ok(())
    }
}
