// ABOUTME: Weekly check-in model carrying the end-of-week body weight and a note
// ABOUTME: Also snapshots the week's workout and habit counters at check-in time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use super::WeeklyStats;
use crate::errors::AppResult;
use crate::validation::{validate_body_weight, validate_week_start};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One optional check-in per week. A missing check-in is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCheckin {
    /// Monday the check-in belongs to
    pub week_start: NaiveDate,
    /// End-of-week body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// Workouts completed when the check-in was recorded
    #[serde(default)]
    pub workouts_completed: u32,
    /// Protein-goal days when the check-in was recorded
    #[serde(default)]
    pub protein_goal_days: u32,
    /// Steps-goal days when the check-in was recorded
    #[serde(default)]
    pub steps_goal_days: u32,
}

impl WeeklyCheckin {
    /// Build a validated check-in with no counters
    ///
    /// # Errors
    ///
    /// Returns an error if `week_start` is not a Monday or the weight is invalid
    pub fn new(
        week_start: NaiveDate,
        weight_kg: Option<f64>,
        note: Option<String>,
    ) -> AppResult<Self> {
        validate_week_start(week_start)?;
        if let Some(weight) = weight_kg {
            validate_body_weight(weight)?;
        }
        Ok(Self {
            week_start,
            weight_kg,
            note: note.filter(|n| !n.trim().is_empty()),
            workouts_completed: 0,
            protein_goal_days: 0,
            steps_goal_days: 0,
        })
    }

    /// Build a check-in for the week described by `stats`, copying its counters
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is invalid
    pub fn for_week(
        stats: &WeeklyStats,
        weight_kg: Option<f64>,
        note: Option<String>,
    ) -> AppResult<Self> {
        let mut checkin = Self::new(stats.week_start, weight_kg, note)?;
        checkin.workouts_completed = stats.workouts_completed;
        checkin.protein_goal_days = stats.protein_days_hit;
        checkin.steps_goal_days = stats.steps_days_hit;
        Ok(checkin)
    }
}
