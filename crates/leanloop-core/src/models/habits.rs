// ABOUTME: Daily habit log model for protein intake and step count
// ABOUTME: Distinguishes "not logged" (None) from a logged zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use crate::errors::AppResult;
use crate::validation::validate_habit_amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of habit tracking. At most one row exists per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHabitLog {
    /// Civil date the log belongs to
    pub date: NaiveDate,
    /// Protein eaten in grams, `None` when not logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<f64>,
    /// Steps walked, `None` when not logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
}

impl DailyHabitLog {
    /// Build a validated habit log
    ///
    /// # Errors
    ///
    /// Returns an error if either amount is negative or not finite
    pub fn new(date: NaiveDate, protein_grams: Option<f64>, steps: Option<f64>) -> AppResult<Self> {
        if let Some(protein) = protein_grams {
            validate_habit_amount("protein_grams", protein)?;
        }
        if let Some(steps) = steps {
            validate_habit_amount("steps", steps)?;
        }
        Ok(Self {
            date,
            protein_grams,
            steps,
        })
    }

    /// Whether the protein goal was reached on this day
    #[must_use]
    pub fn protein_hit(&self, goal_grams: u32) -> bool {
        self.protein_grams
            .is_some_and(|grams| grams >= f64::from(goal_grams))
    }

    /// Whether the steps goal was reached on this day
    #[must_use]
    pub fn steps_hit(&self, goal_steps: u32) -> bool {
        self.steps.is_some_and(|steps| steps >= f64::from(goal_steps))
    }
}
