// ABOUTME: Grading configuration for the weekly consistency score
// ABOUTME: Weekly targets, metric weights, and grade thresholds seeded from core constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! Grading Configuration
//!
//! Each metric is normalized against its weekly target and capped at 1.0, then the
//! weighted sum is compared against descending grade thresholds.

use leanloop_core::constants::grading;
use serde::{Deserialize, Serialize};

/// Grading configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Weekly targets that earn full credit
    pub targets: WeeklyTargets,
    /// Share of the score per metric
    pub weights: GradeWeights,
    /// Minimum score per grade
    pub thresholds: GradeThresholds,
}

/// Weekly targets for full credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTargets {
    /// Workouts per week
    pub workouts: u32,
    /// Protein-goal days per week
    pub protein_days: u32,
    /// Steps-goal days per week
    pub steps_days: u32,
}

/// Metric weights in the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeWeights {
    /// Workout weight
    pub workouts: f64,
    /// Protein weight
    pub protein: f64,
    /// Steps weight
    pub steps: f64,
}

/// Score thresholds for each grade above Starter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Gold threshold
    pub gold: f64,
    /// Silver threshold
    pub silver: f64,
    /// Bronze threshold
    pub bronze: f64,
}

impl Default for WeeklyTargets {
    fn default() -> Self {
        Self {
            workouts: grading::WORKOUT_TARGET_PER_WEEK,
            protein_days: grading::PROTEIN_DAYS_TARGET_PER_WEEK,
            steps_days: grading::STEPS_DAYS_TARGET_PER_WEEK,
        }
    }
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            workouts: grading::WORKOUT_WEIGHT,
            protein: grading::PROTEIN_WEIGHT,
            steps: grading::STEPS_WEIGHT,
        }
    }
}

impl GradeWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.workouts + self.protein + self.steps
    }
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            gold: grading::GOLD_THRESHOLD,
            silver: grading::SILVER_THRESHOLD,
            bronze: grading::BRONZE_THRESHOLD,
        }
    }
}
