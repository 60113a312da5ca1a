// ABOUTME: Weekly consistency grader mapping workout and habit counts to an ordinal grade
// ABOUTME: Rewards partial effort with capped, weighted ratios instead of all-or-nothing streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use crate::config::{EngineConfig, GradingConfig};
use leanloop_core::models::{ConsistencyGrade, WeeklyStats};
use serde::{Deserialize, Serialize};

/// Counters the grade is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInput {
    /// Completed workouts
    pub workouts_completed: u32,
    /// Days at or above the protein goal
    pub protein_days_hit: u32,
    /// Days at or above the steps goal
    pub steps_days_hit: u32,
}

impl From<&WeeklyStats> for GradeInput {
    fn from(stats: &WeeklyStats) -> Self {
        Self {
            workouts_completed: stats.workouts_completed,
            protein_days_hit: stats.protein_days_hit,
            steps_days_hit: stats.steps_days_hit,
        }
    }
}

/// Consistency grader
#[derive(Debug, Clone)]
pub struct Grader {
    config: GradingConfig,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new()
    }
}

impl Grader {
    /// Grader using the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().grading.clone())
    }

    /// Grader with explicit configuration
    #[must_use]
    pub const fn with_config(config: GradingConfig) -> Self {
        Self { config }
    }

    /// Composite score in `[0, 1]`
    #[must_use]
    pub fn score(&self, input: GradeInput) -> f64 {
        let targets = &self.config.targets;
        let weights = &self.config.weights;

        weights.workouts * capped_ratio(input.workouts_completed, targets.workouts)
            + weights.protein * capped_ratio(input.protein_days_hit, targets.protein_days)
            + weights.steps * capped_ratio(input.steps_days_hit, targets.steps_days)
    }

    /// Grade for the given counters
    #[must_use]
    pub fn grade(&self, input: GradeInput) -> ConsistencyGrade {
        self.grade_score(self.score(input))
    }

    /// Grade for an already computed score
    #[must_use]
    pub fn grade_score(&self, score: f64) -> ConsistencyGrade {
        let thresholds = &self.config.thresholds;
        if score >= thresholds.gold {
            ConsistencyGrade::Gold
        } else if score >= thresholds.silver {
            ConsistencyGrade::Silver
        } else if score >= thresholds.bronze {
            ConsistencyGrade::Bronze
        } else {
            ConsistencyGrade::Starter
        }
    }

    /// Weekly targets the score is normalized against
    #[must_use]
    pub const fn config(&self) -> &GradingConfig {
        &self.config
    }
}

/// `count / target` capped at 1.0; a zero target always earns full credit
fn capped_ratio(count: u32, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (f64::from(count) / f64::from(target)).min(1.0)
}
