// ABOUTME: Adaptive next-week target engine branching on goal mode and observed weight trend
// ABOUTME: Shares delta and adherence helpers across per-mode strategies, then applies the guard rail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! # Adjustment Engine
//!
//! Given this week's stats, the active goal profile, the goal mode, and the weights
//! from this week's and last week's check-ins, proposes next week's protein and steps
//! goals with an ordered list of reasons. Nothing is written anywhere: applying the
//! proposal is an explicit, separate action by the caller.
//!
//! Flow: build an [`AdjustmentContext`] → dispatch to the goal mode's
//! [`GoalModeStrategy`] → run the [`GuardRail`] → freeze into an `AdjustmentResult`.

mod guard_rail;
mod strategies;

pub use guard_rail::GuardRail;
pub use strategies::{
    strategy_for, FatLossStrategy, GoalModeStrategy, LeanGainStrategy, MaintenanceStrategy,
};

use crate::config::{AdherenceConfig, EngineConfig};
use leanloop_core::models::{AdjustmentResult, GoalMode, GoalProfile, WeeklyStats};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the engine needs for one proposal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentInput {
    /// Stats for the week just finished (or in progress)
    pub this_week: WeeklyStats,
    /// Goals currently in force
    pub goals: GoalProfile,
    /// Weight from this week's check-in
    pub curr_weight_kg: Option<f64>,
    /// Weight from last week's check-in
    pub prev_weight_kg: Option<f64>,
    /// Active goal mode
    pub goal: GoalMode,
}

/// How consistent the user was this week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adherence {
    /// Enough workouts or steps days to justify progressing
    pub good: bool,
    /// Too few workouts and steps days to justify any increase
    pub low: bool,
}

impl Adherence {
    /// Classify the week
    #[must_use]
    pub const fn classify(stats: &WeeklyStats, config: &AdherenceConfig) -> Self {
        Self {
            good: stats.workouts_completed >= config.good_min_workouts
                || stats.steps_days_hit >= config.good_min_steps_days,
            low: stats.workouts_completed <= config.low_max_workouts
                && stats.steps_days_hit <= config.low_max_steps_days,
        }
    }
}

/// Week-over-week weight change with a usable baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Change in kilograms, current minus previous
    pub delta_kg: f64,
    /// Previous weight, always positive
    pub previous_kg: f64,
}

impl WeightTrend {
    /// Change as a fraction of the previous weight
    #[must_use]
    pub fn pct_change(&self) -> f64 {
        self.delta_kg / self.previous_kg
    }
}

/// Derived terms shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentContext {
    /// Steps goal in force this week
    pub current_steps: u32,
    /// Protein goal in force this week
    pub current_protein: u32,
    /// Workouts completed this week
    pub workouts_completed: u32,
    /// Protein-goal days this week
    pub protein_days_hit: u32,
    /// Steps-goal days this week
    pub steps_days_hit: u32,
    /// `curr - prev` when both weights are known
    pub delta_kg: Option<f64>,
    /// Weight from last week's check-in
    pub prev_weight_kg: Option<f64>,
    /// Adherence classification
    pub adherence: Adherence,
}

impl AdjustmentContext {
    /// Build the shared terms for `input`
    #[must_use]
    pub fn new(input: &AdjustmentInput, adherence: &AdherenceConfig) -> Self {
        let delta_kg = match (input.curr_weight_kg, input.prev_weight_kg) {
            (Some(curr), Some(prev)) => Some(curr - prev),
            _ => None,
        };
        Self {
            current_steps: input.goals.steps_goal_per_day,
            current_protein: input.goals.protein_goal_grams_per_day,
            workouts_completed: input.this_week.workouts_completed,
            protein_days_hit: input.this_week.protein_days_hit,
            steps_days_hit: input.this_week.steps_days_hit,
            delta_kg,
            prev_weight_kg: input.prev_weight_kg,
            adherence: Adherence::classify(&input.this_week, adherence),
        }
    }

    /// Weight trend when the delta is known and the baseline is positive
    #[must_use]
    pub fn weight_trend(&self) -> Option<WeightTrend> {
        match (self.delta_kg, self.prev_weight_kg) {
            (Some(delta_kg), Some(previous_kg)) if previous_kg > 0.0 => Some(WeightTrend {
                delta_kg,
                previous_kg,
            }),
            _ => None,
        }
    }
}

/// Mutable proposal threaded through a strategy and the guard rail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPlan {
    /// Proposed steps goal
    pub next_steps: u32,
    /// Proposed protein goal
    pub next_protein: u32,
    /// Reasons in the order rules fired
    pub reasons: Vec<String>,
}

impl TargetPlan {
    /// Plan that keeps the current goals
    #[must_use]
    pub const fn unchanged(ctx: &AdjustmentContext) -> Self {
        Self {
            next_steps: ctx.current_steps,
            next_protein: ctx.current_protein,
            reasons: Vec::new(),
        }
    }

    /// Record a reason
    pub fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }
}

/// Next-week target engine
#[derive(Debug, Clone)]
pub struct AdjustmentEngine {
    config: EngineConfig,
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustmentEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().clone())
    }

    /// Engine with explicit configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Propose next week's targets
    #[must_use]
    pub fn compute_adjustment(
        &self,
        this_week: &WeeklyStats,
        goals: &GoalProfile,
        curr_weight_kg: Option<f64>,
        prev_weight_kg: Option<f64>,
        goal: GoalMode,
    ) -> AdjustmentResult {
        self.compute(&AdjustmentInput {
            this_week: *this_week,
            goals: *goals,
            curr_weight_kg,
            prev_weight_kg,
            goal,
        })
    }

    /// Propose next week's targets from a bundled input
    #[must_use]
    pub fn compute(&self, input: &AdjustmentInput) -> AdjustmentResult {
        let ctx = AdjustmentContext::new(input, &self.config.adherence);
        let strategy = strategy_for(input.goal);

        let mut plan = strategy.adjust(&ctx, &self.config);
        let clamped = GuardRail::apply(&ctx, &mut plan);

        debug!(
            goal = %input.goal,
            week_start = %input.this_week.week_start,
            delta_kg = ?ctx.delta_kg,
            adherence_good = ctx.adherence.good,
            adherence_low = ctx.adherence.low,
            guard_rail_clamped = clamped,
            next_steps = plan.next_steps,
            next_protein = plan.next_protein,
            "Computed next-week targets"
        );

        AdjustmentResult {
            next_protein_goal_grams_per_day: plan.next_protein,
            next_steps_goal_per_day: plan.next_steps,
            weight_delta_kg: ctx.delta_kg,
            reasons: plan.reasons,
        }
    }
}
