// ABOUTME: Per-goal-mode adjustment strategies for fat loss, maintenance, and lean gain
// ABOUTME: Each strategy reads the shared context and proposes steps and protein targets with reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use super::{AdjustmentContext, TargetPlan};
use crate::config::{EngineConfig, TargetLimitsConfig};
use leanloop_core::models::GoalMode;
use tracing::debug;

/// Adjustment rules for one goal mode
///
/// Rules within a metric are ordered and mutually exclusive; every rule that fires
/// records a reason. The guard rail runs after the strategy, never inside it.
pub trait GoalModeStrategy: Send + Sync {
    /// Goal mode this strategy serves
    fn mode(&self) -> GoalMode;

    /// Propose next week's targets
    fn adjust(&self, ctx: &AdjustmentContext, config: &EngineConfig) -> TargetPlan;
}

/// Strategy for `goal`
#[must_use]
pub fn strategy_for(goal: GoalMode) -> &'static dyn GoalModeStrategy {
    match goal {
        GoalMode::FatLoss => &FatLossStrategy,
        GoalMode::Maintenance => &MaintenanceStrategy,
        GoalMode::LeanGain => &LeanGainStrategy,
    }
}

fn raise(current: u32, by: u32, ceiling: u32) -> u32 {
    current.saturating_add(by).min(ceiling)
}

fn lower(current: u32, by: u32, floor: u32) -> u32 {
    current.saturating_sub(by).max(floor)
}

fn raise_steps(current: u32, by: u32, limits: &TargetLimitsConfig) -> u32 {
    raise(current, by, limits.steps_ceiling)
}

fn lower_steps(current: u32, by: u32, limits: &TargetLimitsConfig) -> u32 {
    lower(current, by, limits.steps_floor)
}

fn percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Aim for a 0.3% to 0.7% weekly loss of body weight while protecting muscle
#[derive(Debug, Clone, Copy, Default)]
pub struct FatLossStrategy;

impl FatLossStrategy {
    fn adjust_steps(ctx: &AdjustmentContext, config: &EngineConfig, plan: &mut TargetPlan) {
        let rules = &config.fat_loss;
        let limits = &config.limits;

        if let Some(trend) = ctx.weight_trend() {
            let pct = trend.pct_change();
            debug!(pct, "Fat loss pace");
            if pct < rules.fast_loss_pct {
                plan.next_steps = lower_steps(ctx.current_steps, rules.steps_decrease, limits);
                plan.reason(format!(
                    "Weight is dropping faster than {:.1}% per week. Easing steps back by {} to protect muscle.",
                    percent(-rules.fast_loss_pct),
                    rules.steps_decrease
                ));
            } else if pct <= rules.slow_loss_pct {
                plan.reason("Weight loss is on track. Keep the same targets.");
            } else if ctx.adherence.good {
                plan.next_steps = raise_steps(ctx.current_steps, rules.steps_increase, limits);
                plan.reason(format!(
                    "Weight is not coming down enough. Adding {} steps per day.",
                    rules.steps_increase
                ));
            } else {
                plan.reason("Consistency first. Hit your current targets before raising them.");
            }
        } else if ctx.steps_days_hit >= rules.progress_min_steps_days && ctx.adherence.good {
            plan.next_steps = raise_steps(ctx.current_steps, rules.steps_increase, limits);
            plan.reason(format!(
                "Great adherence. Adding {} steps per day to keep the cut progressing.",
                rules.steps_increase
            ));
        } else {
            plan.reason("Keep the steps goal until there is a week of weight data.");
        }
    }

    fn adjust_protein(ctx: &AdjustmentContext, config: &EngineConfig, plan: &mut TargetPlan) {
        let rules = &config.fat_loss;
        let struggling = ctx.protein_days_hit <= config.adherence.struggling_max_protein_days;

        if struggling && ctx.current_protein > rules.protein_floor_g {
            plan.next_protein = lower(
                ctx.current_protein,
                rules.protein_decrease_g,
                rules.protein_floor_g,
            );
            plan.reason(format!(
                "The protein goal was very hard to hit. Dropping {}g to build consistency.",
                rules.protein_decrease_g
            ));
        } else if ctx.protein_days_hit >= rules.protein_bump_min_days
            && ctx.current_protein < rules.protein_ceiling_g
        {
            plan.next_protein = raise(
                ctx.current_protein,
                rules.protein_increase_g,
                rules.protein_ceiling_g,
            );
            plan.reason(format!(
                "Protein is hit consistently. Adding {}g to support muscle retention.",
                rules.protein_increase_g
            ));
        } else {
            plan.reason("Keep the protein goal the same.");
        }
    }
}

impl GoalModeStrategy for FatLossStrategy {
    fn mode(&self) -> GoalMode {
        GoalMode::FatLoss
    }

    fn adjust(&self, ctx: &AdjustmentContext, config: &EngineConfig) -> TargetPlan {
        let mut plan = TargetPlan::unchanged(ctx);
        Self::adjust_steps(ctx, config, &mut plan);
        Self::adjust_protein(ctx, config, &mut plan);
        plan
    }
}

/// Aim for a slow 0.1% to 0.4% weekly gain without pushing cardio too hard
#[derive(Debug, Clone, Copy, Default)]
pub struct LeanGainStrategy;

impl GoalModeStrategy for LeanGainStrategy {
    fn mode(&self) -> GoalMode {
        GoalMode::LeanGain
    }

    fn adjust(&self, ctx: &AdjustmentContext, config: &EngineConfig) -> TargetPlan {
        let rules = &config.lean_gain;
        let mut plan = TargetPlan::unchanged(ctx);

        if let Some(trend) = ctx.weight_trend() {
            let pct = trend.pct_change();
            debug!(pct, "Lean gain pace");
            if pct > rules.fast_gain_pct {
                plan.next_steps =
                    raise_steps(ctx.current_steps, rules.steps_increase, &config.limits);
                plan.reason(format!(
                    "Gaining faster than {:.1}% per week. Adding {} steps per day to keep fat gain in check.",
                    percent(rules.fast_gain_pct),
                    rules.steps_increase
                ));
            } else if pct >= rules.slow_gain_pct {
                plan.reason("Lean gain pace is right where it should be. Keep the same targets.");
            } else if ctx.current_protein < rules.protein_ceiling_g {
                plan.next_protein = raise(
                    ctx.current_protein,
                    rules.protein_increase_g,
                    rules.protein_ceiling_g,
                );
                plan.reason(format!(
                    "Weight is not going up. Adding {}g protein to support muscle growth.",
                    rules.protein_increase_g
                ));
            } else {
                plan.reason("Protein is already high. Focus on hitting the current targets.");
            }
        } else {
            plan.reason("Keep the targets until there is a week of weight data.");
        }

        if ctx.steps_days_hit <= config.adherence.low_max_steps_days
            && ctx.current_steps > rules.recovery_steps_trigger
        {
            plan.next_steps = lower(
                ctx.current_steps,
                rules.steps_decrease,
                rules.recovery_steps_floor,
            );
            plan.reason(format!(
                "The steps goal was hard to hit. Reducing it by {} so recovery stays on track.",
                rules.steps_decrease
            ));
        }

        plan
    }
}

/// Hold body weight inside a small weekly deadband
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceStrategy;

impl MaintenanceStrategy {
    fn adjust_steps(ctx: &AdjustmentContext, config: &EngineConfig, plan: &mut TargetPlan) {
        let rules = &config.maintenance;
        let limits = &config.limits;

        if let Some(trend) = ctx.weight_trend() {
            let deadband_kg = trend.previous_kg * rules.deadband_pct;
            debug!(delta_kg = trend.delta_kg, deadband_kg, "Maintenance drift");
            if trend.delta_kg.abs() <= deadband_kg {
                plan.reason("Weight is within the maintenance range. Keep the steps goal.");
            } else if trend.delta_kg > deadband_kg {
                if ctx.adherence.good {
                    plan.next_steps =
                        raise_steps(ctx.current_steps, rules.steps_increase, limits);
                    plan.reason(format!(
                        "Weight is drifting up. Adding {} steps per day.",
                        rules.steps_increase
                    ));
                } else {
                    plan.reason(
                        "Weight is drifting up. Focus on consistency first and keep the steps goal.",
                    );
                }
            } else {
                plan.next_steps = lower_steps(ctx.current_steps, rules.steps_decrease, limits);
                plan.reason(format!(
                    "Weight is drifting down. Removing {} steps per day to maintain.",
                    rules.steps_decrease
                ));
            }
        } else if ctx.steps_days_hit <= config.adherence.low_max_steps_days
            && ctx.current_steps > limits.steps_floor
        {
            plan.next_steps = lower_steps(ctx.current_steps, rules.steps_decrease, limits);
            plan.reason(format!(
                "The steps goal was hard to hit. Removing {} steps per day to make it doable.",
                rules.steps_decrease
            ));
        } else {
            plan.reason("Keep the steps goal for now.");
        }
    }
}

impl GoalModeStrategy for MaintenanceStrategy {
    fn mode(&self) -> GoalMode {
        GoalMode::Maintenance
    }

    fn adjust(&self, ctx: &AdjustmentContext, config: &EngineConfig) -> TargetPlan {
        let rules = &config.maintenance;
        let mut plan = TargetPlan::unchanged(ctx);
        Self::adjust_steps(ctx, config, &mut plan);

        if ctx.protein_days_hit <= config.adherence.struggling_max_protein_days
            && ctx.current_protein > rules.protein_floor_g
        {
            plan.next_protein = lower(
                ctx.current_protein,
                rules.protein_decrease_g,
                rules.protein_floor_g,
            );
            plan.reason(format!(
                "The protein goal was hard to hit. Dropping {}g to build consistency.",
                rules.protein_decrease_g
            ));
        } else {
            plan.reason("Keep the protein goal the same.");
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::AdjustmentInput;
    use chrono::NaiveDate;
    use leanloop_core::models::{ConsistencyGrade, GoalProfile, WeeklyStats};

    struct Case {
        workouts: u32,
        protein_hit: u32,
        steps_hit: u32,
        protein: u32,
        steps: u32,
        curr: Option<f64>,
        prev: Option<f64>,
    }

    impl Default for Case {
        fn default() -> Self {
            Self {
                workouts: 3,
                protein_hit: 3,
                steps_hit: 3,
                protein: 120,
                steps: 8000,
                curr: None,
                prev: None,
            }
        }
    }

    impl Case {
        fn weights(mut self, prev: f64, curr: f64) -> Self {
            self.prev = Some(prev);
            self.curr = Some(curr);
            self
        }

        fn run(&self, goal: GoalMode) -> TargetPlan {
            let config = EngineConfig::default();
            let input = AdjustmentInput {
                this_week: WeeklyStats {
                    week_start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                    week_end: NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(),
                    workouts_completed: self.workouts,
                    protein_days_logged: self.protein_hit,
                    protein_days_hit: self.protein_hit,
                    steps_days_logged: self.steps_hit,
                    steps_days_hit: self.steps_hit,
                    grade: ConsistencyGrade::Starter,
                },
                goals: GoalProfile::new(self.protein, self.steps).unwrap(),
                curr_weight_kg: self.curr,
                prev_weight_kg: self.prev,
                goal,
            };
            let ctx = AdjustmentContext::new(&input, &config.adherence);
            strategy_for(goal).adjust(&ctx, &config)
        }
    }

    #[test]
    fn test_strategy_dispatch_matches_mode() {
        for goal in GoalMode::ALL {
            assert_eq!(strategy_for(goal).mode(), goal);
        }
    }

    #[test]
    fn test_fat_loss_too_fast_eases_steps() {
        let plan = Case::default().weights(100.0, 99.2).run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 7500);
        assert!(plan.reasons[0].contains("faster than 0.7%"));
    }

    #[test]
    fn test_fat_loss_on_pace_keeps_steps() {
        let plan = Case::default().weights(100.0, 99.5).run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 8000);
        assert!(plan.reasons[0].contains("on track"));
    }

    #[test]
    fn test_fat_loss_stall_adds_steps_when_adherent() {
        let plan = Case::default().weights(100.0, 100.0).run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 8500);

        let plan = Case {
            workouts: 2,
            steps_hit: 2,
            ..Case::default()
        }
        .weights(100.0, 100.0)
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 8000);
        assert!(plan.reasons[0].starts_with("Consistency first"));
    }

    #[test]
    fn test_fat_loss_without_weights_needs_four_steps_days() {
        let plan = Case {
            steps_hit: 4,
            ..Case::default()
        }
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 8500);

        let plan = Case::default().run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 8000);
    }

    #[test]
    fn test_fat_loss_steps_respect_limits() {
        let plan = Case {
            steps: 3200,
            ..Case::default()
        }
        .weights(100.0, 98.0)
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 3000);

        let plan = Case {
            steps: 19_800,
            ..Case::default()
        }
        .weights(100.0, 100.0)
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_steps, 20_000);
    }

    #[test]
    fn test_fat_loss_protein_rules() {
        let plan = Case {
            protein_hit: 1,
            protein: 105,
            ..Case::default()
        }
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_protein, 100);

        let plan = Case {
            protein_hit: 5,
            protein: 158,
            ..Case::default()
        }
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_protein, 160);

        let plan = Case {
            protein_hit: 1,
            protein: 100,
            ..Case::default()
        }
        .run(GoalMode::FatLoss);
        assert_eq!(plan.next_protein, 100);
        assert_eq!(plan.reasons.last().unwrap(), "Keep the protein goal the same.");
    }

    #[test]
    fn test_lean_gain_branches() {
        let fast = Case::default().weights(80.0, 80.5).run(GoalMode::LeanGain);
        assert_eq!(fast.next_steps, 9000);

        let on_pace = Case::default().weights(80.0, 80.2).run(GoalMode::LeanGain);
        assert_eq!((on_pace.next_steps, on_pace.next_protein), (8000, 120));

        let stalled = Case::default().weights(80.0, 80.0).run(GoalMode::LeanGain);
        assert_eq!(stalled.next_protein, 130);

        let capped = Case {
            protein: 180,
            ..Case::default()
        }
        .weights(80.0, 79.5)
        .run(GoalMode::LeanGain);
        assert_eq!(capped.next_protein, 180);
        assert!(capped.reasons[0].starts_with("Protein is already high"));
    }

    #[test]
    fn test_lean_gain_without_weights_keeps_targets() {
        let plan = Case::default().run(GoalMode::LeanGain);
        assert_eq!((plan.next_steps, plan.next_protein), (8000, 120));
        assert!(plan.reasons[0].contains("week of weight data"));
    }

    #[test]
    fn test_lean_gain_recovery_reduction() {
        let plan = Case {
            steps_hit: 1,
            steps: 6000,
            ..Case::default()
        }
        .run(GoalMode::LeanGain);
        assert_eq!(plan.next_steps, 5500);
        assert_eq!(plan.reasons.len(), 2);

        let floored = Case {
            steps_hit: 0,
            steps: 4200,
            ..Case::default()
        }
        .run(GoalMode::LeanGain);
        assert_eq!(floored.next_steps, 4200);

        let near_floor = Case {
            steps_hit: 0,
            steps: 5100,
            ..Case::default()
        }
        .run(GoalMode::LeanGain);
        assert_eq!(near_floor.next_steps, 4600);
    }

    #[test]
    fn test_maintenance_drift_up_adds_steps() {
        let plan = Case::default().weights(80.0, 80.3).run(GoalMode::Maintenance);
        assert_eq!(plan.next_steps, 9000);

        let plan = Case {
            workouts: 2,
            steps_hit: 2,
            ..Case::default()
        }
        .weights(80.0, 80.3)
        .run(GoalMode::Maintenance);
        assert_eq!(plan.next_steps, 8000);
    }

    #[test]
    fn test_maintenance_deadband_and_drift_down() {
        let inside = Case::default().weights(80.0, 80.1).run(GoalMode::Maintenance);
        assert_eq!(inside.next_steps, 8000);

        let down = Case::default().weights(80.0, 79.5).run(GoalMode::Maintenance);
        assert_eq!(down.next_steps, 7500);
    }

    #[test]
    fn test_maintenance_without_weights() {
        let plan = Case {
            steps_hit: 1,
            ..Case::default()
        }
        .run(GoalMode::Maintenance);
        assert_eq!(plan.next_steps, 7500);

        let at_floor = Case {
            steps_hit: 0,
            steps: 3000,
            ..Case::default()
        }
        .run(GoalMode::Maintenance);
        assert_eq!(at_floor.next_steps, 3000);
    }

    #[test]
    fn test_maintenance_protein_floor() {
        let plan = Case {
            protein_hit: 0,
            protein: 85,
            ..Case::default()
        }
        .run(GoalMode::Maintenance);
        assert_eq!(plan.next_protein, 80);

        let plan = Case {
            protein_hit: 0,
            protein: 80,
            ..Case::default()
        }
        .run(GoalMode::Maintenance);
        assert_eq!(plan.next_protein, 80);
    }

    #[test]
    fn test_every_plan_has_reasons() {
        for goal in GoalMode::ALL {
            let plan = Case::default().run(goal);
            assert!(!plan.reasons.is_empty(), "{goal} produced no reasons");
        }
    }
}
