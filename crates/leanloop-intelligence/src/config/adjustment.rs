// ABOUTME: Adjustment configuration: adherence thresholds, target limits, and per-goal-mode rules
// ABOUTME: Pace bands, step and protein increments, floors, and ceilings for each goal mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! Adjustment Configuration
//!
//! Every number the adjustment rules branch on lives here. Defaults come from
//! `leanloop_core::constants` so the tuned values are written down exactly once.

use leanloop_core::constants::{adherence, fat_loss, lean_gain, limits, maintenance};
use serde::{Deserialize, Serialize};

/// Adherence classification thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Workouts at or above this mean good adherence
    pub good_min_workouts: u32,
    /// Steps days at or above this mean good adherence
    pub good_min_steps_days: u32,
    /// Workouts at or below this (with low steps days) mean low adherence
    pub low_max_workouts: u32,
    /// Steps days at or below this (with low workouts) mean low adherence
    pub low_max_steps_days: u32,
    /// Protein days at or below this mean the protein goal was too hard
    pub struggling_max_protein_days: u32,
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            good_min_workouts: adherence::GOOD_MIN_WORKOUTS,
            good_min_steps_days: adherence::GOOD_MIN_STEPS_DAYS,
            low_max_workouts: adherence::LOW_MAX_WORKOUTS,
            low_max_steps_days: adherence::LOW_MAX_STEPS_DAYS,
            struggling_max_protein_days: adherence::STRUGGLING_MAX_PROTEIN_DAYS,
        }
    }
}

/// Hard limits on proposed steps goals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLimitsConfig {
    /// Lowest steps goal ever proposed by a decrease
    pub steps_floor: u32,
    /// Highest steps goal ever proposed by an increase
    pub steps_ceiling: u32,
}

impl Default for TargetLimitsConfig {
    fn default() -> Self {
        Self {
            steps_floor: limits::STEPS_FLOOR,
            steps_ceiling: limits::STEPS_CEILING,
        }
    }
}

/// Fat-loss rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatLossConfig {
    /// Weekly change below this fraction is losing too fast
    pub fast_loss_pct: f64,
    /// Weekly change at or below this fraction is on pace
    pub slow_loss_pct: f64,
    /// Steps added when loss stalls
    pub steps_increase: u32,
    /// Steps removed when losing too fast
    pub steps_decrease: u32,
    /// Steps days needed to progress without weight data
    pub progress_min_steps_days: u32,
    /// Protein floor
    pub protein_floor_g: u32,
    /// Protein ceiling
    pub protein_ceiling_g: u32,
    /// Protein removed when the goal was unmanageable
    pub protein_decrease_g: u32,
    /// Protein added when consistently hit
    pub protein_increase_g: u32,
    /// Protein days needed before adding protein
    pub protein_bump_min_days: u32,
}

impl Default for FatLossConfig {
    fn default() -> Self {
        Self {
            fast_loss_pct: fat_loss::FAST_LOSS_PCT,
            slow_loss_pct: fat_loss::SLOW_LOSS_PCT,
            steps_increase: fat_loss::STEPS_INCREASE,
            steps_decrease: fat_loss::STEPS_DECREASE,
            progress_min_steps_days: fat_loss::PROGRESS_MIN_STEPS_DAYS,
            protein_floor_g: fat_loss::PROTEIN_FLOOR_G,
            protein_ceiling_g: fat_loss::PROTEIN_CEILING_G,
            protein_decrease_g: fat_loss::PROTEIN_DECREASE_G,
            protein_increase_g: fat_loss::PROTEIN_INCREASE_G,
            protein_bump_min_days: fat_loss::PROTEIN_BUMP_MIN_DAYS,
        }
    }
}

/// Lean-gain rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeanGainConfig {
    /// Weekly change above this fraction is gaining too fast
    pub fast_gain_pct: f64,
    /// Weekly change at or above this fraction is on pace
    pub slow_gain_pct: f64,
    /// Steps added when gaining too fast
    pub steps_increase: u32,
    /// Protein added when weight is not going up
    pub protein_increase_g: u32,
    /// Protein ceiling
    pub protein_ceiling_g: u32,
    /// Steps goal above which a missed steps week triggers a decrease
    pub recovery_steps_trigger: u32,
    /// Floor for the recovery decrease
    pub recovery_steps_floor: u32,
    /// Steps removed to protect recovery
    pub steps_decrease: u32,
}

impl Default for LeanGainConfig {
    fn default() -> Self {
        Self {
            fast_gain_pct: lean_gain::FAST_GAIN_PCT,
            slow_gain_pct: lean_gain::SLOW_GAIN_PCT,
            steps_increase: lean_gain::STEPS_INCREASE,
            protein_increase_g: lean_gain::PROTEIN_INCREASE_G,
            protein_ceiling_g: lean_gain::PROTEIN_CEILING_G,
            recovery_steps_trigger: lean_gain::RECOVERY_STEPS_TRIGGER,
            recovery_steps_floor: lean_gain::RECOVERY_STEPS_FLOOR,
            steps_decrease: lean_gain::STEPS_DECREASE,
        }
    }
}

/// Maintenance rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Deadband half-width as a fraction of body weight
    pub deadband_pct: f64,
    /// Steps added when drifting up
    pub steps_increase: u32,
    /// Steps removed when drifting down or when steps were hard
    pub steps_decrease: u32,
    /// Protein floor
    pub protein_floor_g: u32,
    /// Protein removed when the goal was unmanageable
    pub protein_decrease_g: u32,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            deadband_pct: maintenance::DEADBAND_PCT,
            steps_increase: maintenance::STEPS_INCREASE,
            steps_decrease: maintenance::STEPS_DECREASE,
            protein_floor_g: maintenance::PROTEIN_FLOOR_G,
            protein_decrease_g: maintenance::PROTEIN_DECREASE_G,
        }
    }
}
