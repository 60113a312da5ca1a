// ABOUTME: Product-tuned constants for grading, adherence, and goal-mode target adjustment
// ABOUTME: Pure data constants grouped by domain; configuration defaults are seeded from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! Constants module
//!
//! The clamp bounds and step sizes below are product-tuned values with no derivation
//! behind them. They are kept verbatim and only ever reach the engine through
//! `EngineConfig`, which allows environment overrides.

/// Weekly consistency grading
pub mod grading {
    /// Workouts per week that earn full workout credit
    pub const WORKOUT_TARGET_PER_WEEK: u32 = 3;
    /// Protein-goal days per week that earn full protein credit
    pub const PROTEIN_DAYS_TARGET_PER_WEEK: u32 = 4;
    /// Steps-goal days per week that earn full steps credit
    pub const STEPS_DAYS_TARGET_PER_WEEK: u32 = 4;

    /// Share of the composite score contributed by workouts
    pub const WORKOUT_WEIGHT: f64 = 0.5;
    /// Share of the composite score contributed by protein days
    pub const PROTEIN_WEIGHT: f64 = 0.25;
    /// Share of the composite score contributed by steps days
    pub const STEPS_WEIGHT: f64 = 0.25;

    /// Minimum score for a Gold week
    pub const GOLD_THRESHOLD: f64 = 0.90;
    /// Minimum score for a Silver week
    pub const SILVER_THRESHOLD: f64 = 0.70;
    /// Minimum score for a Bronze week
    pub const BRONZE_THRESHOLD: f64 = 0.45;
}

/// Adherence classification shared by every goal mode
pub mod adherence {
    /// Workouts at or above this count mean good adherence
    pub const GOOD_MIN_WORKOUTS: u32 = 3;
    /// Steps-goal days at or above this count mean good adherence
    pub const GOOD_MIN_STEPS_DAYS: u32 = 3;
    /// Workouts at or below this count (with low steps days) mean low adherence
    pub const LOW_MAX_WORKOUTS: u32 = 1;
    /// Steps-goal days at or below this count (with low workouts) mean low adherence
    pub const LOW_MAX_STEPS_DAYS: u32 = 1;
    /// Protein-goal days at or below this count mean the protein goal was too hard
    pub const STRUGGLING_MAX_PROTEIN_DAYS: u32 = 1;
}

/// Fat loss: target a weekly loss of 0.3% to 0.7% of body weight
pub mod fat_loss {
    /// Weekly change below this fraction of body weight is losing too fast
    pub const FAST_LOSS_PCT: f64 = -0.007;
    /// Weekly change at or below this fraction (and not too fast) is on pace
    pub const SLOW_LOSS_PCT: f64 = -0.003;
    /// Daily steps increase when loss stalls
    pub const STEPS_INCREASE: u32 = 500;
    /// Daily steps decrease when losing too fast
    pub const STEPS_DECREASE: u32 = 500;
    /// Steps-goal days needed to progress without weight data
    pub const PROGRESS_MIN_STEPS_DAYS: u32 = 4;
    /// Protein floor when the goal proved unmanageable
    pub const PROTEIN_FLOOR_G: u32 = 100;
    /// Protein ceiling when bumping for muscle retention
    pub const PROTEIN_CEILING_G: u32 = 160;
    /// Protein decrease when the goal proved unmanageable
    pub const PROTEIN_DECREASE_G: u32 = 10;
    /// Protein increase when consistently hit
    pub const PROTEIN_INCREASE_G: u32 = 5;
    /// Protein-goal days needed before bumping protein
    pub const PROTEIN_BUMP_MIN_DAYS: u32 = 5;
}

/// Lean gain: target a weekly gain of 0.1% to 0.4% of body weight
pub mod lean_gain {
    /// Weekly change above this fraction of body weight is gaining too fast
    pub const FAST_GAIN_PCT: f64 = 0.004;
    /// Weekly change at or above this fraction (and not too fast) is on pace
    pub const SLOW_GAIN_PCT: f64 = 0.001;
    /// Daily steps increase when gaining too fast
    pub const STEPS_INCREASE: u32 = 1000;
    /// Protein increase when weight is not going up
    pub const PROTEIN_INCREASE_G: u32 = 10;
    /// Protein ceiling for lean gain
    pub const PROTEIN_CEILING_G: u32 = 180;
    /// Steps above which a missed steps week triggers a recovery decrease
    pub const RECOVERY_STEPS_TRIGGER: u32 = 5000;
    /// Steps floor for the recovery decrease
    pub const RECOVERY_STEPS_FLOOR: u32 = 4000;
    /// Daily steps decrease to protect recovery
    pub const STEPS_DECREASE: u32 = 500;
}

/// Maintenance: keep weight inside a ±0.25% weekly deadband
pub mod maintenance {
    /// Half-width of the deadband as a fraction of body weight
    pub const DEADBAND_PCT: f64 = 0.0025;
    /// Daily steps increase when drifting up
    pub const STEPS_INCREASE: u32 = 1000;
    /// Daily steps decrease when drifting down or when steps were hard
    pub const STEPS_DECREASE: u32 = 500;
    /// Protein floor for maintenance
    pub const PROTEIN_FLOOR_G: u32 = 80;
    /// Protein decrease when the goal proved unmanageable
    pub const PROTEIN_DECREASE_G: u32 = 10;
}

/// Hard limits on daily targets
pub mod limits {
    /// No steps goal is ever proposed below this
    pub const STEPS_FLOOR: u32 = 3000;
    /// No steps goal is ever proposed above this
    pub const STEPS_CEILING: u32 = 20000;
    /// Weeks shown on the progress scoreboard
    pub const DEFAULT_REPORT_WEEKS: usize = 4;
    /// Upper bound accepted for a report window count
    pub const MAX_REPORT_WEEKS: usize = 104;
}

/// Starting values for a freshly created goal profile
pub mod defaults {
    /// Default daily protein goal in grams
    pub const PROTEIN_GOAL_G: u32 = 120;
    /// Default daily steps goal
    pub const STEPS_GOAL: u32 = 8000;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const LEANLOOP_CLI: &str = "leanloop-cli";
}

/// Snapshot persistence
pub mod storage {
    /// Snapshot file used when no path is given
    pub const DEFAULT_SNAPSHOT_PATH: &str = "leanloop.json";
    /// Current snapshot format version
    pub const SNAPSHOT_VERSION: u32 = 1;
}
