// ABOUTME: Engine configuration for grading and next-week target adjustment
// ABOUTME: Orchestrates domain configs and provides environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! Engine Configuration Module
//!
//! - `grading` - Weekly targets, weights, and grade thresholds
//! - `adjustment` - Adherence thresholds, step limits, and per-goal-mode rules
//! - `error` - Validation and parse errors

pub mod adjustment;
pub mod error;
pub mod grading;

pub use adjustment::{
    AdherenceConfig, FatLossConfig, LeanGainConfig, MaintenanceConfig, TargetLimitsConfig,
};
pub use error::ConfigError;
pub use grading::{GradeThresholds, GradeWeights, GradingConfig, WeeklyTargets};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Tolerance when checking that grade weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weekly consistency grading
    pub grading: GradingConfig,
    /// Adherence classification shared by every goal mode
    pub adherence: AdherenceConfig,
    /// Hard limits on proposed steps goals
    pub limits: TargetLimitsConfig,
    /// Fat-loss adjustment rules
    pub fat_loss: FatLossConfig,
    /// Lean-gain adjustment rules
    pub lean_gain: LeanGainConfig,
    /// Maintenance adjustment rules
    pub maintenance: MaintenanceConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_grading()?;
        self.validate_limits()?;
        self.validate_goal_modes()
    }

    fn validate_grading(&self) -> Result<(), ConfigError> {
        let grading = &self.grading;
        if grading.targets.workouts == 0
            || grading.targets.protein_days == 0
            || grading.targets.steps_days == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "weekly grading targets must be at least 1",
            ));
        }
        if grading.targets.protein_days > 7 || grading.targets.steps_days > 7 {
            return Err(ConfigError::ValueOutOfRange(
                "weekly habit-day targets cannot exceed 7",
            ));
        }

        let weights = &grading.weights;
        if weights.workouts < 0.0 || weights.protein < 0.0 || weights.steps < 0.0 {
            return Err(ConfigError::InvalidWeights("grade weights must not be negative"));
        }
        if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("grade weights must sum to 1.0"));
        }

        let thresholds = &grading.thresholds;
        if !(0.0 < thresholds.bronze
            && thresholds.bronze < thresholds.silver
            && thresholds.silver < thresholds.gold
            && thresholds.gold <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "grade thresholds must satisfy 0 < bronze < silver < gold <= 1",
            ));
        }
        Ok(())
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        if self.limits.steps_floor == 0 || self.limits.steps_floor >= self.limits.steps_ceiling {
            return Err(ConfigError::InvalidRange(
                "steps_floor must be positive and below steps_ceiling",
            ));
        }
        if self.adherence.low_max_workouts >= self.adherence.good_min_workouts
            || self.adherence.low_max_steps_days >= self.adherence.good_min_steps_days
        {
            return Err(ConfigError::InvalidRange(
                "low adherence thresholds must be below good adherence thresholds",
            ));
        }
        Ok(())
    }

    fn validate_goal_modes(&self) -> Result<(), ConfigError> {
        let fat_loss = &self.fat_loss;
        if !(fat_loss.fast_loss_pct < fat_loss.slow_loss_pct && fat_loss.slow_loss_pct < 0.0) {
            return Err(ConfigError::InvalidRange(
                "fat loss pace band must satisfy fast_loss_pct < slow_loss_pct < 0",
            ));
        }
        if fat_loss.protein_floor_g == 0 || fat_loss.protein_floor_g >= fat_loss.protein_ceiling_g
        {
            return Err(ConfigError::InvalidRange(
                "fat loss protein floor must be positive and below its ceiling",
            ));
        }

        let lean_gain = &self.lean_gain;
        if !(0.0 < lean_gain.slow_gain_pct && lean_gain.slow_gain_pct < lean_gain.fast_gain_pct) {
            return Err(ConfigError::InvalidRange(
                "lean gain pace band must satisfy 0 < slow_gain_pct < fast_gain_pct",
            ));
        }
        if lean_gain.recovery_steps_floor == 0
            || lean_gain.recovery_steps_floor >= lean_gain.recovery_steps_trigger
        {
            return Err(ConfigError::InvalidRange(
                "lean gain recovery floor must be positive and below its trigger",
            ));
        }

        let maintenance = &self.maintenance;
        if !(maintenance.deadband_pct > 0.0 && maintenance.deadband_pct < 0.05) {
            return Err(ConfigError::ValueOutOfRange(
                "maintenance deadband must be between 0 and 5% of body weight",
            ));
        }
        if maintenance.protein_floor_g == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "maintenance protein floor must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Grading overrides
        Self::apply_env_var(
            "LEANLOOP_GRADE_WORKOUT_TARGET",
            &mut self.grading.targets.workouts,
        )?;
        Self::apply_env_var(
            "LEANLOOP_GRADE_PROTEIN_DAYS_TARGET",
            &mut self.grading.targets.protein_days,
        )?;
        Self::apply_env_var(
            "LEANLOOP_GRADE_STEPS_DAYS_TARGET",
            &mut self.grading.targets.steps_days,
        )?;
        Self::apply_env_var("LEANLOOP_GRADE_GOLD", &mut self.grading.thresholds.gold)?;
        Self::apply_env_var("LEANLOOP_GRADE_SILVER", &mut self.grading.thresholds.silver)?;
        Self::apply_env_var("LEANLOOP_GRADE_BRONZE", &mut self.grading.thresholds.bronze)?;

        // Step limits
        Self::apply_env_var("LEANLOOP_STEPS_FLOOR", &mut self.limits.steps_floor)?;
        Self::apply_env_var("LEANLOOP_STEPS_CEILING", &mut self.limits.steps_ceiling)?;

        // Fat loss overrides
        Self::apply_env_var(
            "LEANLOOP_FAT_LOSS_FAST_PCT",
            &mut self.fat_loss.fast_loss_pct,
        )?;
        Self::apply_env_var(
            "LEANLOOP_FAT_LOSS_SLOW_PCT",
            &mut self.fat_loss.slow_loss_pct,
        )?;
        Self::apply_env_var(
            "LEANLOOP_FAT_LOSS_PROTEIN_FLOOR",
            &mut self.fat_loss.protein_floor_g,
        )?;
        Self::apply_env_var(
            "LEANLOOP_FAT_LOSS_PROTEIN_CEILING",
            &mut self.fat_loss.protein_ceiling_g,
        )?;

        // Lean gain overrides
        Self::apply_env_var(
            "LEANLOOP_LEAN_GAIN_FAST_PCT",
            &mut self.lean_gain.fast_gain_pct,
        )?;
        Self::apply_env_var(
            "LEANLOOP_LEAN_GAIN_SLOW_PCT",
            &mut self.lean_gain.slow_gain_pct,
        )?;
        Self::apply_env_var(
            "LEANLOOP_LEAN_GAIN_PROTEIN_CEILING",
            &mut self.lean_gain.protein_ceiling_g,
        )?;

        // Maintenance overrides
        Self::apply_env_var(
            "LEANLOOP_MAINTENANCE_DEADBAND_PCT",
            &mut self.maintenance.deadband_pct,
        )?;
        Self::apply_env_var(
            "LEANLOOP_MAINTENANCE_PROTEIN_FLOOR",
            &mut self.maintenance.protein_floor_g,
        )?;

        Ok(self)
    }
}
