// ABOUTME: Goal profile (daily protein and steps targets) and the user's goal mode
// ABOUTME: GoalMode is a closed enumeration: fat loss, maintenance, or lean gain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::validation::validate_goal_value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Daily targets for one user. Changed only through an explicit apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Daily protein goal in grams
    pub protein_goal_grams_per_day: u32,
    /// Daily steps goal
    pub steps_goal_per_day: u32,
}

impl GoalProfile {
    /// Build a profile from whole-number targets
    ///
    /// # Errors
    ///
    /// Returns an error if either target is zero
    pub fn new(protein_goal_grams_per_day: u32, steps_goal_per_day: u32) -> AppResult<Self> {
        if protein_goal_grams_per_day == 0 {
            return Err(AppError::value_out_of_range(
                "protein_goal_grams_per_day",
                "Protein goal must be a positive number",
            ));
        }
        if steps_goal_per_day == 0 {
            return Err(AppError::value_out_of_range(
                "steps_goal_per_day",
                "Steps goal must be a positive number",
            ));
        }
        Ok(Self {
            protein_goal_grams_per_day,
            steps_goal_per_day,
        })
    }

    /// Build a profile from free-form numeric input, rounding to whole units
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not a positive finite number
    pub fn from_input(protein_goal: f64, steps_goal: f64) -> AppResult<Self> {
        let protein = validate_goal_value("protein_goal_grams_per_day", protein_goal)?;
        let steps = validate_goal_value("steps_goal_per_day", steps_goal)?;
        Self::new(protein, steps)
    }
}

impl Default for GoalProfile {
    fn default() -> Self {
        Self {
            protein_goal_grams_per_day: defaults::PROTEIN_GOAL_G,
            steps_goal_per_day: defaults::STEPS_GOAL,
        }
    }
}

/// The user's active goal. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMode {
    /// Lose fat at 0.3% to 0.7% of body weight per week
    FatLoss,
    /// Hold weight inside a small deadband
    #[default]
    Maintenance,
    /// Gain slowly at 0.1% to 0.4% of body weight per week
    LeanGain,
}

impl GoalMode {
    /// All goal modes in display order
    pub const ALL: [Self; 3] = [Self::FatLoss, Self::Maintenance, Self::LeanGain];

    /// Stable storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::Maintenance => "maintenance",
            Self::LeanGain => "lean_gain",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FatLoss => "Fat loss",
            Self::Maintenance => "Maintenance",
            Self::LeanGain => "Lean gain",
        }
    }

    /// Parse a stored value, falling back to maintenance for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for GoalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fat_loss" => Ok(Self::FatLoss),
            "maintenance" => Ok(Self::Maintenance),
            "lean_gain" => Ok(Self::LeanGain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal mode '{other}' (expected fat_loss, maintenance, or lean_gain)"
            ))
            .with_field("goal")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mode_parsing() {
        assert_eq!("fat_loss".parse::<GoalMode>().unwrap(), GoalMode::FatLoss);
        assert_eq!("lean-gain".parse::<GoalMode>().unwrap(), GoalMode::LeanGain);
        assert_eq!(
            " Maintenance ".parse::<GoalMode>().unwrap(),
            GoalMode::Maintenance
        );
        assert!("bulk".parse::<GoalMode>().is_err());
    }

    #[test]
    fn test_lossy_parse_defaults_to_maintenance() {
        assert_eq!(GoalMode::from_str_lossy("bulk"), GoalMode::Maintenance);
        assert_eq!(GoalMode::from_str_lossy("fat_loss"), GoalMode::FatLoss);
    }

    #[test]
    fn test_goal_mode_serde_uses_storage_keys() {
        for mode in GoalMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_profile_from_input_rounds() {
        let profile = GoalProfile::from_input(129.6, 8000.4).unwrap();
        assert_eq!(profile.protein_goal_grams_per_day, 130);
        assert_eq!(profile.steps_goal_per_day, 8000);
    }

    #[test]
    fn test_profile_rejects_non_positive() {
        assert!(GoalProfile::from_input(0.0, 8000.0).is_err());
        assert!(GoalProfile::from_input(120.0, -5.0).is_err());
        assert!(GoalProfile::from_input(f64::NAN, 8000.0).is_err());
        assert!(GoalProfile::new(120, 0).is_err());
    }
}
