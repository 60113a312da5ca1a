// ABOUTME: Derived weekly progress types: week windows, weekly stats, grades, and adjustments
// ABOUTME: Computed on demand from durable records and never persisted by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use super::GoalProfile;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of civil dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range
    pub from: NaiveDate,
    /// Last date in the range
    pub to: NaiveDate,
}

impl DateRange {
    /// Inclusive range `from..=to`
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// The same range grown by `days` on both ends
    #[must_use]
    pub fn widened(&self, days: u64) -> Self {
        Self {
            from: self.from.checked_sub_days(Days::new(days)).unwrap_or(self.from),
            to: self.to.checked_add_days(Days::new(days)).unwrap_or(self.to),
        }
    }
}

/// A Monday-aligned seven-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    /// Monday that opens the window
    pub week_start: NaiveDate,
    /// Sunday that closes the window
    pub week_end: NaiveDate,
}

impl WeekWindow {
    /// Window opening on `week_start`, or `None` when it would run past the calendar
    #[must_use]
    pub fn starting(week_start: NaiveDate) -> Option<Self> {
        let week_end = week_start.checked_add_days(Days::new(6))?;
        Some(Self {
            week_start,
            week_end,
        })
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start <= date && date <= self.week_end
    }

    /// The seven dates of the window in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.week_start.iter_days().take(7)
    }

    /// The window immediately before this one, if the calendar reaches back that far
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        Self::starting(self.week_start.checked_sub_days(Days::new(7))?)
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.week_start, self.week_end)
    }
}

/// Ordinal weekly consistency grade, lowest first
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyGrade {
    /// Below the bronze threshold
    #[default]
    Starter,
    /// Partial consistency
    Bronze,
    /// Solid consistency
    Silver,
    /// Near-complete consistency
    Gold,
}

impl ConsistencyGrade {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

impl fmt::Display for ConsistencyGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated counters for one week window
///
/// For both protein and steps, `days_hit <= days_logged <= 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Monday that opens the week
    pub week_start: NaiveDate,
    /// Sunday that closes the week
    pub week_end: NaiveDate,
    /// Completed workouts in the week
    pub workouts_completed: u32,
    /// Days with any protein value logged
    pub protein_days_logged: u32,
    /// Days at or above the protein goal
    pub protein_days_hit: u32,
    /// Days with any steps value logged
    pub steps_days_logged: u32,
    /// Days at or above the steps goal
    pub steps_days_hit: u32,
    /// Consistency grade for the week
    pub grade: ConsistencyGrade,
}

impl WeeklyStats {
    /// The window these stats cover
    #[must_use]
    pub const fn window(&self) -> WeekWindow {
        WeekWindow {
            week_start: self.week_start,
            week_end: self.week_end,
        }
    }
}

/// Proposed next-week targets with the reasons behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// Proposed daily protein goal in grams
    pub next_protein_goal_grams_per_day: u32,
    /// Proposed daily steps goal
    pub next_steps_goal_per_day: u32,
    /// Week-over-week weight change, when both weights are known
    pub weight_delta_kg: Option<f64>,
    /// Human-readable rationale, in rule order
    pub reasons: Vec<String>,
}

impl AdjustmentResult {
    /// The proposal expressed as a goal profile
    #[must_use]
    pub const fn proposed_goals(&self) -> GoalProfile {
        GoalProfile {
            protein_goal_grams_per_day: self.next_protein_goal_grams_per_day,
            steps_goal_per_day: self.next_steps_goal_per_day,
        }
    }

    /// Whether applying the proposal would change `current`
    #[must_use]
    pub fn changes(&self, current: &GoalProfile) -> bool {
        self.proposed_goals() != *current
    }
}
