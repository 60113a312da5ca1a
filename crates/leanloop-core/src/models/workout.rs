// ABOUTME: Workout completion model used for weekly workout counts
// ABOUTME: Only workouts with a completion timestamp count as completed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A started workout. In-progress and abandoned workouts have no `completed_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutCompletion {
    /// Workout identifier
    pub id: Uuid,
    /// Completion instant in UTC
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutCompletion {
    /// A workout completed at `completed_at`
    #[must_use]
    pub fn completed(completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: Some(completed_at),
        }
    }

    /// Whether the workout was finished
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Civil date of completion in the given timezone
    #[must_use]
    pub fn completion_date<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.completed_at
            .map(|instant| instant.with_timezone(tz).date_naive())
    }
}
