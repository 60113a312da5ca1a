// ABOUTME: Data store abstraction for habit logs, workouts, goal profile, and weekly check-ins
// ABOUTME: Async trait so the progress service can run independent reads concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! The progress engine never touches storage. The service layer reads snapshots
//! through [`FitnessDataStore`], hands them to the engine, and writes results back
//! only on explicit user actions.

/// In-memory store persisted as a JSON snapshot
pub mod memory;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use leanloop_core::models::{
    DailyHabitLog, DateRange, GoalMode, GoalProfile, WeeklyCheckin, WorkoutCompletion,
};

/// Persistence operations used by the progress service
#[async_trait]
pub trait FitnessDataStore: Send + Sync {
    // ================================
    // Reads
    // ================================

    /// Habit logs dated inside `range`, ordered by date
    async fn list_habit_logs(&self, range: DateRange) -> AppResult<Vec<DailyHabitLog>>;

    /// Completed workouts whose UTC completion date falls inside `range`
    ///
    /// Callers that bucket by a local timezone widen the range by a day on each side.
    async fn list_completed_workouts(&self, range: DateRange) -> AppResult<Vec<WorkoutCompletion>>;

    /// The active goal profile, or the defaults when none was saved
    async fn get_goal_profile(&self) -> AppResult<GoalProfile>;

    /// The check-in for the week opening on `week_start`, if any
    async fn get_weekly_checkin(&self, week_start: NaiveDate) -> AppResult<Option<WeeklyCheckin>>;

    /// The stored goal mode, or maintenance when none was chosen
    async fn get_goal_mode(&self) -> AppResult<GoalMode>;

    // ================================
    // Writes
    // ================================

    /// Insert or replace the habit log for `log.date`
    async fn upsert_habit_log(&self, log: DailyHabitLog) -> AppResult<()>;

    /// Insert or replace the check-in for `checkin.week_start`
    async fn upsert_weekly_checkin(&self, checkin: WeeklyCheckin) -> AppResult<()>;

    /// Replace the goal profile
    async fn update_goal_profile(&self, goals: GoalProfile) -> AppResult<()>;

    /// Replace the goal mode
    async fn set_goal_mode(&self, mode: GoalMode) -> AppResult<()>;

    /// Record a workout
    async fn record_workout(&self, workout: WorkoutCompletion) -> AppResult<()>;
}
