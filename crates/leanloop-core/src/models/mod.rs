// ABOUTME: Core data models for the LeanLoop progress engine
// ABOUTME: Re-exports habit, workout, goal, check-in, and weekly progress types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! # Data Models
//!
//! Durable records (`DailyHabitLog`, `WorkoutCompletion`, `GoalProfile`,
//! `WeeklyCheckin`) are the system of record. `WeeklyStats` and `AdjustmentResult`
//! are derived on demand and never persisted by the engine.

/// Weekly check-in with optional body weight
mod checkin;
/// Goal profile and goal mode
mod goals;
/// Daily protein and steps log
mod habits;
/// Derived weekly progress types
mod progress;
/// Workout completion records
mod workout;

pub use checkin::WeeklyCheckin;
pub use goals::{GoalMode, GoalProfile};
pub use habits::DailyHabitLog;
pub use progress::{AdjustmentResult, ConsistencyGrade, DateRange, WeekWindow, WeeklyStats};
pub use workout::WorkoutCompletion;
