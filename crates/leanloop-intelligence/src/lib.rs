// ABOUTME: Weekly progress engine: week windows, aggregation, grading, and next-week adjustments
// ABOUTME: Synchronous pure computation over immutable snapshots, safe to call from any context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![deny(unsafe_code)]

//! # `LeanLoop` Intelligence
//!
//! Turns raw daily habit logs, workout completions, and weekly check-ins into
//! per-week consistency stats and an adaptive proposal for next week's targets.
//!
//! ## Modules
//!
//! - **config**: Tunable engine configuration with environment overrides
//! - **`week_window`**: Monday-aligned seven-day reporting windows
//! - **`weekly_aggregator`**: Joins habit logs and workouts into `WeeklyStats`
//! - **grader**: Weighted, capped consistency score and grade
//! - **adjustment**: Per-goal-mode target strategies and the low-adherence guard rail
//!
//! Nothing here performs I/O. Callers fetch snapshots and persist results.

/// Engine configuration (grading, adherence, per-goal-mode rules)
pub mod config;

/// Week window calculation
pub mod week_window;

/// Weekly stats aggregation
pub mod weekly_aggregator;

/// Consistency grading
pub mod grader;

/// Next-week target adjustment
pub mod adjustment;

pub use adjustment::{AdjustmentEngine, AdjustmentInput, GuardRail};
pub use config::{ConfigError, EngineConfig};
pub use grader::{GradeInput, Grader};
pub use week_window::WeekWindowCalculator;
pub use weekly_aggregator::WeeklyAggregator;
