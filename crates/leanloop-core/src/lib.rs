// ABOUTME: Core types and constants for the LeanLoop weekly progress engine
// ABOUTME: Foundation crate with error handling, domain models, validation, and tuned constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![deny(unsafe_code)]

//! # LeanLoop Core
//!
//! Foundation crate shared by the progress engine and the service layer. It changes
//! infrequently, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Product-tuned grading weights, adherence thresholds, and clamp bounds
//! - **models**: Habit logs, workout completions, goal profile, check-ins, weekly stats
//! - **validation**: Boundary checks applied before records are constructed

/// Unified error handling system with standard error codes
pub mod errors;

/// Tuned constants organized by domain
pub mod constants;

/// Core data models (habit logs, workouts, goals, check-ins, weekly stats)
pub mod models;

/// Input validation for values entering the system
pub mod validation;
