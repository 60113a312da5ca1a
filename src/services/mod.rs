// ABOUTME: Domain service layer between the data store and the progress engine
// ABOUTME: Reused by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

/// Weekly report, adjustment, and explicit write operations
pub mod progress_service;

pub use progress_service::{AdjustmentReport, ProgressService, WeeklyReport};
