// ABOUTME: Main library entry point for the LeanLoop weekly progress service
// ABOUTME: Wires the data store, the progress engine, and logging for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![deny(unsafe_code)]

//! # `LeanLoop`
//!
//! Weekly consistency tracking for a fitness habit app: daily protein and steps logs,
//! completed workouts, and optional weekly weight check-ins become a graded weekly
//! scoreboard and a proposal for next week's protein and steps targets.
//!
//! ## Architecture
//!
//! - **`leanloop_core`**: errors, constants, models, boundary validation
//! - **`leanloop_intelligence`**: the pure engine (windows, aggregation, grading, adjustment)
//! - **`data_store`**: async persistence abstraction with an in-memory JSON snapshot store
//! - **services**: "load snapshot, compute, persist" operations used by the CLI
//! - **logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use leanloop::data_store::memory::InMemoryStore;
//! use leanloop::errors::AppResult;
//! use leanloop::services::ProgressService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = ProgressService::new(InMemoryStore::new());
//!     let report = service.weekly_report(&Utc::now(), 4).await?;
//!     println!("{} weeks graded", report.weeks.len());
//!     Ok(())
//! }
//! ```

/// Persistence abstraction and the in-memory snapshot store
pub mod data_store;

/// Unified error handling (re-exported from `leanloop-core`)
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Progress service layer
pub mod services;

pub use leanloop_core::{constants, models, validation};
pub use leanloop_intelligence as intelligence;
