// ABOUTME: Re-exports the unified error types from leanloop-core for the root crate
// ABOUTME: Keeps `leanloop::errors::AppResult` stable for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! # Unified Error Handling System
//!
//! Every fallible service and store operation returns [`AppResult`]. Engine
//! configuration errors convert into [`AppError`] with [`ErrorCode::ConfigInvalid`].

pub use leanloop_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
