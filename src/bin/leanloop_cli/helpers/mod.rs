// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Re-exports helper modules for leanloop-cli
// ABOUTME: Provides output formatting and reference-time utilities

pub mod clock;
pub mod display;
