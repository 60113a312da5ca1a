// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Re-exports command modules for leanloop-cli and the shared command context
// ABOUTME: Commands load the snapshot store once, run one service call, and save on writes

pub mod goals;
pub mod progress;
pub mod tracking;

use leanloop::data_store::memory::InMemoryStore;
use leanloop::errors::AppResult;
use leanloop::intelligence::config::WeeklyTargets;
use leanloop::services::ProgressService;
use std::path::PathBuf;

/// Everything a command needs
pub struct CommandContext {
    /// Service over the loaded snapshot
    pub service: ProgressService<InMemoryStore>,
    /// Snapshot file to save back to
    pub data_path: PathBuf,
    /// Weekly targets for scoreboard denominators
    pub targets: WeeklyTargets,
    /// Emit JSON instead of text
    pub json: bool,
}

impl CommandContext {
    /// Persist the store after a write
    pub async fn save(&self) -> AppResult<()> {
        self.service.store().save(&self.data_path).await
    }
}
