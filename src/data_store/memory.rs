// ABOUTME: In-memory FitnessDataStore backed by a tokio RwLock over a serializable snapshot
// ABOUTME: Loads from and saves to a JSON file so the CLI can persist state between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use super::FitnessDataStore;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use leanloop_core::constants::storage::SNAPSHOT_VERSION;
use leanloop_core::models::{
    DailyHabitLog, DateRange, GoalMode, GoalProfile, WeeklyCheckin, WorkoutCompletion,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::ErrorKind;
use std::mem;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Everything the store holds, in its on-disk shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Snapshot format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Active goal mode; an unrecognized stored value reads as maintenance
    #[serde(default, deserialize_with = "lossy_goal_mode")]
    pub goal_mode: GoalMode,
    /// Active goal profile
    #[serde(default)]
    pub goals: GoalProfile,
    /// Daily habit logs, at most one per date, ordered by date
    #[serde(default)]
    pub habit_logs: Vec<DailyHabitLog>,
    /// Workouts, completed or not
    #[serde(default)]
    pub workouts: Vec<WorkoutCompletion>,
    /// Weekly check-ins, at most one per week, ordered by week
    #[serde(default)]
    pub checkins: Vec<WeeklyCheckin>,
}

const fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

fn lossy_goal_mode<'de, D>(deserializer: D) -> Result<GoalMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let Some(stored) = raw.as_str() else {
        warn!(stored = %raw, "Goal mode in snapshot is not a string, using maintenance");
        return Ok(GoalMode::default());
    };
    if stored.parse::<GoalMode>().is_err() {
        warn!(stored, "Unrecognized goal mode in snapshot, using maintenance");
    }
    Ok(GoalMode::from_str_lossy(stored))
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            goal_mode: GoalMode::default(),
            goals: GoalProfile::default(),
            habit_logs: Vec::new(),
            workouts: Vec::new(),
            checkins: Vec::new(),
        }
    }
}

impl StoreSnapshot {
    /// Check every stored record against the same rules new input must pass
    ///
    /// # Errors
    ///
    /// Returns the first validation error found
    pub fn validate(&self) -> AppResult<()> {
        GoalProfile::new(
            self.goals.protein_goal_grams_per_day,
            self.goals.steps_goal_per_day,
        )?;
        for log in &self.habit_logs {
            DailyHabitLog::new(log.date, log.protein_grams, log.steps)
                .map_err(|e| e.with_resource_id(log.date.to_string()))?;
        }
        for checkin in &self.checkins {
            WeeklyCheckin::new(checkin.week_start, checkin.weight_kg, None)
                .map_err(|e| e.with_resource_id(checkin.week_start.to_string()))?;
        }
        Ok(())
    }

    fn upsert_habit_log(&mut self, log: DailyHabitLog) {
        match self
            .habit_logs
            .binary_search_by_key(&log.date, |existing| existing.date)
        {
            Ok(index) => self.habit_logs[index] = log,
            Err(index) => self.habit_logs.insert(index, log),
        }
    }

    fn upsert_checkin(&mut self, checkin: WeeklyCheckin) {
        match self
            .checkins
            .binary_search_by_key(&checkin.week_start, |existing| existing.week_start)
        {
            Ok(index) => self.checkins[index] = checkin,
            Err(index) => self.checkins.insert(index, checkin),
        }
    }

    /// Restore ordering and uniqueness after deserializing; the last duplicate wins
    fn normalize(&mut self) {
        self.habit_logs.sort_by_key(|log| log.date);
        self.habit_logs.dedup_by(|later, earlier| {
            let duplicate = later.date == earlier.date;
            if duplicate {
                mem::swap(later, earlier);
            }
            duplicate
        });
        self.checkins.sort_by_key(|checkin| checkin.week_start);
        self.checkins.dedup_by(|later, earlier| {
            let duplicate = later.week_start == earlier.week_start;
            if duplicate {
                mem::swap(later, earlier);
            }
            duplicate
        });
    }
}

/// Store holding all state in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreSnapshot>>,
}

impl InMemoryStore {
    /// Empty store with default goals
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from `snapshot`
    ///
    /// # Errors
    ///
    /// Returns an error if any record in `snapshot` fails validation
    pub fn from_snapshot(mut snapshot: StoreSnapshot) -> AppResult<Self> {
        snapshot.validate()?;
        snapshot.normalize();
        Ok(Self {
            state: Arc::new(RwLock::new(snapshot)),
        })
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    /// Load a store from a JSON snapshot file; a missing file yields an empty store
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid snapshot, or
    /// holds a record that fails validation
    pub async fn load(path: &Path) -> AppResult<Self> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No snapshot found, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(AppError::from(e).with_resource_id(path.display().to_string())),
        };

        let snapshot: StoreSnapshot = serde_json::from_slice(&bytes)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(AppError::storage(format!(
                "Snapshot version {} is newer than supported version {SNAPSHOT_VERSION}",
                snapshot.version
            ))
            .with_resource_id(path.display().to_string()));
        }

        debug!(
            path = %path.display(),
            habit_logs = snapshot.habit_logs.len(),
            workouts = snapshot.workouts.len(),
            checkins = snapshot.checkins.len(),
            "Loaded snapshot"
        );
        Self::from_snapshot(snapshot).map_err(|e| {
            if e.context.resource_id.is_some() {
                e
            } else {
                e.with_resource_id(path.display().to_string())
            }
        })
    }

    /// Write the current state to `path` as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        let json = {
            let state = self.state.read().await;
            serde_json::to_vec_pretty(&*state)?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, json).await?;
        debug!(path = %path.display(), "Saved snapshot");
        Ok(())
    }
}

#[async_trait]
impl FitnessDataStore for InMemoryStore {
    async fn list_habit_logs(&self, range: DateRange) -> AppResult<Vec<DailyHabitLog>> {
        let state = self.state.read().await;
        Ok(state
            .habit_logs
            .iter()
            .filter(|log| range.contains(log.date))
            .cloned()
            .collect())
    }

    async fn list_completed_workouts(&self, range: DateRange) -> AppResult<Vec<WorkoutCompletion>> {
        let state = self.state.read().await;
        Ok(state
            .workouts
            .iter()
            .filter(|workout| {
                workout
                    .completed_at
                    .is_some_and(|at| range.contains(at.date_naive()))
            })
            .cloned()
            .collect())
    }

    async fn get_goal_profile(&self) -> AppResult<GoalProfile> {
        Ok(self.state.read().await.goals)
    }

    async fn get_weekly_checkin(&self, week_start: NaiveDate) -> AppResult<Option<WeeklyCheckin>> {
        let state = self.state.read().await;
        Ok(state
            .checkins
            .iter()
            .find(|checkin| checkin.week_start == week_start)
            .cloned())
    }

    async fn get_goal_mode(&self) -> AppResult<GoalMode> {
        Ok(self.state.read().await.goal_mode)
    }

    async fn upsert_habit_log(&self, log: DailyHabitLog) -> AppResult<()> {
        self.state.write().await.upsert_habit_log(log);
        Ok(())
    }

    async fn upsert_weekly_checkin(&self, checkin: WeeklyCheckin) -> AppResult<()> {
        self.state.write().await.upsert_checkin(checkin);
        Ok(())
    }

    async fn update_goal_profile(&self, goals: GoalProfile) -> AppResult<()> {
        self.state.write().await.goals = goals;
        Ok(())
    }

    async fn set_goal_mode(&self, mode: GoalMode) -> AppResult<()> {
        self.state.write().await.goal_mode = mode;
        Ok(())
    }

    async fn record_workout(&self, workout: WorkoutCompletion) -> AppResult<()> {
        self.state.write().await.workouts.push(workout);
        Ok(())
    }
}
