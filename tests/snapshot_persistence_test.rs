// ABOUTME: Integration tests for saving and loading the JSON snapshot store
// ABOUTME: Uses temporary directories so no test touches a real data file

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use leanloop::constants::storage::SNAPSHOT_VERSION;
use leanloop::data_store::memory::{InMemoryStore, StoreSnapshot};
use leanloop::data_store::FitnessDataStore;
use leanloop::errors::ErrorCode;
use leanloop::models::{DailyHabitLog, GoalMode, GoalProfile, WeeklyCheckin, WorkoutCompletion};
use std::fs;
use tempfile::TempDir;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[tokio::test]
async fn test_save_then_load_restores_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("leanloop.json");

    let store = InMemoryStore::new();
    store
        .upsert_habit_log(DailyHabitLog::new(date(10), Some(135.0), Some(9100.0)).unwrap())
        .await
        .unwrap();
    store
        .record_workout(WorkoutCompletion::completed(
            Utc.with_ymd_and_hms(2025, 3, 11, 6, 45, 0).unwrap(),
        ))
        .await
        .unwrap();
    store
        .upsert_weekly_checkin(
            WeeklyCheckin::new(date(10), Some(82.4), Some("new shoes".to_owned())).unwrap(),
        )
        .await
        .unwrap();
    store
        .update_goal_profile(GoalProfile::new(140, 9000).unwrap())
        .await
        .unwrap();
    store.set_goal_mode(GoalMode::LeanGain).await.unwrap();

    store.save(&path).await.unwrap();
    let loaded = InMemoryStore::load(&path).await.unwrap();

    assert_eq!(loaded.snapshot().await, store.snapshot().await);
    assert_eq!(loaded.get_goal_mode().await.unwrap(), GoalMode::LeanGain);
}

#[tokio::test]
async fn test_missing_file_loads_empty_store() {
    let dir = TempDir::new().unwrap();
    let loaded = InMemoryStore::load(&dir.path().join("absent.json"))
        .await
        .unwrap();

    let snapshot = loaded.snapshot().await;
    assert_eq!(snapshot, StoreSnapshot::default());
    assert_eq!(snapshot.goals, GoalProfile::default());
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
}

#[tokio::test]
async fn test_partial_snapshot_fills_defaults_and_dedups() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(
        &path,
        r#"{
            "habit_logs": [
                {"date": "2025-03-11", "protein_grams": 90.0},
                {"date": "2025-03-10", "steps": 4000.0},
                {"date": "2025-03-11", "protein_grams": 150.0}
            ]
        }"#,
    )
    .unwrap();

    let snapshot = InMemoryStore::load(&path).await.unwrap().snapshot().await;

    assert_eq!(snapshot.goal_mode, GoalMode::Maintenance);
    assert_eq!(snapshot.habit_logs.len(), 2);
    assert_eq!(snapshot.habit_logs[0].date, date(10));
    assert_eq!(snapshot.habit_logs[1].protein_grams, Some(150.0));
}

#[tokio::test]
async fn test_newer_snapshot_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(&path, format!(r#"{{"version": {}}}"#, SNAPSHOT_VERSION + 1)).unwrap();

    let err = InMemoryStore::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_corrupt_snapshot_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(&path, "{ not json").unwrap();

    let err = InMemoryStore::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unknown_stored_goal_mode_loads_as_maintenance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(&path, r#"{"version": 1, "goal_mode": "bulk"}"#).unwrap();

    let store = InMemoryStore::load(&path).await.unwrap();
    assert_eq!(store.get_goal_mode().await.unwrap(), GoalMode::Maintenance);
}

#[tokio::test]
async fn test_zero_goals_in_snapshot_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(
        &path,
        r#"{
            "goals": {"protein_goal_grams_per_day": 0, "steps_goal_per_day": 0},
            "habit_logs": [{"date": "2025-03-10", "protein_grams": 0.0, "steps": 0.0}]
        }"#,
    )
    .unwrap();

    let err = InMemoryStore::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(
        err.context.resource_id.as_deref(),
        Some(path.display().to_string().as_str())
    );
}

#[tokio::test]
async fn test_negative_habit_amount_in_snapshot_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(
        &path,
        r#"{"habit_logs": [{"date": "2025-03-11", "steps": -500.0}]}"#,
    )
    .unwrap();

    let err = InMemoryStore::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.resource_id.as_deref(), Some("2025-03-11"));
}

#[tokio::test]
async fn test_checkin_not_starting_on_monday_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leanloop.json");
    fs::write(
        &path,
        r#"{"checkins": [{"week_start": "2025-03-11", "weight_kg": 81.0}]}"#,
    )
    .unwrap();

    let err = InMemoryStore::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
