// ABOUTME: Integration tests for the progress service over the in-memory store
// ABOUTME: Covers weekly reports, adjustment preview and apply, habit logging, check-ins, and goal updates

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use leanloop::data_store::memory::InMemoryStore;
use leanloop::data_store::FitnessDataStore;
use leanloop::errors::ErrorCode;
use leanloop::intelligence::EngineConfig;
use leanloop::models::{
    ConsistencyGrade, DailyHabitLog, DateRange, GoalMode, GoalProfile, WeeklyCheckin,
    WorkoutCompletion,
};
use leanloop::services::ProgressService;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

/// Wednesday 2025-03-12, inside the week of Monday 2025-03-10
fn wednesday_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap()
}

fn service(store: InMemoryStore) -> ProgressService<InMemoryStore> {
    ProgressService::with_config(store, EngineConfig::default())
}

/// Three workouts plus three protein and steps days this week, one protein day last Sunday
async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    for day in 10..=12 {
        store
            .upsert_habit_log(DailyHabitLog::new(date(3, day), Some(130.0), Some(9000.0)).unwrap())
            .await
            .unwrap();
        store
            .record_workout(WorkoutCompletion::completed(
                Utc.with_ymd_and_hms(2025, 3, day, 7, 0, 0).unwrap(),
            ))
            .await
            .unwrap();
    }
    store
        .upsert_habit_log(DailyHabitLog::new(date(3, 9), Some(130.0), Some(2000.0)).unwrap())
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_weekly_report_counts_and_grades_each_week() {
    let service = service(seeded_store().await);

    let report = service.weekly_report(&wednesday_noon(), 2).await.unwrap();

    assert_eq!(report.today, date(3, 12));
    assert_eq!(report.goals, GoalProfile::default());
    assert_eq!(report.weeks.len(), 2);

    let previous = report.weeks[0];
    assert_eq!(previous.week_start, date(3, 3));
    assert_eq!(previous.workouts_completed, 0);
    assert_eq!(previous.protein_days_hit, 1);
    assert_eq!(previous.steps_days_logged, 1);
    assert_eq!(previous.steps_days_hit, 0);
    assert_eq!(previous.grade, ConsistencyGrade::Starter);

    let current = report.current_week().unwrap();
    assert_eq!(current.week_start, date(3, 10));
    assert_eq!(current.week_end, date(3, 16));
    assert_eq!(current.workouts_completed, 3);
    assert_eq!(current.protein_days_hit, 3);
    assert_eq!(current.steps_days_hit, 3);
    // 0.5 + 0.25 * 3/4 + 0.25 * 3/4 = 0.875
    assert_eq!(current.grade, ConsistencyGrade::Silver);
}

#[tokio::test]
async fn test_compute_weekly_stats_matches_report() {
    let service = service(seeded_store().await);
    let now = wednesday_noon();

    let stats = service.compute_weekly_stats(&now, 4).await.unwrap();
    let report = service.weekly_report(&now, 4).await.unwrap();

    assert_eq!(stats, report.weeks);
    assert_eq!(stats.len(), 4);
    assert!(stats.windows(2).all(|pair| pair[0].week_start < pair[1].week_start));
}

#[tokio::test]
async fn test_report_zero_weeks_is_empty() {
    let service = service(seeded_store().await);
    let report = service.weekly_report(&wednesday_noon(), 0).await.unwrap();
    assert!(report.weeks.is_empty());
    assert!(report.current_week().is_none());
}

#[tokio::test]
async fn test_report_rejects_too_many_weeks() {
    let service = service(InMemoryStore::new());
    let err = service
        .weekly_report(&wednesday_noon(), 105)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_workouts_bucket_into_local_week() {
    let store = InMemoryStore::new();
    // Sunday 23:00 UTC is Monday 09:00 at UTC+10
    store
        .record_workout(WorkoutCompletion::completed(
            Utc.with_ymd_and_hms(2025, 3, 16, 23, 0, 0).unwrap(),
        ))
        .await
        .unwrap();
    let service = service(store);

    let tz = FixedOffset::east_opt(10 * 3600).unwrap();
    let monday = tz.with_ymd_and_hms(2025, 3, 17, 12, 0, 0).unwrap();
    let report = service.weekly_report(&monday, 2).await.unwrap();

    assert_eq!(report.weeks[0].workouts_completed, 0);
    assert_eq!(report.weeks[1].week_start, date(3, 17));
    assert_eq!(report.weeks[1].workouts_completed, 1);
}

#[tokio::test]
async fn test_adjustment_uses_both_checkins_and_writes_nothing() {
    let store = seeded_store().await;
    store
        .upsert_weekly_checkin(WeeklyCheckin::new(date(3, 3), Some(80.0), None).unwrap())
        .await
        .unwrap();
    let service = service(store);
    let now = wednesday_noon();
    service.record_checkin(&now, Some(80.3), None).await.unwrap();

    let adjustment = service.weekly_adjustment(&now, None).await.unwrap();

    assert_eq!(adjustment.goal, GoalMode::Maintenance);
    assert_eq!(adjustment.prev_weight_kg, Some(80.0));
    assert_eq!(adjustment.curr_weight_kg, Some(80.3));
    assert_eq!(adjustment.this_week.workouts_completed, 3);
    assert_eq!(adjustment.result.next_steps_goal_per_day, 9000);
    assert_eq!(adjustment.result.next_protein_goal_grams_per_day, 120);
    assert!(!adjustment.result.reasons.is_empty());
    assert_eq!(
        service.store().get_goal_profile().await.unwrap(),
        GoalProfile::default()
    );
}

#[tokio::test]
async fn test_goal_override_beats_stored_mode() {
    let store = seeded_store().await;
    store.set_goal_mode(GoalMode::LeanGain).await.unwrap();
    let service = service(store);
    let now = wednesday_noon();

    let stored = service.weekly_adjustment(&now, None).await.unwrap();
    let overridden = service
        .weekly_adjustment(&now, Some(GoalMode::FatLoss))
        .await
        .unwrap();

    assert_eq!(stored.goal, GoalMode::LeanGain);
    assert_eq!(overridden.goal, GoalMode::FatLoss);
}

#[tokio::test]
async fn test_missing_checkins_keep_targets() {
    let service = service(seeded_store().await);
    let adjustment = service
        .weekly_adjustment(&wednesday_noon(), Some(GoalMode::FatLoss))
        .await
        .unwrap();

    assert_eq!(adjustment.prev_weight_kg, None);
    assert_eq!(adjustment.result.weight_delta_kg, None);
    assert_eq!(adjustment.result.next_steps_goal_per_day, 8000);
}

#[tokio::test]
async fn test_apply_adjustment_updates_goal_profile() {
    let store = seeded_store().await;
    store
        .upsert_weekly_checkin(WeeklyCheckin::new(date(3, 3), Some(80.0), None).unwrap())
        .await
        .unwrap();
    store
        .upsert_weekly_checkin(WeeklyCheckin::new(date(3, 10), Some(80.3), None).unwrap())
        .await
        .unwrap();
    let service = service(store);

    let adjustment = service
        .weekly_adjustment(&wednesday_noon(), None)
        .await
        .unwrap();
    let applied = service.apply_adjustment(&adjustment.result).await.unwrap();

    assert_eq!(applied, GoalProfile::new(120, 9000).unwrap());
    assert_eq!(service.store().get_goal_profile().await.unwrap(), applied);
}

#[tokio::test]
async fn test_log_habits_merges_with_existing_log() {
    let service = service(InMemoryStore::new());

    service
        .log_habits(date(3, 11), Some(140.0), None)
        .await
        .unwrap();
    let merged = service
        .log_habits(date(3, 11), None, Some(10_500.0))
        .await
        .unwrap();

    assert_eq!(merged.protein_grams, Some(140.0));
    assert_eq!(merged.steps, Some(10_500.0));
    let stored = service
        .store()
        .list_habit_logs(DateRange::new(date(3, 11), date(3, 11)))
        .await
        .unwrap();
    assert_eq!(stored, vec![merged]);
}

#[tokio::test]
async fn test_log_habits_rejects_empty_and_negative_input() {
    let service = service(InMemoryStore::new());

    let empty = service.log_habits(date(3, 11), None, None).await.unwrap_err();
    assert_eq!(empty.code, ErrorCode::InvalidInput);

    assert!(service
        .log_habits(date(3, 11), Some(-5.0), None)
        .await
        .is_err());
    assert!(service
        .store()
        .list_habit_logs(DateRange::new(date(3, 1), date(3, 31)))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_checkin_snapshots_counters_and_keeps_weight() {
    let service = service(seeded_store().await);
    let now = wednesday_noon();

    let first = service.record_checkin(&now, Some(81.2), None).await.unwrap();
    assert_eq!(first.week_start, date(3, 10));
    assert_eq!(first.workouts_completed, 3);
    assert_eq!(first.protein_goal_days, 3);
    assert_eq!(first.steps_goal_days, 3);

    let second = service
        .record_checkin(&now, None, Some("travel week".to_owned()))
        .await
        .unwrap();
    assert_eq!(second.weight_kg, Some(81.2));
    assert_eq!(second.note.as_deref(), Some("travel week"));
    assert_eq!(
        service
            .store()
            .get_weekly_checkin(date(3, 10))
            .await
            .unwrap(),
        Some(second)
    );
}

#[tokio::test]
async fn test_checkin_rejects_invalid_weight() {
    let service = service(InMemoryStore::new());
    let err = service
        .record_checkin(&wednesday_noon(), Some(-70.0), None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_update_goals_rounds_and_validates() {
    let service = service(InMemoryStore::new());

    let goals = service.update_goals(150.4, 8000.6).await.unwrap();
    assert_eq!(goals, GoalProfile::new(150, 8001).unwrap());

    let err = service.update_goals(0.0, 8000.0).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(service.store().get_goal_profile().await.unwrap(), goals);
}

#[tokio::test]
async fn test_recorded_workout_shows_in_report() {
    let service = service(InMemoryStore::new());
    let now = wednesday_noon();

    let workout = service
        .record_workout(Utc.with_ymd_and_hms(2025, 3, 11, 18, 30, 0).unwrap())
        .await
        .unwrap();
    assert!(workout.is_completed());

    let report = service.weekly_report(&now, 1).await.unwrap();
    assert_eq!(report.weeks[0].workouts_completed, 1);
}

#[tokio::test]
async fn test_set_goal_mode_persists() {
    let service = service(InMemoryStore::new());
    assert_eq!(
        service.store().get_goal_mode().await.unwrap(),
        GoalMode::Maintenance
    );
    service.set_goal_mode(GoalMode::FatLoss).await.unwrap();
    assert_eq!(
        service.store().get_goal_mode().await.unwrap(),
        GoalMode::FatLoss
    );
}
