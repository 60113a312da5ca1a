// ABOUTME: Weekly aggregator joining workout completions and daily habit logs per week window
// ABOUTME: Produces one graded WeeklyStats record per window, deterministically and without side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use crate::grader::{GradeInput, Grader};
use chrono::{NaiveDate, TimeZone};
use leanloop_core::models::{
    ConsistencyGrade, DailyHabitLog, GoalProfile, WeekWindow, WeeklyStats, WorkoutCompletion,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Joins raw event streams into weekly stats
#[derive(Debug, Clone)]
pub struct WeeklyAggregator {
    goals: GoalProfile,
    grader: Grader,
}

impl WeeklyAggregator {
    /// Aggregator grading with the global engine configuration
    #[must_use]
    pub fn new(goals: GoalProfile) -> Self {
        Self::with_grader(goals, Grader::new())
    }

    /// Aggregator with an explicit grader
    #[must_use]
    pub const fn with_grader(goals: GoalProfile, grader: Grader) -> Self {
        Self { goals, grader }
    }

    /// Aggregate every window
    ///
    /// Completion instants are truncated to civil dates in `tz`. Habit logs are keyed
    /// by date; if two logs share a date the later one in `habits` wins.
    #[must_use]
    pub fn aggregate<Tz: TimeZone>(
        &self,
        windows: &[WeekWindow],
        habits: &[DailyHabitLog],
        workouts: &[WorkoutCompletion],
        tz: &Tz,
    ) -> Vec<WeeklyStats> {
        let habits_by_date = index_habits(habits);
        let completion_dates: Vec<NaiveDate> = workouts
            .iter()
            .filter_map(|workout| workout.completion_date(tz))
            .collect();

        debug!(
            windows = windows.len(),
            habit_days = habits_by_date.len(),
            completed_workouts = completion_dates.len(),
            "Aggregating weekly stats"
        );

        windows
            .par_iter()
            .map(|window| self.aggregate_window(window, &habits_by_date, &completion_dates))
            .collect()
    }

    fn aggregate_window(
        &self,
        window: &WeekWindow,
        habits_by_date: &BTreeMap<NaiveDate, &DailyHabitLog>,
        completion_dates: &[NaiveDate],
    ) -> WeeklyStats {
        let workouts_completed = completion_dates
            .iter()
            .filter(|date| window.contains(**date))
            .count() as u32;

        let mut stats = WeeklyStats {
            week_start: window.week_start,
            week_end: window.week_end,
            workouts_completed,
            protein_days_logged: 0,
            protein_days_hit: 0,
            steps_days_logged: 0,
            steps_days_hit: 0,
            grade: ConsistencyGrade::default(),
        };

        for log in window.days().filter_map(|day| habits_by_date.get(&day)) {
            if log.protein_grams.is_some() {
                stats.protein_days_logged += 1;
            }
            if log.protein_hit(self.goals.protein_goal_grams_per_day) {
                stats.protein_days_hit += 1;
            }
            if log.steps.is_some() {
                stats.steps_days_logged += 1;
            }
            if log.steps_hit(self.goals.steps_goal_per_day) {
                stats.steps_days_hit += 1;
            }
        }

        stats.grade = self.grader.grade(GradeInput::from(&stats));
        stats
    }
}

fn index_habits(habits: &[DailyHabitLog]) -> BTreeMap<NaiveDate, &DailyHabitLog> {
    let mut by_date = BTreeMap::new();
    for log in habits {
        if by_date.insert(log.date, log).is_some() {
            warn!(date = %log.date, "Duplicate habit log for date, keeping the latest");
        }
    }
    by_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradingConfig;
    use chrono::{Days, FixedOffset, Utc};

    fn workout(y: i32, m: u32, d: u32, h: u32) -> WorkoutCompletion {
        WorkoutCompletion::completed(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn week(offset_weeks: u64) -> WeekWindow {
        WeekWindow::starting(monday() + Days::new(offset_weeks * 7)).unwrap()
    }

    fn aggregator() -> WeeklyAggregator {
        WeeklyAggregator::with_grader(
            GoalProfile::new(120, 8000).unwrap(),
            Grader::with_config(GradingConfig::default()),
        )
    }

    fn log(offset: u64, protein: Option<f64>, steps: Option<f64>) -> DailyHabitLog {
        DailyHabitLog::new(monday() + Days::new(offset), protein, steps).unwrap()
    }

    #[test]
    fn test_counts_logged_and_hit_days() {
        let habits = vec![
            log(0, Some(130.0), Some(9000.0)),
            log(1, Some(80.0), None),
            log(2, None, Some(8000.0)),
            log(3, Some(0.0), Some(0.0)),
        ];
        let stats = aggregator().aggregate(&[week(0)], &habits, &[], &Utc);

        let week = stats[0];
        assert_eq!(week.protein_days_logged, 3);
        assert_eq!(week.protein_days_hit, 1);
        assert_eq!(week.steps_days_logged, 3);
        assert_eq!(week.steps_days_hit, 2);
        assert_eq!(week.workouts_completed, 0);
    }

    #[test]
    fn test_workouts_bucketed_by_completion_date() {
        let windows = [
            week(0),
            week(1),
        ];
        let mut abandoned = workout(2025, 3, 11, 9);
        abandoned.completed_at = None;
        let workouts = vec![
            workout(2025, 3, 10, 6),
            workout(2025, 3, 16, 20),
            workout(2025, 3, 17, 7),
            workout(2025, 3, 3, 7),
            abandoned,
        ];

        let stats = aggregator().aggregate(&windows, &[], &workouts, &Utc);
        assert_eq!(stats[0].workouts_completed, 2);
        assert_eq!(stats[1].workouts_completed, 1);
    }

    #[test]
    fn test_completion_date_uses_reporting_timezone() {
        // Sunday 23:00 UTC lands on Monday in UTC+2
        let workouts = vec![workout(2025, 3, 16, 23)];
        let windows = [week(0)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(
            aggregator().aggregate(&windows, &[], &workouts, &Utc)[0].workouts_completed,
            1
        );
        assert_eq!(
            aggregator().aggregate(&windows, &[], &workouts, &plus_two)[0].workouts_completed,
            0
        );
    }

    #[test]
    fn test_stats_are_graded() {
        let habits: Vec<_> = (0..4).map(|d| log(d, Some(150.0), Some(10_000.0))).collect();
        let workouts = vec![
            workout(2025, 3, 10, 6),
            workout(2025, 3, 12, 6),
            workout(2025, 3, 14, 6),
        ];
        let stats = aggregator().aggregate(&[week(0)], &habits, &workouts, &Utc);
        assert_eq!(stats[0].grade, ConsistencyGrade::Gold);
    }

    #[test]
    fn test_hit_never_exceeds_logged() {
        let habits: Vec<_> = (0..10)
            .map(|d| log(d, Some(d as f64 * 20.0), Some(d as f64 * 1500.0)))
            .collect();
        let windows = [
            week(0),
            week(1),
        ];
        for week in aggregator().aggregate(&windows, &habits, &[], &Utc) {
            assert!(week.protein_days_hit <= week.protein_days_logged);
            assert!(week.protein_days_logged <= 7);
            assert!(week.steps_days_hit <= week.steps_days_logged);
            assert!(week.steps_days_logged <= 7);
        }
    }

    #[test]
    fn test_duplicate_dates_keep_latest() {
        let habits = vec![log(0, Some(50.0), None), log(0, Some(150.0), None)];
        let stats = aggregator().aggregate(&[week(0)], &habits, &[], &Utc);
        assert_eq!(stats[0].protein_days_logged, 1);
        assert_eq!(stats[0].protein_days_hit, 1);
    }
}
