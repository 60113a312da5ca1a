// ABOUTME: Progress service: load snapshots from the data store, run the engine, persist explicit writes
// ABOUTME: Weekly report, next-week adjustment, habit logging, check-ins, and goal updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use crate::data_store::FitnessDataStore;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use leanloop_core::constants::limits::MAX_REPORT_WEEKS;
use leanloop_core::models::{
    AdjustmentResult, DailyHabitLog, DateRange, GoalMode, GoalProfile, WeeklyCheckin,
    WeeklyStats, WorkoutCompletion,
};
use leanloop_intelligence::{
    AdjustmentEngine, EngineConfig, Grader, WeekWindowCalculator, WeeklyAggregator,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Graded weeks together with the goals they were measured against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Reference date the windows were built around
    pub today: NaiveDate,
    /// Goal profile in force
    pub goals: GoalProfile,
    /// Oldest week first; the last one contains `today`
    pub weeks: Vec<WeeklyStats>,
}

impl WeeklyReport {
    /// The week containing `today`
    #[must_use]
    pub fn current_week(&self) -> Option<&WeeklyStats> {
        self.weeks.last()
    }
}

/// A next-week proposal with the inputs it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Goal mode the proposal was computed for
    pub goal: GoalMode,
    /// Goals currently in force
    pub current_goals: GoalProfile,
    /// Stats for the week containing "now"
    pub this_week: WeeklyStats,
    /// Weight from this week's check-in
    pub curr_weight_kg: Option<f64>,
    /// Weight from last week's check-in
    pub prev_weight_kg: Option<f64>,
    /// The proposal itself
    pub result: AdjustmentResult,
}

/// Snapshot-in, result-out orchestration over a [`FitnessDataStore`]
pub struct ProgressService<S: FitnessDataStore> {
    store: S,
    grader: Grader,
    engine: AdjustmentEngine,
}

impl<S: FitnessDataStore> ProgressService<S> {
    /// Service using the global engine configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::global().clone())
    }

    /// Service with explicit engine configuration
    #[must_use]
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            grader: Grader::with_config(config.grading.clone()),
            engine: AdjustmentEngine::with_config(config),
        }
    }

    /// Underlying data store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Graded stats for the `week_count` weeks ending with the week containing `now`
    ///
    /// Civil dates are taken in `now`'s timezone. The store query is widened by a day
    /// on each side so completions near midnight land in the right local week.
    ///
    /// # Errors
    ///
    /// Returns an error if `week_count` is too large or a store read fails
    pub async fn weekly_report<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        week_count: usize,
    ) -> AppResult<WeeklyReport> {
        if week_count > MAX_REPORT_WEEKS {
            return Err(AppError::value_out_of_range(
                "week_count",
                format!("At most {MAX_REPORT_WEEKS} weeks can be reported"),
            ));
        }

        let today = now.date_naive();
        let windows = WeekWindowCalculator::windows(now, week_count);
        let Some(range) = WeekWindowCalculator::combined_range(&windows) else {
            let goals = self.store.get_goal_profile().await?;
            return Ok(WeeklyReport {
                today,
                goals,
                weeks: Vec::new(),
            });
        };

        let query_range = range.widened(1);
        let (goals, habits, workouts) = tokio::try_join!(
            self.store.get_goal_profile(),
            self.store.list_habit_logs(query_range),
            self.store.list_completed_workouts(query_range),
        )?;

        let aggregator = WeeklyAggregator::with_grader(goals, self.grader.clone());
        let weeks = aggregator.aggregate(&windows, &habits, &workouts, &now.timezone());

        info!(
            today = %today,
            weeks = weeks.len(),
            habit_logs = habits.len(),
            workouts = workouts.len(),
            "Built weekly report"
        );

        Ok(WeeklyReport {
            today,
            goals,
            weeks,
        })
    }

    /// Graded stats only
    ///
    /// # Errors
    ///
    /// See [`Self::weekly_report`]
    pub async fn compute_weekly_stats<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        week_count: usize,
    ) -> AppResult<Vec<WeeklyStats>> {
        Ok(self.weekly_report(now, week_count).await?.weeks)
    }

    async fn current_week<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> AppResult<(GoalProfile, WeeklyStats)> {
        let report = self.weekly_report(now, 1).await?;
        let this_week = report
            .current_week()
            .copied()
            .ok_or_else(|| {
                AppError::value_out_of_range(
                    "today",
                    format!("{} is too close to the end of the calendar", now.date_naive()),
                )
            })?;
        Ok((report.goals, this_week))
    }

    /// Propose next week's targets without writing anything
    ///
    /// `goal` overrides the stored goal mode when given.
    ///
    /// # Errors
    ///
    /// Returns an error if a store read fails
    pub async fn weekly_adjustment<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        goal: Option<GoalMode>,
    ) -> AppResult<AdjustmentReport> {
        let (current_goals, this_week) = self.current_week(now).await?;
        let previous_week = this_week.window().previous();
        let previous_checkin = async {
            match previous_week {
                Some(week) => self.store.get_weekly_checkin(week.week_start).await,
                None => Ok(None),
            }
        };

        let (current_checkin, previous_checkin, stored_goal) = tokio::try_join!(
            self.store.get_weekly_checkin(this_week.week_start),
            previous_checkin,
            self.store.get_goal_mode(),
        )?;

        let goal = goal.unwrap_or(stored_goal);
        let curr_weight_kg = current_checkin.and_then(|checkin| checkin.weight_kg);
        let prev_weight_kg = previous_checkin.and_then(|checkin| checkin.weight_kg);

        let result = self.engine.compute_adjustment(
            &this_week,
            &current_goals,
            curr_weight_kg,
            prev_weight_kg,
            goal,
        );

        info!(
            goal = %goal,
            week_start = %this_week.week_start,
            next_protein = result.next_protein_goal_grams_per_day,
            next_steps = result.next_steps_goal_per_day,
            "Computed weekly adjustment"
        );

        Ok(AdjustmentReport {
            goal,
            current_goals,
            this_week,
            curr_weight_kg,
            prev_weight_kg,
            result,
        })
    }

    /// Write a proposal to the stored goal profile
    ///
    /// # Errors
    ///
    /// Returns an error if a proposed target is zero or the write fails
    pub async fn apply_adjustment(&self, result: &AdjustmentResult) -> AppResult<GoalProfile> {
        let goals = GoalProfile::new(
            result.next_protein_goal_grams_per_day,
            result.next_steps_goal_per_day,
        )?;
        self.store.update_goal_profile(goals).await?;
        info!(
            protein = goals.protein_goal_grams_per_day,
            steps = goals.steps_goal_per_day,
            "Applied adjustment to goal profile"
        );
        Ok(goals)
    }

    /// Record protein and/or steps for `date`
    ///
    /// A value left out keeps whatever was already logged for that date.
    ///
    /// # Errors
    ///
    /// Returns an error if neither value is given, a value is negative or not finite,
    /// or a store operation fails
    pub async fn log_habits(
        &self,
        date: NaiveDate,
        protein_grams: Option<f64>,
        steps: Option<f64>,
    ) -> AppResult<DailyHabitLog> {
        if protein_grams.is_none() && steps.is_none() {
            return Err(AppError::invalid_input("Provide a protein or steps value to log"));
        }

        let existing = self
            .store
            .list_habit_logs(DateRange::new(date, date))
            .await?
            .pop();
        let log = DailyHabitLog::new(
            date,
            protein_grams.or_else(|| existing.as_ref().and_then(|log| log.protein_grams)),
            steps.or_else(|| existing.as_ref().and_then(|log| log.steps)),
        )?;

        self.store.upsert_habit_log(log.clone()).await?;
        info!(date = %date, protein = ?log.protein_grams, steps = ?log.steps, "Logged habits");
        Ok(log)
    }

    /// Record this week's check-in, snapshotting the week's counters
    ///
    /// A weight or note left out keeps the value from an earlier check-in this week.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is invalid or a store operation fails
    pub async fn record_checkin<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        weight_kg: Option<f64>,
        note: Option<String>,
    ) -> AppResult<WeeklyCheckin> {
        let (_, this_week) = self.current_week(now).await?;
        let existing = self.store.get_weekly_checkin(this_week.week_start).await?;

        let (previous_weight, previous_note) =
            existing.map_or((None, None), |checkin| (checkin.weight_kg, checkin.note));
        let checkin = WeeklyCheckin::for_week(
            &this_week,
            weight_kg.or(previous_weight),
            note.or(previous_note),
        )?;

        self.store.upsert_weekly_checkin(checkin.clone()).await?;
        info!(
            week_start = %checkin.week_start,
            weight_kg = ?checkin.weight_kg,
            "Recorded weekly check-in"
        );
        Ok(checkin)
    }

    /// Replace the goal profile from free-form input, rounding to whole units
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not a positive finite number or the write fails
    pub async fn update_goals(&self, protein_goal: f64, steps_goal: f64) -> AppResult<GoalProfile> {
        let goals = GoalProfile::from_input(protein_goal, steps_goal)?;
        self.store.update_goal_profile(goals).await?;
        info!(
            protein = goals.protein_goal_grams_per_day,
            steps = goals.steps_goal_per_day,
            "Updated goals"
        );
        Ok(goals)
    }

    /// Change the active goal mode
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn set_goal_mode(&self, mode: GoalMode) -> AppResult<()> {
        self.store.set_goal_mode(mode).await?;
        info!(goal = %mode, "Changed goal mode");
        Ok(())
    }

    /// Record a workout completed at `completed_at`
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn record_workout(
        &self,
        completed_at: DateTime<Utc>,
    ) -> AppResult<WorkoutCompletion> {
        let workout = WorkoutCompletion::completed(completed_at);
        self.store.record_workout(workout.clone()).await?;
        info!(workout_id = %workout.id, completed_at = %completed_at, "Recorded workout");
        Ok(workout)
    }
}
