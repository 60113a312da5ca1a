// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
// ABOUTME: Output formatting helpers for leanloop-cli
// ABOUTME: Text scoreboards for weeks and proposals, or pretty JSON when --json is set

use leanloop::errors::{AppError, AppResult, ErrorResponse};
use leanloop::intelligence::config::WeeklyTargets;
use leanloop::models::{
    DailyHabitLog, GoalMode, GoalProfile, WeeklyCheckin, WeeklyStats, WorkoutCompletion,
};
use leanloop::services::{AdjustmentReport, WeeklyReport};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error to stderr, as an `ErrorResponse` envelope in JSON mode
pub fn print_error(error: AppError, json: bool) {
    if json {
        let response = ErrorResponse::from(error);
        match serde_json::to_string_pretty(&response) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("{}", response.error.message),
        }
    } else {
        let client_error = error.code.is_client_error();
        eprintln!("Error: {error}");
        if !client_error {
            eprintln!("Run again with --verbose for more detail.");
        }
    }
}

fn format_week(week: &WeeklyStats, goals: &GoalProfile, targets: &WeeklyTargets) -> String {
    format!(
        "Week of {} to {}  [{}]\n  Workouts: {} / {}\n  Protein days: {} / {} (goal {}g, {} logged)\n  Steps days: {} / {} (goal {}, {} logged)",
        week.week_start,
        week.week_end,
        week.grade,
        week.workouts_completed,
        targets.workouts,
        week.protein_days_hit,
        targets.protein_days,
        goals.protein_goal_grams_per_day,
        week.protein_days_logged,
        week.steps_days_hit,
        targets.steps_days,
        goals.steps_goal_per_day,
        week.steps_days_logged,
    )
}

/// Display the weekly scoreboard, most recent week first
pub fn display_report(report: &WeeklyReport, targets: &WeeklyTargets) {
    println!("Progress as of {}", report.today);
    println!("{}", "=".repeat(50));
    if report.weeks.is_empty() {
        println!("No weeks requested.");
        return;
    }
    for week in report.weeks.iter().rev() {
        println!("{}", format_week(week, &report.goals, targets));
        println!();
    }
}

fn format_weight(weight_kg: Option<f64>) -> String {
    weight_kg.map_or_else(|| "not logged".to_owned(), |kg| format!("{kg:.1} kg"))
}

/// Display a next-week proposal and its reasons
pub fn display_adjustment(report: &AdjustmentReport, targets: &WeeklyTargets) {
    let result = &report.result;
    println!("Next-week targets ({})", report.goal.label());
    println!("{}", "=".repeat(50));
    println!("{}", format_week(&report.this_week, &report.current_goals, targets));
    println!();
    println!("  Last week's weight: {}", format_weight(report.prev_weight_kg));
    println!("  This week's weight: {}", format_weight(report.curr_weight_kg));
    if let Some(delta) = result.weight_delta_kg {
        println!("  Change: {delta:+.2} kg");
    }
    println!();
    println!(
        "  Protein: {}g -> {}g",
        report.current_goals.protein_goal_grams_per_day, result.next_protein_goal_grams_per_day
    );
    println!(
        "  Steps:   {} -> {}",
        report.current_goals.steps_goal_per_day, result.next_steps_goal_per_day
    );
    println!();
    println!("Why:");
    for reason in &result.reasons {
        println!("  - {reason}");
    }
    if !result.changes(&report.current_goals) {
        println!();
        println!("No change to apply.");
    }
}

/// Display a goal profile, with the goal mode when known
pub fn display_goals(goals: &GoalProfile, mode: Option<GoalMode>) {
    if let Some(mode) = mode {
        println!("Goal: {}", mode.label());
    }
    println!("Protein goal: {}g per day", goals.protein_goal_grams_per_day);
    println!("Steps goal: {} per day", goals.steps_goal_per_day);
}

/// Display a stored habit log
pub fn display_habit_log(log: &DailyHabitLog) {
    let protein = log
        .protein_grams
        .map_or_else(|| "-".to_owned(), |grams| format!("{grams}g"));
    let steps = log
        .steps
        .map_or_else(|| "-".to_owned(), |steps| format!("{steps}"));
    println!("Logged {}: protein {protein}, steps {steps}", log.date);
}

/// Display a stored weekly check-in
pub fn display_checkin(checkin: &WeeklyCheckin) {
    println!("Check-in for week of {}", checkin.week_start);
    println!("  Weight: {}", format_weight(checkin.weight_kg));
    if let Some(note) = &checkin.note {
        println!("  Note: {note}");
    }
    println!(
        "  Workouts: {}  Protein days: {}  Steps days: {}",
        checkin.workouts_completed, checkin.protein_goal_days, checkin.steps_goal_days
    );
}

/// Display a recorded workout
pub fn display_workout(workout: &WorkoutCompletion) {
    if let Some(at) = workout.completed_at {
        println!("Workout {} completed at {}", workout.id, at.format("%Y-%m-%d %H:%M UTC"));
    }
}
