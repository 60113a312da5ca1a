// ABOUTME: Boundary validation for habit amounts, goal values, body weight, and week starts
// ABOUTME: Rejects non-finite or negative inputs before any record is constructed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

//! Input validation
//!
//! The engine assumes well-typed, non-negative inputs. Everything entering the system
//! passes through these checks first.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Heaviest body weight accepted, in kilograms
const MAX_BODY_WEIGHT_KG: f64 = 700.0;

/// Largest goal value accepted (steps dominate protein grams)
const MAX_GOAL_VALUE: f64 = 1_000_000.0;

/// Validate a logged protein or steps amount: finite and not negative
///
/// # Errors
///
/// Returns `ValueOutOfRange` naming `field` when the value is rejected
pub fn validate_habit_amount(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} must be a non-negative finite number"),
        ));
    }
    Ok(value)
}

/// Validate a goal value and round it to a whole unit
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the value is not a positive finite number
pub fn validate_goal_value(field: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value <= 0.0 || value > MAX_GOAL_VALUE {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} must be a positive finite number"),
        ));
    }
    let rounded = value.round();
    if rounded < 1.0 {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} must round to at least 1"),
        ));
    }
    Ok(rounded as u32)
}

/// Validate a body weight in kilograms
///
/// # Errors
///
/// Returns `ValueOutOfRange` for negative, zero, non-finite, or implausible weights
pub fn validate_body_weight(weight_kg: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_BODY_WEIGHT_KG {
        return Err(AppError::value_out_of_range(
            "weight_kg",
            "Weight must be a positive finite number of kilograms",
        ));
    }
    Ok(weight_kg)
}

/// Validate that a check-in week start is a Monday
///
/// # Errors
///
/// Returns `InvalidInput` when `week_start` is any other weekday
pub fn validate_week_start(week_start: NaiveDate) -> AppResult<NaiveDate> {
    if week_start.weekday() != Weekday::Mon {
        return Err(AppError::invalid_input(format!(
            "Week start {week_start} is a {:?}, expected a Monday",
            week_start.weekday()
        ))
        .with_field("week_start"));
    }
    Ok(week_start)
}
