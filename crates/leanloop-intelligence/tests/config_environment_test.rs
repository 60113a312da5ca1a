// ABOUTME: Tests for engine configuration loading from LEANLOOP_* environment variables
// ABOUTME: Runs serially because environment variables are process-global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use leanloop_core::errors::{AppError, ErrorCode};
use leanloop_intelligence::config::{ConfigError, EngineConfig};
use serial_test::serial;
use std::env;

fn with_env<F: FnOnce()>(vars: &[(&str, &str)], test: F) {
    for (key, value) in vars {
        env::set_var(key, value);
    }
    test();
    for (key, _) in vars {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let config = EngineConfig::load().unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    with_env(
        &[
            ("LEANLOOP_STEPS_CEILING", "18000"),
            ("LEANLOOP_GRADE_WORKOUT_TARGET", "4"),
            ("LEANLOOP_MAINTENANCE_DEADBAND_PCT", "0.004"),
        ],
        || {
            let config = EngineConfig::load().unwrap();
            assert_eq!(config.limits.steps_ceiling, 18_000);
            assert_eq!(config.grading.targets.workouts, 4);
            assert!((config.maintenance.deadband_pct - 0.004).abs() < f64::EPSILON);
        },
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    with_env(&[("LEANLOOP_STEPS_FLOOR", "lots")], || {
        let err = EngineConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("LEANLOOP_STEPS_FLOOR"));
    });
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    with_env(
        &[
            ("LEANLOOP_GRADE_GOLD", "0.6"),
            ("LEANLOOP_GRADE_SILVER", "0.7"),
        ],
        || {
            let err = EngineConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRange(_)));

            let app_error: AppError = err.into();
            assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
        },
    );
}
