// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and reference user profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `wellness_planner`

use std::env;
use std::sync::Once;
use tracing::Level;
use wellness_planner::intelligence::RawUserInput;
use wellness_planner::models::{ExerciseLevel, Gender, Goal, UserInput};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 175 cm, 25-year-old male, moderate activity, maintaining, 6 cups
pub fn reference_input() -> UserInput {
    UserInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 25,
        gender: Gender::Male,
        exercise_level: ExerciseLevel::Moderate,
        goal: Goal::Maintain,
        water_cups_reported: 6,
    }
}

/// Raw form fields matching [`reference_input`]
pub fn reference_raw_input() -> RawUserInput {
    RawUserInput {
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age_years: Some(25),
        gender: Some("male".into()),
        exercise_level: Some("moderate".into()),
        goal: Some("maintain".into()),
        water_cups_reported: Some(6),
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}
