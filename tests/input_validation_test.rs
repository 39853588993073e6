// ABOUTME: Tests for raw form field validation
// ABOUTME: Covers numeric ranges, label spellings, missing fields, and error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::reference_raw_input;
use wellness_planner::{
    config::intelligence::CalculatorConfig,
    errors::{ErrorCode, ErrorResponse},
    intelligence::{assess_raw, validate_user_input, RawUserInput},
    models::{ExerciseLevel, Gender, Goal},
};

mod common;

// ============================================================================
// NUMERIC RANGES
// ============================================================================

#[test]
fn test_reference_input_is_valid() {
    let input = validate_user_input(&reference_raw_input()).unwrap();
    assert_eq!(input, common::reference_input());
}

#[test]
fn test_weight_below_minimum_is_rejected() {
    let raw = RawUserInput {
        weight_kg: Some(19.9),
        ..reference_raw_input()
    };
    let err = validate_user_input(&raw).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.field.as_deref(), Some("weight_kg"));
    assert_eq!(err.context.details["min"], 20.0);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let raw = RawUserInput {
        weight_kg: Some(300.0),
        height_cm: Some(80.0),
        age_years: Some(100),
        water_cups_reported: Some(0),
        ..reference_raw_input()
    };
    assert!(validate_user_input(&raw).is_ok());
}

#[test]
fn test_out_of_range_fields_are_named() {
    let cases = [
        (
            RawUserInput {
                height_cm: Some(250.5),
                ..reference_raw_input()
            },
            "height_cm",
        ),
        (
            RawUserInput {
                age_years: Some(9),
                ..reference_raw_input()
            },
            "age_years",
        ),
        (
            RawUserInput {
                water_cups_reported: Some(21),
                ..reference_raw_input()
            },
            "water_cups_reported",
        ),
    ];

    for (raw, field) in cases {
        let err = validate_user_input(&raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{field}");
        assert_eq!(err.context.field.as_deref(), Some(field));
    }
}

#[test]
fn test_infinite_height_is_invalid_input() {
    let raw = RawUserInput {
        height_cm: Some(f64::INFINITY),
        ..reference_raw_input()
    };
    let err = validate_user_input(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// LABELS
// ============================================================================

#[test]
fn test_exercise_level_spellings() {
    for label in ["very_active", "very active", "Very-Active", "VERY ACTIVE"] {
        let raw = RawUserInput {
            exercise_level: Some(label.into()),
            ..reference_raw_input()
        };
        let input = validate_user_input(&raw).unwrap();
        assert_eq!(input.exercise_level, ExerciseLevel::VeryActive, "{label}");
    }
}

#[test]
fn test_labels_are_case_insensitive() {
    let raw = RawUserInput {
        gender: Some("Female".into()),
        goal: Some("LOSE".into()),
        ..reference_raw_input()
    };
    let input = validate_user_input(&raw).unwrap();
    assert_eq!(input.gender, Gender::Female);
    assert_eq!(input.goal, Goal::Lose);
}

#[test]
fn test_unknown_labels_are_invalid_input() {
    let cases = [
        (
            RawUserInput {
                gender: Some("unspecified".into()),
                ..reference_raw_input()
            },
            "gender",
        ),
        (
            RawUserInput {
                exercise_level: Some("extreme".into()),
                ..reference_raw_input()
            },
            "exercise_level",
        ),
        (
            RawUserInput {
                goal: Some("bulk".into()),
                ..reference_raw_input()
            },
            "goal",
        ),
    ];

    for (raw, field) in cases {
        let err = validate_user_input(&raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{field}");
        assert_eq!(err.context.field.as_deref(), Some(field));
    }
}

// ============================================================================
// MISSING FIELDS AND ERROR PAYLOADS
// ============================================================================

#[test]
fn test_empty_input_reports_first_missing_field() {
    let err = validate_user_input(&RawUserInput::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.field.as_deref(), Some("weight_kg"));
}

#[test]
fn test_raw_input_deserializes_from_partial_json() {
    let raw: RawUserInput =
        serde_json::from_str(r#"{"weight_kg": 82.5, "goal": "gain"}"#).unwrap();
    let merged = raw.or(reference_raw_input());

    let input = validate_user_input(&merged).unwrap();
    assert!((input.weight_kg - 82.5).abs() < f64::EPSILON);
    assert_eq!(input.goal, Goal::Gain);
}

#[test]
fn test_error_response_payload() {
    let raw = RawUserInput {
        age_years: Some(-1),
        ..reference_raw_input()
    };
    let err = assess_raw(&raw, &CalculatorConfig::default()).unwrap_err();
    let exit_code = err.code.exit_code();
    let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();

    assert_eq!(exit_code, 2);
    assert_eq!(json["error"]["field"], "age_years");
    assert!(json["error"]["message"].as_str().unwrap().contains("age_years"));
}
