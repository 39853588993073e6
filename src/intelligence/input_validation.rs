// ABOUTME: Input validation turning raw form fields into a typed UserInput
// ABOUTME: Range checks for body metrics and label parsing for the enumerated fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! The calculator assumes range-constrained input. This module is the only
//! place those ranges are enforced.

use serde::{Deserialize, Serialize};
use wellness_core::constants::limits;
use wellness_core::errors::{AppError, AppResult};
use wellness_core::models::{ExerciseLevel, Gender, Goal, UserInput};

/// Un-normalized form fields as submitted
///
/// Every field is optional so that partially filled submissions (for example
/// a JSON profile missing a key) are reported field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUserInput {
    /// Weight (kg)
    pub weight_kg: Option<f64>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Age (years)
    pub age_years: Option<i64>,
    /// Gender label
    pub gender: Option<String>,
    /// Exercise level label
    pub exercise_level: Option<String>,
    /// Goal label
    pub goal: Option<String>,
    /// Water intake (cups per day)
    pub water_cups_reported: Option<i64>,
}

impl RawUserInput {
    /// Fill fields missing here from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            weight_kg: self.weight_kg.or(fallback.weight_kg),
            height_cm: self.height_cm.or(fallback.height_cm),
            age_years: self.age_years.or(fallback.age_years),
            gender: self.gender.or(fallback.gender),
            exercise_level: self.exercise_level.or(fallback.exercise_level),
            goal: self.goal.or(fallback.goal),
            water_cups_reported: self.water_cups_reported.or(fallback.water_cups_reported),
        }
    }
}

/// Validate raw form fields and build a `UserInput`
///
/// # Errors
///
/// - `MissingRequiredField` when a field is absent
/// - `InvalidInput` for non-finite numbers or unknown labels
/// - `ValueOutOfRange` for numbers outside the accepted ranges
pub fn validate_user_input(raw: &RawUserInput) -> AppResult<UserInput> {
    let weight_kg = validate_measure(
        "weight_kg",
        raw.weight_kg,
        limits::WEIGHT_KG_MIN,
        limits::WEIGHT_KG_MAX,
    )?;
    let height_cm = validate_measure(
        "height_cm",
        raw.height_cm,
        limits::HEIGHT_CM_MIN,
        limits::HEIGHT_CM_MAX,
    )?;
    let age_years = validate_count(
        "age_years",
        raw.age_years,
        limits::AGE_YEARS_MIN,
        limits::AGE_YEARS_MAX,
    )?;
    let water_cups_reported = validate_count(
        "water_cups_reported",
        raw.water_cups_reported,
        0,
        limits::WATER_CUPS_MAX,
    )?;

    let gender: Gender = require("gender", raw.gender.as_deref())?.parse()?;
    let exercise_level: ExerciseLevel =
        require("exercise_level", raw.exercise_level.as_deref())?.parse()?;
    let goal: Goal = require("goal", raw.goal.as_deref())?.parse()?;

    Ok(UserInput {
        weight_kg,
        height_cm,
        age_years,
        gender,
        exercise_level,
        goal,
        water_cups_reported,
    })
}

fn require<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

fn validate_measure(field: &str, value: Option<f64>, min: f64, max: f64) -> AppResult<f64> {
    let value = require(field, value)?;
    if !value.is_finite() {
        return Err(
            AppError::invalid_input(format!("{field} must be a finite number")).with_field(field),
        );
    }
    if !(min..=max).contains(&value) {
        return Err(AppError::out_of_range(field, value, min, max));
    }
    Ok(value)
}

fn validate_count(field: &str, value: Option<i64>, min: u32, max: u32) -> AppResult<u32> {
    let value = require(field, value)?;
    u32::try_from(value)
        .ok()
        .filter(|count| (min..=max).contains(count))
        .ok_or_else(|| {
            AppError::out_of_range(field, value as f64, f64::from(min), f64::from(max))
        })
}
