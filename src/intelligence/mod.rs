// ABOUTME: Health metrics and recommendation pipeline
// ABOUTME: Input validation, metrics calculation, and plan templating behind one assessment entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns a submitted profile into derived health metrics and the
//! recommendation text built from them.

/// One-call assessment of a submission
pub mod assessment;
/// Range checks and label parsing for raw form fields
pub mod input_validation;
/// BMI, BMR, TDEE, calorie target, macros, and water
pub mod metrics_calculator;
/// Meal, exercise, and hydration text templates
pub mod plan_templater;

pub use assessment::{assess, assess_raw, WellnessAssessment};
pub use input_validation::{validate_user_input, RawUserInput};
pub use metrics_calculator::{
    activity_multiplier, activity_multiplier_for_label, bmr_gender_assumed,
    calculate_bmi, calculate_calorie_target, calculate_derived_metrics, calculate_macro_split,
    calculate_mifflin_st_jeor, calculate_tdee, categorize_bmi, recommended_water_cups,
    recommended_water_ml,
};
pub use plan_templater::{
    build_exercise_plan, build_hydration_advice, build_meal_plan, build_wellness_plan,
    suggested_items, ExercisePlan, HydrationAdvice, HydrationStatus, MealPlan, MealSuggestion,
    WellnessPlan,
};
