// ABOUTME: Algorithm tests for the health metrics calculator
// ABOUTME: Covers BMI, Mifflin-St Jeor BMR, TDEE, calorie targets, macros, water, and the full pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Algorithm tests for the metrics calculator
//!
//! - BMI and category boundaries, including the absent-height case
//! - Mifflin-St Jeor for every gender, including the configurable `other` mapping
//! - Activity multipliers, calorie targets, and the 1200 kcal floor
//! - Macro split with the non-negative carbohydrate floor
//! - Water recommendation and whole-pipeline determinism

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::assert_close;
use wellness_planner::{
    config::intelligence::{
        ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, CalculatorConfig,
        GoalAdjustmentConfig, HydrationConfig, MacronutrientConfig, OtherGenderFormula,
    },
    intelligence::metrics_calculator::{
        activity_multiplier, activity_multiplier_for_label, calculate_bmi,
        calculate_calorie_target, calculate_derived_metrics, calculate_macro_split,
        calculate_mifflin_st_jeor, calculate_tdee, categorize_bmi, recommended_water_cups,
        recommended_water_ml,
    },
    models::{BmiCategory, ExerciseLevel, Gender, Goal, UserInput},
};

mod common;

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_typical_adult() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert_close(bmi, 70.0 / (1.75 * 1.75), 1e-9, "BMI");
    assert_close(bmi, 22.86, 0.01, "BMI");
    assert_eq!(
        categorize_bmi(Some(bmi), &BmiThresholdsConfig::default()),
        BmiCategory::Normal
    );
}

#[test]
fn test_bmi_zero_height_is_absent() {
    let bmi = calculate_bmi(70.0, 0.0);
    assert!(bmi.is_none());
    assert_eq!(
        categorize_bmi(bmi, &BmiThresholdsConfig::default()),
        BmiCategory::Unknown
    );
}

#[test]
fn test_bmi_categories_cover_all_brackets() {
    let thresholds = BmiThresholdsConfig::default();
    let cases = [
        (50.0, 180.0, BmiCategory::Underweight),
        (60.0, 170.0, BmiCategory::Normal),
        (85.0, 175.0, BmiCategory::Overweight),
        (110.0, 170.0, BmiCategory::Obesity),
    ];

    for (weight, height, expected) in cases {
        let bmi = calculate_bmi(weight, height);
        assert_eq!(
            categorize_bmi(bmi, &thresholds),
            expected,
            "{weight} kg / {height} cm"
        );
    }
}

#[test]
fn test_bmi_category_labels() {
    assert_eq!(BmiCategory::Normal.as_str(), "Normal");
    assert_eq!(BmiCategory::Obesity.to_string(), "Obesity");
    assert_eq!(BmiCategory::Unknown.as_str(), "Unknown");
}

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male() {
    let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 25, Gender::Male, &BmrConfig::default());

    // 10 * 70 + 6.25 * 175 - 5 * 25 + 5 = 700 + 1093.75 - 125 + 5
    assert_close(bmr, 1673.75, 1e-9, "male BMR");
}

#[test]
fn test_mifflin_st_jeor_female() {
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 30, Gender::Female, &BmrConfig::default());

    // 600 + 1031.25 - 150 - 161
    assert_close(bmr, 1320.25, 1e-9, "female BMR");
}

#[test]
fn test_mifflin_st_jeor_other_defaults_to_female_constant() {
    let config = BmrConfig::default();
    let other = calculate_mifflin_st_jeor(70.0, 175.0, 25, Gender::Other, &config);
    let female = calculate_mifflin_st_jeor(70.0, 175.0, 25, Gender::Female, &config);
    assert_close(other, female, 1e-9, "other vs female BMR");
}

#[test]
fn test_mifflin_st_jeor_other_midpoint() {
    let config = BmrConfig {
        other_gender_formula: OtherGenderFormula::Midpoint,
        ..BmrConfig::default()
    };
    let other = calculate_mifflin_st_jeor(70.0, 175.0, 25, Gender::Other, &config);

    // (5 + -161) / 2 = -78
    assert_close(other, 1668.75 - 78.0, 1e-9, "midpoint BMR");
}

// ============================================================================
// TDEE AND CALORIE TARGET
// ============================================================================

#[test]
fn test_activity_multipliers() {
    let factors = ActivityFactorsConfig::default();
    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];

    for (level, factor) in ExerciseLevel::ALL.into_iter().zip(expected) {
        assert_close(activity_multiplier(level, &factors), factor, 1e-12, level.as_str());
    }
}

#[test]
fn test_activity_multiplier_for_labels() {
    let factors = ActivityFactorsConfig::default();
    assert_close(
        activity_multiplier_for_label("moderate", &factors),
        1.55,
        1e-12,
        "moderate",
    );
    assert_close(
        activity_multiplier_for_label("very active", &factors),
        1.9,
        1e-12,
        "very active",
    );
    assert_close(
        activity_multiplier_for_label("unknown", &factors),
        1.2,
        1e-12,
        "unknown label",
    );
}

#[test]
fn test_tdee_applies_multiplier() {
    let tdee = calculate_tdee(1673.75, ExerciseLevel::Moderate, &ActivityFactorsConfig::default());
    assert_close(tdee, 1673.75 * 1.55, 1e-9, "TDEE");
}

#[test]
fn test_calorie_target_by_goal() {
    let config = GoalAdjustmentConfig::default();
    assert_close(
        calculate_calorie_target(2000.0, Goal::Lose, &config),
        1500.0,
        1e-9,
        "lose",
    );
    assert_close(
        calculate_calorie_target(2000.0, Goal::Gain, &config),
        2300.0,
        1e-9,
        "gain",
    );
    assert_close(
        calculate_calorie_target(2000.0, Goal::Maintain, &config),
        2000.0,
        1e-9,
        "maintain",
    );
}

#[test]
fn test_calorie_target_floor_on_loss() {
    let config = GoalAdjustmentConfig::default();
    assert_close(
        calculate_calorie_target(1400.0, Goal::Lose, &config),
        1200.0,
        1e-9,
        "floored loss target",
    );
    // Floor only applies when losing
    assert_close(
        calculate_calorie_target(1000.0, Goal::Maintain, &config),
        1000.0,
        1e-9,
        "maintain below floor",
    );
}

// ============================================================================
// MACROS AND WATER
// ============================================================================

#[test]
fn test_macro_split_reference_case() {
    let macros = calculate_macro_split(2000.0, 1.6, 70.0, &MacronutrientConfig::default());

    // protein 112 g = 448 kcal, fat 600 kcal = 66.7 g, carbs (2000 - 448 - 600) / 4 = 238
    assert_eq!(macros.protein_g, 112);
    assert_eq!(macros.fat_g, 67);
    assert_eq!(macros.carb_g, 238);
}

#[test]
fn test_macro_split_energy_roughly_adds_up() {
    let calories = 2400.0;
    let macros = calculate_macro_split(calories, 1.2, 65.0, &MacronutrientConfig::default());
    let energy = f64::from(macros.protein_g) * 4.0
        + f64::from(macros.fat_g) * 9.0
        + f64::from(macros.carb_g) * 4.0;
    assert_close(energy, calories, 10.0, "macro energy");
}

#[test]
fn test_protein_ratio_by_goal() {
    let config = MacronutrientConfig::default();
    assert_close(config.protein_ratio_for(Goal::Lose), 1.6, 1e-12, "lose");
    assert_close(config.protein_ratio_for(Goal::Gain), 1.6, 1e-12, "gain");
    assert_close(config.protein_ratio_for(Goal::Maintain), 1.2, 1e-12, "maintain");
}

#[test]
fn test_water_recommendation() {
    let config = HydrationConfig::default();
    assert_close(recommended_water_ml(70.0, &config), 2100.0, 1e-9, "water ml");
    assert_eq!(recommended_water_cups(70.0, &config), 8);
    assert_eq!(recommended_water_cups(55.0, &config), 7);
    // 10.5 cups ties to the even cup count
    assert_eq!(recommended_water_cups(87.5, &config), 10);
}

// ============================================================================
// FULL PIPELINE
// ============================================================================

#[test]
fn test_derived_metrics_reference_profile() {
    common::init_test_logging();
    let config = CalculatorConfig::default();
    let metrics = calculate_derived_metrics(&common::reference_input(), &config);

    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
    assert_close(metrics.bmr_kcal, 1673.75, 1e-9, "BMR");
    assert_close(metrics.activity_multiplier, 1.55, 1e-12, "multiplier");
    assert_close(metrics.tdee_kcal, 1673.75 * 1.55, 1e-9, "TDEE");
    assert_close(metrics.calorie_target_kcal, metrics.tdee_kcal, 1e-9, "target");
    assert_close(metrics.protein_g_per_kg, 1.2, 1e-12, "protein ratio");
    assert_eq!(metrics.macros.protein_g, 84);
    assert_eq!(metrics.recommended_water_cups, 8);
    assert!(!metrics.bmr_gender_assumed);
}

#[test]
fn test_derived_metrics_flags_assumed_gender() {
    common::init_test_logging();
    let input = UserInput {
        gender: Gender::Other,
        ..common::reference_input()
    };
    let metrics = calculate_derived_metrics(&input, &CalculatorConfig::default());
    assert!(metrics.bmr_gender_assumed);
}

#[test]
fn test_derived_metrics_are_deterministic() {
    let config = CalculatorConfig::default();
    let input = UserInput {
        goal: Goal::Lose,
        exercise_level: ExerciseLevel::VeryActive,
        ..common::reference_input()
    };

    let first = calculate_derived_metrics(&input, &config);
    let second = calculate_derived_metrics(&input, &config);
    assert_eq!(first, second);
}

#[test]
fn test_derived_metrics_with_absent_bmi() {
    let input = UserInput {
        height_cm: 0.0,
        ..common::reference_input()
    };
    let metrics = calculate_derived_metrics(&input, &CalculatorConfig::default());
    assert!(metrics.bmi.is_none());
    assert_eq!(metrics.bmi_category, BmiCategory::Unknown);
}
