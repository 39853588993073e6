// ABOUTME: Health metrics calculation using closed-form reference formulas
// ABOUTME: BMI, BMR, TDEE, goal-adjusted calorie target, macro split, and water intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculator Module
//!
//! Pure functions from a validated [`UserInput`] to [`DerivedMetrics`]. Every
//! function is total: the only degenerate case, a non-positive height, yields
//! an absent BMI and the `Unknown` category rather than an error.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic. TRS 894.

use crate::config::intelligence::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, CalculatorConfig,
    GoalAdjustmentConfig, HydrationConfig, MacronutrientConfig,
};
use tracing::debug;
use wellness_core::constants::units::{
    CM_PER_METER, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use wellness_core::models::{
    BmiCategory, DerivedMetrics, ExerciseLevel, Gender, Goal, MacroSplit, UserInput,
};

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// Returns `None` when height is not positive.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let height_m = height_cm / CM_PER_METER;
    if height_m <= 0.0 {
        return None;
    }
    Some(weight_kg / (height_m * height_m))
}

/// Classify a BMI value
///
/// Lower bounds are inclusive: 18.5 is `Normal`, 25.0 is `Overweight`, 30.0 is `Obesity`.
#[must_use]
pub fn categorize_bmi(bmi: Option<f64>, thresholds: &BmiThresholdsConfig) -> BmiCategory {
    match bmi {
        None => BmiCategory::Unknown,
        Some(value) if value < thresholds.underweight_below => BmiCategory::Underweight,
        Some(value) if value < thresholds.normal_below => BmiCategory::Normal,
        Some(value) if value < thresholds.overweight_below => BmiCategory::Overweight,
        Some(_) => BmiCategory::Obesity,
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
/// - Other: per [`BmrConfig::other_gender_formula`] (female constant by default)
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => config.other_gender_constant(),
    };

    weight_component + height_component + age_component + gender_constant
}

/// Whether the BMR for this gender relies on an assumed sex constant
#[must_use]
pub const fn bmr_gender_assumed(gender: Gender) -> bool {
    matches!(gender, Gender::Other)
}

/// Activity multiplier for an exercise level
#[must_use]
pub const fn activity_multiplier(level: ExerciseLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Activity multiplier for a free-text level label
///
/// Unrecognized labels fall back to the sedentary factor.
#[must_use]
pub fn activity_multiplier_for_label(label: &str, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(ExerciseLevel::from_str_lossy(label))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ExerciseLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_multiplier(level, config)
}

/// Goal-adjusted daily calorie target
///
/// - lose: max(floor, TDEE - deficit)
/// - gain: TDEE + surplus
/// - maintain: TDEE
#[must_use]
pub fn calculate_calorie_target(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::Lose => (tdee - config.lose_deficit_kcal).max(config.min_calories_kcal),
        Goal::Gain => tdee + config.gain_surplus_kcal,
        Goal::Maintain => tdee,
    }
}

/// Split a calorie target into protein, fat, and carbohydrate grams
///
/// Protein comes from body weight, fat takes a fixed share of calories, and
/// carbohydrates take whatever is left (never below zero). Each value is
/// rounded to whole grams.
#[must_use]
pub fn calculate_macro_split(
    calories: f64,
    protein_g_per_kg: f64,
    weight_kg: f64,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let protein_g = protein_g_per_kg * weight_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = calories * config.fat_calorie_fraction;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carb_kcal = (calories - protein_kcal - fat_kcal).max(0.0);
    let carb_g = carb_kcal / KCAL_PER_G_CARB;

    MacroSplit {
        protein_g: round_to_whole(protein_g),
        fat_g: round_to_whole(fat_g),
        carb_g: round_to_whole(carb_g),
    }
}

/// Recommended daily water in milliliters
#[must_use]
pub fn recommended_water_ml(weight_kg: f64, config: &HydrationConfig) -> f64 {
    config.water_ml_per_kg * weight_kg
}

/// Recommended daily water in cups, rounded to the nearest cup
#[must_use]
pub fn recommended_water_cups(weight_kg: f64, config: &HydrationConfig) -> u32 {
    round_to_whole(recommended_water_ml(weight_kg, config) / config.ml_per_cup)
}

/// Run the full calculation pipeline for one submission
#[must_use]
pub fn calculate_derived_metrics(input: &UserInput, config: &CalculatorConfig) -> DerivedMetrics {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let bmi_category = categorize_bmi(bmi, &config.bmi_thresholds);

    let bmr_kcal = calculate_mifflin_st_jeor(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.gender,
        &config.bmr,
    );
    let gender_assumed = bmr_gender_assumed(input.gender);
    if gender_assumed {
        debug!(
            formula = %config.bmr.other_gender_formula,
            "No Mifflin-St Jeor constant for gender 'other', applying configured substitute"
        );
    }

    let multiplier = activity_multiplier(input.exercise_level, &config.activity_factors);
    let tdee_kcal = calculate_tdee(bmr_kcal, input.exercise_level, &config.activity_factors);
    let calorie_target_kcal =
        calculate_calorie_target(tdee_kcal, input.goal, &config.goal_adjustment);

    let protein_g_per_kg = config.macronutrients.protein_ratio_for(input.goal);
    let macros = calculate_macro_split(
        calorie_target_kcal,
        protein_g_per_kg,
        input.weight_kg,
        &config.macronutrients,
    );

    let metrics = DerivedMetrics {
        bmi,
        bmi_category,
        bmr_kcal,
        activity_multiplier: multiplier,
        tdee_kcal,
        calorie_target_kcal,
        protein_g_per_kg,
        macros,
        recommended_water_ml: recommended_water_ml(input.weight_kg, &config.hydration),
        recommended_water_cups: recommended_water_cups(input.weight_kg, &config.hydration),
        bmr_gender_assumed: gender_assumed,
    };

    debug!(
        bmi = ?metrics.bmi,
        category = %metrics.bmi_category,
        bmr_kcal = metrics.bmr_kcal,
        tdee_kcal = metrics.tdee_kcal,
        calorie_target_kcal = metrics.calorie_target_kcal,
        "Derived metrics calculated"
    );

    metrics
}

/// Round a non-negative quantity to a whole number, ties to even
fn round_to_whole(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_boundaries_are_inclusive_on_the_lower_end() {
        let thresholds = BmiThresholdsConfig::default();
        assert_eq!(
            categorize_bmi(Some(18.4999), &thresholds),
            BmiCategory::Underweight
        );
        assert_eq!(categorize_bmi(Some(18.5), &thresholds), BmiCategory::Normal);
        assert_eq!(
            categorize_bmi(Some(25.0), &thresholds),
            BmiCategory::Overweight
        );
        assert_eq!(categorize_bmi(Some(30.0), &thresholds), BmiCategory::Obesity);
        assert_eq!(categorize_bmi(None, &thresholds), BmiCategory::Unknown);
    }

    #[test]
    fn negative_height_has_no_bmi() {
        assert!(calculate_bmi(70.0, -10.0).is_none());
    }

    #[test]
    fn carbs_never_go_negative() {
        // 100 kg at 1.6 g/kg = 640 kcal protein; fat 30% of 800 = 240 kcal
        let macros = calculate_macro_split(800.0, 1.6, 100.0, &MacronutrientConfig::default());
        assert_eq!(macros.carb_g, 0);
        assert_eq!(macros.protein_g, 160);
    }

    #[test]
    fn rounding_sends_ties_to_even() {
        assert_eq!(round_to_whole(2.5), 2);
        assert_eq!(round_to_whole(3.5), 4);
        assert_eq!(round_to_whole(10.5), 10);
        assert_eq!(round_to_whole(8.4), 8);
    }
}
