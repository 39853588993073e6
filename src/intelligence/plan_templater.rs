// ABOUTME: Table-driven recommendation text for diet, exercise, and hydration
// ABOUTME: Maps derived metrics onto fixed narrative templates with a default branch for every input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Templater
//!
//! Selects fixed narrative strings from the derived metrics. There is no
//! computation here beyond splitting the calorie target across meals; every
//! combination of inputs maps onto a defined template.

use crate::config::intelligence::{CalculatorConfig, HydrationConfig, MealSplitConfig};
use serde::{Deserialize, Serialize};
use wellness_core::models::{BmiCategory, DerivedMetrics, ExerciseLevel, Meal, UserInput};

const BREAKFAST_ITEMS: &[&str] = &[
    "Oats or wholegrain cereal (1 bowl)",
    "1 serving fruit",
    "6-8 egg whites or 1 whole egg + 2 whites or paneer/tofu",
];
const LUNCH_ITEMS: &[&str] = &[
    "1 cup cooked whole grains (rice/quinoa)",
    "Large serving vegetables/salad",
    "100-150 g lean protein (chicken/fish/legumes)",
];
const SNACK_ITEMS: &[&str] = &["Greek yogurt or a handful of nuts + fruit"];
const DINNER_ITEMS: &[&str] = &[
    "Vegetable stir-fry or salad with protein",
    "Smaller portion of carbs than lunch",
];

const CARDIO_BEGINNER: &str = "Start with 20-30 minutes brisk walking 4-5x/week. Gradually increase intensity to include 2 sessions of 20-30 minutes of jogging or cycling.";
const CARDIO_MODERATE: &str = "Maintain 30-45 minutes of moderate cardio 4-5x/week; include 1-2 higher-intensity intervals per week.";
const CARDIO_ADVANCED: &str =
    "Keep varied cardio 4-6x/week, include intervals or sports for intensity and enjoyment.";

const STRENGTH_GENERAL: &str =
    "General strength training 2-3x/week focusing on all major muscle groups.";
const STRENGTH_BUILD: &str = "Focus on progressive resistance training 3x/week to build muscle mass; use compound lifts and ensure calorie surplus if trying to gain.";
const STRENGTH_BALANCED: &str = "Balanced strength training 2-4x/week to preserve muscle and support metabolism; combine full-body sessions.";
const STRENGTH_LOW_IMPACT: &str = "Begin with low-impact strength and mobility work 2-3x/week, gradually increase intensity; combine with aerobic work for fat loss.";

const MOBILITY: &str = "Include mobility and flexibility work (10-15 min) after workouts or on rest days, such as yoga or dynamic stretching.";

const HYDRATION_BELOW: &str =
    "You're drinking less than the general recommendation; try increasing water gradually.";
const HYDRATION_MEETS: &str = "Your reported water intake meets or exceeds the general guideline.";

/// General nutrition guidance shown with every plan
pub const NUTRITION_TIPS: &[&str] = &[
    "Prefer whole foods over ultra-processed foods.",
    "Prioritise lean protein, whole grains, legumes, vegetables, and healthy fats.",
    "Watch portion sizes and use a food scale/app if precise tracking is needed.",
    "If trying to lose weight, aim for a modest calorie deficit and maintain protein intake to preserve muscle.",
];

/// Safety notes shown with every plan
pub const SAFETY_NOTES: &[&str] = &[
    "Consult a doctor before starting any new intense program, especially if you have existing medical conditions.",
    "Start slow and progress gradually.",
    "Sleep, stress management and consistent hydration are essential for health and fitness goals.",
    "This tool provides general guidance; for a detailed clinical or therapeutic plan, consult a registered dietitian or certified trainer.",
];

/// Suggested foods for a meal
#[must_use]
pub const fn suggested_items(meal: Meal) -> &'static [&'static str] {
    match meal {
        Meal::Breakfast => BREAKFAST_ITEMS,
        Meal::Lunch => LUNCH_ITEMS,
        Meal::Snack => SNACK_ITEMS,
        Meal::Dinner => DINNER_ITEMS,
    }
}

/// One meal of the sample plan
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MealSuggestion {
    /// Which meal
    pub meal: Meal,
    /// Approximate calories for the meal (kcal)
    pub calories_kcal: u32,
    /// Suggested foods
    pub items: &'static [&'static str],
}

/// Sample meal plan for a day
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Daily target the plan is built from (kcal, rounded)
    pub daily_calories_kcal: u32,
    /// Meals in serving order
    pub meals: Vec<MealSuggestion>,
}

/// Cardio, strength, and mobility guidance
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExercisePlan {
    /// Aerobic guidance, chosen by exercise level
    pub cardio: &'static str,
    /// Strength guidance, chosen by BMI category
    pub strength: &'static str,
    /// Mobility and recovery guidance
    pub mobility: &'static str,
}

/// Whether reported water intake reaches the recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HydrationStatus {
    /// Fewer cups than recommended
    BelowRecommendation,
    /// At least the recommended cups
    MeetsRecommendation,
}

/// Reported vs recommended water intake
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HydrationAdvice {
    /// Reported cups per day
    pub reported_cups: u32,
    /// Reported volume (ml)
    pub reported_ml: f64,
    /// Recommended cups per day
    pub recommended_cups: u32,
    /// Recommended volume (ml)
    pub recommended_ml: f64,
    /// Comparison outcome
    pub status: HydrationStatus,
    /// Message for the outcome
    pub message: &'static str,
}

/// Every recommendation produced for one submission
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WellnessPlan {
    /// Sample meal plan
    pub meal_plan: MealPlan,
    /// Exercise guidance
    pub exercise_plan: ExercisePlan,
    /// Hydration check
    pub hydration: HydrationAdvice,
    /// General nutrition tips
    pub nutrition_tips: &'static [&'static str],
    /// Safety notes
    pub safety_notes: &'static [&'static str],
}

/// Split the daily calorie target across meals
///
/// The target is rounded to whole kcal first (ties to even); each meal's
/// share is then truncated to whole kcal.
#[must_use]
pub fn build_meal_plan(calorie_target_kcal: f64, split: &MealSplitConfig) -> MealPlan {
    let daily_calories_kcal = calorie_target_kcal.round_ties_even().max(0.0) as u32;
    let meals = Meal::ALL
        .iter()
        .map(|&meal| MealSuggestion {
            meal,
            calories_kcal: (f64::from(daily_calories_kcal) * split.share_for(meal)) as u32,
            items: suggested_items(meal),
        })
        .collect();

    MealPlan {
        daily_calories_kcal,
        meals,
    }
}

/// Cardio guidance for an exercise level
#[must_use]
pub const fn cardio_guidance(level: ExerciseLevel) -> &'static str {
    match level {
        ExerciseLevel::Sedentary | ExerciseLevel::Light => CARDIO_BEGINNER,
        ExerciseLevel::Moderate => CARDIO_MODERATE,
        ExerciseLevel::Active | ExerciseLevel::VeryActive => CARDIO_ADVANCED,
    }
}

/// Strength guidance for a BMI category
#[must_use]
pub const fn strength_guidance(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Unknown => STRENGTH_GENERAL,
        BmiCategory::Underweight => STRENGTH_BUILD,
        BmiCategory::Normal => STRENGTH_BALANCED,
        BmiCategory::Overweight | BmiCategory::Obesity => STRENGTH_LOW_IMPACT,
    }
}

/// Exercise plan from BMI category and exercise level
#[must_use]
pub const fn build_exercise_plan(category: BmiCategory, level: ExerciseLevel) -> ExercisePlan {
    ExercisePlan {
        cardio: cardio_guidance(level),
        strength: strength_guidance(category),
        mobility: MOBILITY,
    }
}

/// Compare reported water intake with the recommendation
#[must_use]
pub fn build_hydration_advice(
    reported_cups: u32,
    metrics: &DerivedMetrics,
    config: &HydrationConfig,
) -> HydrationAdvice {
    let status = if reported_cups < metrics.recommended_water_cups {
        HydrationStatus::BelowRecommendation
    } else {
        HydrationStatus::MeetsRecommendation
    };

    HydrationAdvice {
        reported_cups,
        reported_ml: f64::from(reported_cups) * config.ml_per_cup,
        recommended_cups: metrics.recommended_water_cups,
        recommended_ml: metrics.recommended_water_ml,
        status,
        message: match status {
            HydrationStatus::BelowRecommendation => HYDRATION_BELOW,
            HydrationStatus::MeetsRecommendation => HYDRATION_MEETS,
        },
    }
}

/// Build every recommendation for one submission
#[must_use]
pub fn build_wellness_plan(
    input: &UserInput,
    metrics: &DerivedMetrics,
    config: &CalculatorConfig,
) -> WellnessPlan {
    WellnessPlan {
        meal_plan: build_meal_plan(metrics.calorie_target_kcal, &config.meal_split),
        exercise_plan: build_exercise_plan(metrics.bmi_category, input.exercise_level),
        hydration: build_hydration_advice(input.water_cups_reported, metrics, &config.hydration),
        nutrition_tips: NUTRITION_TIPS,
        safety_notes: SAFETY_NOTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_meal_has_items() {
        for meal in Meal::ALL {
            assert!(!suggested_items(meal).is_empty(), "{meal} has no items");
        }
    }

    #[test]
    fn meal_calories_are_truncated() {
        // 1999 * 0.15 = 299.85
        let plan = build_meal_plan(1999.4, &MealSplitConfig::default());
        assert_eq!(plan.daily_calories_kcal, 1999);
        assert_eq!(plan.meals[2].meal, Meal::Snack);
        assert_eq!(plan.meals[2].calories_kcal, 299);
    }
}
