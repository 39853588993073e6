// ABOUTME: Nutrition configuration for energy and macronutrient calculations
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, macros, and hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Every lookup table the calculator uses lives here as an explicit, validated
//! map instead of an implicit conditional.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wellness_core::constants::{physiological, units};
use wellness_core::models::{ExerciseLevel, Goal};

/// Which sex constant to use when gender is `other`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OtherGenderFormula {
    /// Use the female constant (-161)
    #[default]
    Female,
    /// Use the average of the male and female constants
    Midpoint,
}

impl FromStr for OtherGenderFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "midpoint" => Ok(Self::Midpoint),
            other => Err(ConfigError::Parse(format!(
                "unknown other-gender formula '{other}', expected female or midpoint"
            ))),
        }
    }
}

impl fmt::Display for OtherGenderFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("female"),
            Self::Midpoint => f.write_str("midpoint"),
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant selection for gender `other`
    pub other_gender_formula: OtherGenderFormula,
}

impl BmrConfig {
    /// Sex constant applied for gender `other`
    #[must_use]
    pub fn other_gender_constant(&self) -> f64 {
        match self.other_gender_formula {
            OtherGenderFormula::Female => self.msj_female_constant,
            OtherGenderFormula::Midpoint => {
                (self.msj_male_constant + self.msj_female_constant) / 2.0
            }
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light exercise (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate exercise (3-5 days/week): 1.55
    pub moderate: f64,
    /// Hard exercise (6-7 days/week): 1.725
    pub active: f64,
    /// Very hard exercise or physical job: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an exercise level
    #[must_use]
    pub const fn factor_for(&self, level: ExerciseLevel) -> f64 {
        match level {
            ExerciseLevel::Sedentary => self.sedentary,
            ExerciseLevel::Light => self.light,
            ExerciseLevel::Moderate => self.moderate,
            ExerciseLevel::Active => self.active,
            ExerciseLevel::VeryActive => self.very_active,
        }
    }

    /// Factors in level order, least to most active
    #[must_use]
    pub const fn as_table(&self) -> [(ExerciseLevel, f64); 5] {
        [
            (ExerciseLevel::Sedentary, self.sedentary),
            (ExerciseLevel::Light, self.light),
            (ExerciseLevel::Moderate, self.moderate),
            (ExerciseLevel::Active, self.active),
            (ExerciseLevel::VeryActive, self.very_active),
        ]
    }
}

/// Calorie adjustments applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Daily deficit for weight loss (~0.45 kg/week): 500 kcal
    pub lose_deficit_kcal: f64,
    /// Daily surplus for weight gain: 300 kcal
    pub gain_surplus_kcal: f64,
    /// Floor for weight-loss targets: 1200 kcal
    pub min_calories_kcal: f64,
}

/// Macronutrient split configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein when losing or gaining weight (g/kg): 1.6
    pub protein_weight_change_g_per_kg: f64,
    /// Protein when maintaining weight (g/kg): 1.2
    pub protein_maintain_g_per_kg: f64,
    /// Share of calories from fat: 0.30
    pub fat_calorie_fraction: f64,
}

impl MacronutrientConfig {
    /// Protein ratio for a goal
    #[must_use]
    pub const fn protein_ratio_for(&self, goal: Goal) -> f64 {
        if goal.changes_weight() {
            self.protein_weight_change_g_per_kg
        } else {
            self.protein_maintain_g_per_kg
        }
    }
}

/// Hydration guideline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Recommended water per kg of body weight (ml): 30
    pub water_ml_per_kg: f64,
    /// Volume of one cup (ml): 250
    pub ml_per_cup: f64,
}

/// BMI classification cut-offs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholdsConfig {
    /// Underweight below this BMI: 18.5
    pub underweight_below: f64,
    /// Normal below this BMI: 25.0
    pub normal_below: f64,
    /// Overweight below this BMI, obesity at or above: 30.0
    pub overweight_below: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        use physiological::mifflin_st_jeor as msj;
        Self {
            msj_weight_coef: msj::WEIGHT_COEF,
            msj_height_coef: msj::HEIGHT_COEF,
            msj_age_coef: msj::AGE_COEF,
            msj_male_constant: msj::MALE_CONSTANT,
            msj_female_constant: msj::FEMALE_CONSTANT,
            other_gender_formula: OtherGenderFormula::Female,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_deficit_kcal: 500.0,
            gain_surplus_kcal: 300.0,
            min_calories_kcal: physiological::MIN_SAFE_CALORIES,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_weight_change_g_per_kg: 1.6,
            protein_maintain_g_per_kg: 1.2,
            fat_calorie_fraction: 0.30,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            water_ml_per_kg: physiological::WATER_ML_PER_KG,
            ml_per_cup: units::ML_PER_CUP,
        }
    }
}

impl Default for BmiThresholdsConfig {
    fn default() -> Self {
        use physiological::bmi;
        Self {
            underweight_below: bmi::UNDERWEIGHT_BELOW,
            normal_below: bmi::NORMAL_BELOW,
            overweight_below: bmi::OVERWEIGHT_BELOW,
        }
    }
}
