// ABOUTME: Derived health metrics produced by the metrics calculator
// ABOUTME: DerivedMetrics, BmiCategory, and MacroSplit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obesity,
    /// BMI could not be computed
    Unknown,
}

impl BmiCategory {
    /// Label used in reports and exports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein (g)
    pub protein_g: u32,
    /// Fat (g)
    pub fat_g: u32,
    /// Carbohydrate (g)
    pub carb_g: u32,
}

/// Everything the calculator derives from one `UserInput`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    /// Body Mass Index (kg/m²), absent when height is not positive
    pub bmi: Option<f64>,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day, Mifflin-St Jeor)
    pub bmr_kcal: f64,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub calorie_target_kcal: f64,
    /// Protein ratio selected from the goal (g/kg)
    pub protein_g_per_kg: f64,
    /// Macronutrient targets
    pub macros: MacroSplit,
    /// Recommended daily water (ml)
    pub recommended_water_ml: f64,
    /// Recommended daily water (cups)
    pub recommended_water_cups: u32,
    /// Set when gender had no dedicated BMR constant and one was assumed
    pub bmr_gender_assumed: bool,
}
