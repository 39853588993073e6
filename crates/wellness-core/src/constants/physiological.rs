// ABOUTME: Physiological reference values used by the metrics calculator
// ABOUTME: WHO BMI cut-offs and the Mifflin-St Jeor coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants
//!
//! # References
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   Technical Report Series 894.
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//!   expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.

/// BMI cut-offs (kg/m²), WHO adult classification
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value (and at least `UNDERWEIGHT_BELOW`): normal weight
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value (and at least `NORMAL_BELOW`): overweight; at or above: obesity
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Mifflin-St Jeor equation coefficients
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Male sex constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female sex constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Calorie floor applied to weight-loss targets (kcal/day)
pub const MIN_SAFE_CALORIES: f64 = 1200.0;

/// Daily water recommendation (ml per kg body weight)
pub const WATER_ML_PER_KG: f64 = 30.0;
