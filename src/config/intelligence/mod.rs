// ABOUTME: Calculator configuration for the health metrics pipeline
// ABOUTME: Orchestrates the domain configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments, macros, hydration, BMI cut-offs
//! - `meal_plan` - Per-meal shares of the daily calorie target
//!
//! Configuration is environment-only: defaults are overridden by `WELLNESS_*`
//! variables, then validated once.

pub mod error;
pub mod meal_plan;
pub mod nutrition;

pub use error::ConfigError;
pub use meal_plan::MealSplitConfig;
pub use nutrition::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, GoalAdjustmentConfig,
    HydrationConfig, MacronutrientConfig, OtherGenderFormula,
};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Main calculator configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based calorie adjustments
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Protein ratios and fat share
    pub macronutrients: MacronutrientConfig,
    /// Water recommendation
    pub hydration: HydrationConfig,
    /// Meal calorie shares
    pub meal_split: MealSplitConfig,
    /// BMI classification cut-offs
    pub bmi_thresholds: BmiThresholdsConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            other_gender_formula = %config.bmr.other_gender_formula,
            "Calculator configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        self.validate_activity_factors()?;
        self.validate_goal_adjustment()?;
        self.validate_macronutrients()?;

        if !(10.0..=60.0).contains(&self.hydration.water_ml_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Water recommendation must be between 10 and 60 ml/kg",
            ));
        }
        if self.hydration.ml_per_cup <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Cup volume must be positive"));
        }

        let bmi = &self.bmi_thresholds;
        if bmi.underweight_below <= 0.0
            || bmi.underweight_below >= bmi.normal_below
            || bmi.normal_below >= bmi.overweight_below
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and ascending",
            ));
        }

        self.meal_split.validate()
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let table = self.activity_factors.as_table();

        if table
            .iter()
            .any(|(_, factor)| !(1.0..=2.5).contains(factor))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if table.windows(2).any(|pair| pair[0].1 >= pair[1].1) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        Ok(())
    }

    fn validate_goal_adjustment(&self) -> Result<(), ConfigError> {
        let goal = &self.goal_adjustment;

        if goal.lose_deficit_kcal < 0.0 || goal.gain_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficit and surplus must not be negative",
            ));
        }
        if !(800.0..=3000.0).contains(&goal.min_calories_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum calorie target must be between 800 and 3000 kcal",
            ));
        }

        Ok(())
    }

    fn validate_macronutrients(&self) -> Result<(), ConfigError> {
        let macros = &self.macronutrients;

        if !(0.5..=3.0).contains(&macros.protein_weight_change_g_per_kg)
            || !(0.5..=3.0).contains(&macros.protein_maintain_g_per_kg)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Protein recommendations must be between 0.5 and 3.0 g/kg",
            ));
        }
        if !(0.1..=0.5).contains(&macros.fat_calorie_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat share must be between 10% and 50% of calories",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val.parse().map_err(|_| {
                    ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'"))
                })?;
            }
            Err(VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "WELLNESS_BMR_OTHER_GENDER_FORMULA",
            &mut self.bmr.other_gender_formula,
        )?;

        // Activity factors
        Self::apply_env_var(
            "WELLNESS_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var("WELLNESS_ACTIVITY_LIGHT", &mut self.activity_factors.light)?;
        Self::apply_env_var(
            "WELLNESS_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var("WELLNESS_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        Self::apply_env_var(
            "WELLNESS_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        // Goal adjustments
        Self::apply_env_var(
            "WELLNESS_GOAL_DEFICIT_KCAL",
            &mut self.goal_adjustment.lose_deficit_kcal,
        )?;
        Self::apply_env_var(
            "WELLNESS_GOAL_SURPLUS_KCAL",
            &mut self.goal_adjustment.gain_surplus_kcal,
        )?;
        Self::apply_env_var(
            "WELLNESS_GOAL_MIN_CALORIES",
            &mut self.goal_adjustment.min_calories_kcal,
        )?;

        // Macronutrients
        Self::apply_env_var(
            "WELLNESS_PROTEIN_WEIGHT_CHANGE_G_PER_KG",
            &mut self.macronutrients.protein_weight_change_g_per_kg,
        )?;
        Self::apply_env_var(
            "WELLNESS_PROTEIN_MAINTAIN_G_PER_KG",
            &mut self.macronutrients.protein_maintain_g_per_kg,
        )?;
        Self::apply_env_var(
            "WELLNESS_FAT_CALORIE_FRACTION",
            &mut self.macronutrients.fat_calorie_fraction,
        )?;

        // Hydration
        Self::apply_env_var(
            "WELLNESS_WATER_ML_PER_KG",
            &mut self.hydration.water_ml_per_kg,
        )?;
        Self::apply_env_var("WELLNESS_WATER_ML_PER_CUP", &mut self.hydration.ml_per_cup)?;

        Ok(self)
    }
}
