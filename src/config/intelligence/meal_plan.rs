// ABOUTME: Meal plan configuration for splitting the daily calorie target
// ABOUTME: Per-meal shares of the daily target with sum-to-one validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::models::Meal;

/// Allowed drift of the share sum from 1.0
const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Share of the daily calorie target assigned to each meal (0.0-1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share: 0.20
    pub breakfast: f64,
    /// Lunch share: 0.30
    pub lunch: f64,
    /// Snack share: 0.15
    pub snack: f64,
    /// Dinner share: 0.35
    pub dinner: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.20,
            lunch: 0.30,
            snack: 0.15,
            dinner: 0.35,
        }
    }
}

impl MealSplitConfig {
    /// Share for a specific meal
    #[must_use]
    pub const fn share_for(&self, meal: Meal) -> f64 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Snack => self.snack,
            Meal::Dinner => self.dinner,
        }
    }

    /// Validate that every share is within 0.0-1.0 and that they sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a share outside 0.0-1.0 and
    /// `ConfigError::InvalidWeights` when the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = Meal::ALL.map(|meal| self.share_for(meal));

        if shares.iter().any(|share| !(0.0..=1.0).contains(share)) {
            return Err(ConfigError::ValueOutOfRange(
                "Meal shares must be between 0.0 and 1.0",
            ));
        }

        let sum: f64 = shares.iter().sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Meal shares must sum to 1.0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_split_is_valid() {
        assert!(MealSplitConfig::default().validate().is_ok());
    }

    #[test]
    fn split_not_summing_to_one_is_rejected() {
        let config = MealSplitConfig {
            dinner: 0.40,
            ..MealSplitConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn negative_share_is_rejected() {
        let config = MealSplitConfig {
            breakfast: -0.05,
            lunch: 0.55,
            ..MealSplitConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
