// ABOUTME: User profile record and its enumerated fields
// ABOUTME: UserInput, Gender, ExerciseLevel, and Goal definitions with label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as entered on the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / not specified. The Mifflin-St Jeor equation has no constant for it.
    Other,
}

impl Gender {
    /// Canonical lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "unknown gender '{other}', expected one of: male, female, other"
            ))
            .with_field("gender")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported weekly exercise level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    #[serde(alias = "very active")]
    VeryActive,
}

impl ExerciseLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Parse a level label, falling back to `Sedentary` for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Sedentary)
    }
}

impl FromStr for ExerciseLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!(
                "unknown exercise level '{}', expected one of: sedentary, light, moderate, active, very_active",
                s.trim()
            ))
            .with_field("exercise_level")),
        }
    }
}

impl fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary short-term goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Keep current weight
    Maintain,
    /// Lose weight (calorie deficit)
    Lose,
    /// Gain weight (calorie surplus)
    Gain,
}

impl Goal {
    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintain => "maintain",
            Self::Lose => "lose",
            Self::Gain => "gain",
        }
    }

    /// Whether the goal changes body weight
    #[must_use]
    pub const fn changes_weight(&self) -> bool {
        matches!(self, Self::Lose | Self::Gain)
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintain" => Ok(Self::Maintain),
            "lose" => Ok(Self::Lose),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "unknown goal '{other}', expected one of: maintain, lose, gain"
            ))
            .with_field("goal")),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated body metrics for a single submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserInput {
    /// Body weight in kilograms (20-300)
    pub weight_kg: f64,
    /// Height in centimeters (80-250)
    pub height_cm: f64,
    /// Age in years (10-100)
    pub age_years: u32,
    /// Gender used to pick the BMR constant
    pub gender: Gender,
    /// Weekly exercise level
    pub exercise_level: ExerciseLevel,
    /// Short-term goal
    pub goal: Goal,
    /// Reported water intake in cups per day
    pub water_cups_reported: u32,
}
