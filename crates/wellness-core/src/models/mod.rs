// ABOUTME: Core data models for the wellness planner
// ABOUTME: Re-exports the user profile and derived metrics records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `UserInput`: validated body metrics for one submission
//! - `DerivedMetrics`: BMI, BMR, TDEE, calorie target, macros, water
//! - `Meal`: slots of the sample meal plan
//!
//! Both records are plain values: created once per submission, never mutated.

mod meal;
mod metrics;
mod profile;

pub use meal::Meal;

pub use metrics::{BmiCategory, DerivedMetrics, MacroSplit};
pub use profile::{ExerciseLevel, Gender, Goal, UserInput};
