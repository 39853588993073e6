// ABOUTME: Main library entry point for the wellness planner
// ABOUTME: Health metrics calculation and diet, exercise, and hydration recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Planner
//!
//! Computes standard health metrics from a short personal profile and turns
//! them into plain-language recommendations, in support of Sustainable
//! Development Goal 3 (Good Health and Wellbeing).
//!
//! ## Features
//!
//! - **Metrics**: BMI and category, Mifflin-St Jeor BMR, TDEE, goal-adjusted
//!   calorie target, macronutrient split, and recommended water intake
//! - **Plans**: sample meal plan, cardio/strength/mobility guidance, hydration check
//! - **Export**: summary table as CSV or JSON, full report as text
//!
//! ## Architecture
//!
//! - **`wellness_core`**: errors, domain models, and physiological constants
//! - **`config`**: environment-driven calculator configuration
//! - **`intelligence`**: validation, calculation, and plan templating
//! - **`formatters`**: summary table and report rendering
//! - **`logging`**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wellness_planner::config::intelligence::CalculatorConfig;
//! use wellness_planner::formatters::render_report;
//! use wellness_planner::intelligence::{assess_raw, RawUserInput};
//! use wellness_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let raw = RawUserInput {
//!         weight_kg: Some(70.0),
//!         height_cm: Some(175.0),
//!         age_years: Some(25),
//!         gender: Some("male".into()),
//!         exercise_level: Some("moderate".into()),
//!         goal: Some("maintain".into()),
//!         water_cups_reported: Some(6),
//!     };
//!
//!     let assessment = assess_raw(&raw, CalculatorConfig::global())?;
//!     println!("{}", render_report(&assessment));
//!     Ok(())
//! }
//! ```

/// Calculator configuration
pub mod config;

/// Summary table and report rendering
pub mod formatters;

/// Validation, metrics calculation, and plan templating
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use wellness_core::errors;
pub use wellness_core::models;
