// ABOUTME: End-to-end assessment of one submission: validation, metrics, and plan text
// ABOUTME: Produces the single WellnessAssessment value handed to formatters and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::input_validation::{validate_user_input, RawUserInput};
use super::metrics_calculator::calculate_derived_metrics;
use super::plan_templater::{build_wellness_plan, WellnessPlan};
use crate::config::intelligence::CalculatorConfig;
use crate::logging::AppLogger;
use serde::Serialize;
use wellness_core::errors::AppResult;
use wellness_core::models::{DerivedMetrics, UserInput};

/// Everything produced for one submission
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WellnessAssessment {
    /// Validated input
    pub input: UserInput,
    /// Computed health metrics
    pub metrics: DerivedMetrics,
    /// Recommendation text
    pub plan: WellnessPlan,
}

/// Assess an already validated input
#[must_use]
pub fn assess(input: &UserInput, config: &CalculatorConfig) -> WellnessAssessment {
    let metrics = calculate_derived_metrics(input, config);
    let plan = build_wellness_plan(input, &metrics, config);
    let assessment = WellnessAssessment {
        input: *input,
        metrics,
        plan,
    };

    AppLogger::log_assessment(&assessment);
    assessment
}

/// Validate raw form fields, then assess them
///
/// # Errors
///
/// Returns the validation error for the first invalid field
pub fn assess_raw(raw: &RawUserInput, config: &CalculatorConfig) -> AppResult<WellnessAssessment> {
    let input = validate_user_input(raw)?;
    Ok(assess(&input, config))
}
