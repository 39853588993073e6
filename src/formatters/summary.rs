// ABOUTME: Flat key-value summary of one assessment for export
// ABOUTME: Fixed metric order with whole-kcal rounding and one-decimal BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::WellnessAssessment;
use serde::{Deserialize, Serialize};

/// Metric names in export order
pub const SUMMARY_METRICS: [&str; 11] = [
    "BMI",
    "BMI_category",
    "BMR_kcal",
    "TDEE_kcal",
    "Calorie_target_kcal",
    "Protein_g",
    "Fat_g",
    "Carb_g",
    "Water_cups_reported",
    "Water_cups_recommended",
    "Exercise_level",
];

/// One `metric,value` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Metric name
    pub metric: String,
    /// Rendered value; empty when unavailable
    pub value: String,
}

/// Ordered summary rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Rows in [`SUMMARY_METRICS`] order
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Build the summary for an assessment
    #[must_use]
    pub fn from_assessment(assessment: &WellnessAssessment) -> Self {
        let metrics = &assessment.metrics;
        let input = &assessment.input;

        let values = [
            metrics.bmi.map(format_bmi).unwrap_or_default(),
            metrics.bmi_category.as_str().to_owned(),
            whole_kcal(metrics.bmr_kcal),
            whole_kcal(metrics.tdee_kcal),
            whole_kcal(metrics.calorie_target_kcal),
            metrics.macros.protein_g.to_string(),
            metrics.macros.fat_g.to_string(),
            metrics.macros.carb_g.to_string(),
            input.water_cups_reported.to_string(),
            metrics.recommended_water_cups.to_string(),
            input.exercise_level.as_str().to_owned(),
        ];

        let rows = SUMMARY_METRICS
            .iter()
            .zip(values)
            .map(|(metric, value)| SummaryRow {
                metric: (*metric).to_owned(),
                value,
            })
            .collect();

        Self { rows }
    }

    /// Value for a metric name
    #[must_use]
    pub fn get(&self, metric: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value.as_str())
    }
}

/// BMI rounded to one decimal place, ties to even
pub(crate) fn format_bmi(bmi: f64) -> String {
    format!("{:.1}", (bmi * 10.0).round_ties_even() / 10.0)
}

/// Energy value rounded to whole kcal, ties to even
pub(crate) fn whole_kcal(kcal: f64) -> String {
    (kcal.round_ties_even() as i64).to_string()
}
