// ABOUTME: Plain text rendering of a full assessment
// ABOUTME: Body metrics, hydration check, diet and exercise recommendations, and safety notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::summary::{format_bmi, whole_kcal};
use crate::intelligence::plan_templater::HydrationStatus;
use crate::intelligence::WellnessAssessment;
use std::fmt;

const BMI_UNAVAILABLE: &str = "n/a";

/// Display adapter rendering an assessment as a text report
pub struct TextReport<'a>(pub &'a WellnessAssessment);

/// Render an assessment as a text report
#[must_use]
pub fn render_report(assessment: &WellnessAssessment) -> String {
    TextReport(assessment).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_body_metrics(f)?;
        self.write_hydration(f)?;
        self.write_diet(f)?;
        self.write_exercise(f)?;
        self.write_safety_notes(f)
    }
}

impl TextReport<'_> {
    fn write_body_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let WellnessAssessment { input, metrics, .. } = self.0;
        let bmi = metrics
            .bmi
            .map_or_else(|| BMI_UNAVAILABLE.to_owned(), format_bmi);

        writeln!(f, "Body metrics & energy needs")?;
        writeln!(f, "  BMI: {bmi}")?;
        writeln!(f, "  Category: {}", metrics.bmi_category)?;
        writeln!(
            f,
            "  BMR (Mifflin-St Jeor): {} kcal/day",
            whole_kcal(metrics.bmr_kcal)
        )?;
        if metrics.bmr_gender_assumed {
            writeln!(
                f,
                "  Note: BMR uses a substituted sex constant for gender '{}'",
                input.gender
            )?;
        }
        writeln!(
            f,
            "  Activity multiplier: {} ({})",
            metrics.activity_multiplier, input.exercise_level
        )?;
        writeln!(
            f,
            "  Estimated TDEE: {} kcal/day",
            whole_kcal(metrics.tdee_kcal)
        )?;
        writeln!(
            f,
            "  Recommended daily calories ({}): {} kcal/day",
            input.goal,
            whole_kcal(metrics.calorie_target_kcal)
        )?;
        writeln!(f)
    }

    fn write_hydration(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hydration = &self.0.plan.hydration;
        let marker = match hydration.status {
            HydrationStatus::BelowRecommendation => "!",
            HydrationStatus::MeetsRecommendation => "+",
        };

        writeln!(f, "Hydration check")?;
        writeln!(
            f,
            "  You reported {} cups ({:.0} ml) per day.",
            hydration.reported_cups, hydration.reported_ml
        )?;
        writeln!(
            f,
            "  General recommendation: ~{} cups ({:.0} ml) per day.",
            hydration.recommended_cups, hydration.recommended_ml
        )?;
        writeln!(f, "  [{marker}] {}", hydration.message)?;
        writeln!(f)
    }

    fn write_diet(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let WellnessAssessment { metrics, plan, .. } = self.0;
        let macros = &metrics.macros;

        writeln!(f, "Personalized diet recommendation")?;
        writeln!(
            f,
            "  Daily calorie target: {} kcal",
            plan.meal_plan.daily_calories_kcal
        )?;
        writeln!(
            f,
            "  Macronutrient targets (approx.): Protein {} g, Fat {} g, Carbs {} g",
            macros.protein_g, macros.fat_g, macros.carb_g
        )?;
        writeln!(f)?;
        writeln!(f, "  Sample meals")?;
        for suggestion in &plan.meal_plan.meals {
            writeln!(
                f,
                "  {}: ~{} kcal",
                suggestion.meal, suggestion.calories_kcal
            )?;
            for item in suggestion.items {
                writeln!(f, "    - {item}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "  Practical nutrition tips")?;
        for tip in plan.nutrition_tips {
            writeln!(f, "    - {tip}")?;
        }
        writeln!(f)
    }

    fn write_exercise(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exercise = &self.0.plan.exercise_plan;

        writeln!(f, "Personalized exercise recommendation")?;
        writeln!(f, "  Cardio: {}", exercise.cardio)?;
        writeln!(f, "  Strength training: {}", exercise.strength)?;
        writeln!(f, "  Mobility & recovery: {}", exercise.mobility)?;
        writeln!(f)
    }

    fn write_safety_notes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Safety & notes")?;
        for note in self.0.plan.safety_notes {
            writeln!(f, "  - {note}")?;
        }
        Ok(())
    }
}
