// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Assessment commands for wellness-cli
// ABOUTME: Runs the pipeline for a profile and prints the report or summary table

use crate::helpers::profile::load_raw_input;
use crate::ProfileArgs;
use std::path::Path;
use wellness_core::errors::AppResult;
use wellness_planner::config::intelligence::CalculatorConfig;
use wellness_planner::formatters::{format_summary, OutputFormat, SummaryTable, TextReport};
use wellness_planner::intelligence::{assess_raw, WellnessAssessment};
use wellness_planner::logging::AppLogger;

fn assess_profile(
    profile: &ProfileArgs,
    config: &CalculatorConfig,
) -> AppResult<WellnessAssessment> {
    let raw = load_raw_input(profile)?;
    assess_raw(&raw, config)
}

/// Print the full text report
pub fn report(profile: &ProfileArgs, config: &CalculatorConfig) -> AppResult<()> {
    let assessment = assess_profile(profile, config)?;
    print!("{}", TextReport(&assessment));
    Ok(())
}

/// Print or write the summary table
pub fn summary(
    profile: &ProfileArgs,
    config: &CalculatorConfig,
    format: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let assessment = assess_profile(profile, config)?;
    let table = SummaryTable::from_assessment(&assessment);
    let formatted = format_summary(&table, OutputFormat::from_str_param(format))?;

    if let Some(path) = output {
        formatted.write_to(path)?;
        AppLogger::log_export(
            formatted.format.as_str(),
            &path.display().to_string(),
            table.rows.len(),
        );
        println!("Summary written to {}", path.display());
    } else {
        println!("{}", formatted.data.trim_end());
        AppLogger::log_export(formatted.format.as_str(), "stdout", table.rows.len());
    }

    Ok(())
}
