// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Configuration command for wellness-cli
// ABOUTME: Prints the effective calculator configuration after environment overrides

use wellness_core::errors::AppResult;
use wellness_planner::config::intelligence::CalculatorConfig;

/// Print the effective configuration as pretty JSON
///
/// Loads strictly: an invalid `WELLNESS_*` override is reported instead of
/// silently falling back to defaults.
pub fn show() -> AppResult<()> {
    let config = CalculatorConfig::load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
