// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Profile loading for wellness-cli
// ABOUTME: Builds raw form fields from flags and an optional JSON profile file

use crate::ProfileArgs;
use std::fs;
use tracing::debug;
use wellness_core::errors::{AppError, AppResult, ErrorCode};
use wellness_planner::intelligence::RawUserInput;

/// Raw form fields for the requested profile
///
/// Fields present in the `--profile` file win; missing ones come from flags.
pub fn load_raw_input(args: &ProfileArgs) -> AppResult<RawUserInput> {
    let flags = RawUserInput {
        weight_kg: Some(args.weight),
        height_cm: Some(args.height),
        age_years: Some(args.age),
        gender: Some(args.gender.clone()),
        exercise_level: Some(args.exercise_level.clone()),
        goal: Some(args.goal.clone()),
        water_cups_reported: Some(args.water_cups),
    };

    let Some(path) = &args.profile else {
        return Ok(flags);
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read profile {}: {e}", path.display())).with_source(e)
    })?;
    let from_file: RawUserInput = serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid profile {}: {e}", path.display()),
        )
        .with_field("profile")
        .with_source(e)
    })?;

    debug!(path = %path.display(), "Loaded profile file");
    Ok(from_file.or(flags))
}
