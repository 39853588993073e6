// ABOUTME: Accepted input ranges for the body metrics form
// ABOUTME: Bounds enforced by input validation before any calculation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minimum body weight (kg)
pub const WEIGHT_KG_MIN: f64 = 20.0;
/// Maximum body weight (kg)
pub const WEIGHT_KG_MAX: f64 = 300.0;

/// Minimum height (cm)
pub const HEIGHT_CM_MIN: f64 = 80.0;
/// Maximum height (cm)
pub const HEIGHT_CM_MAX: f64 = 250.0;

/// Minimum age (years)
pub const AGE_YEARS_MIN: u32 = 10;
/// Maximum age (years)
pub const AGE_YEARS_MAX: u32 = 100;

/// Maximum reported water intake (cups per day)
pub const WATER_CUPS_MAX: u32 = 20;
