// ABOUTME: Unit conversion constants for length, volume, and food energy
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Volume of one drinking cup in milliliters
pub const ML_PER_CUP: f64 = 250.0;
