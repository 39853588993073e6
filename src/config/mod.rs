// ABOUTME: Configuration management module for calculator parameters
// ABOUTME: Environment-only settings for formulas, lookup tables, and meal splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All tunable parameters of the metrics pipeline live under
//! [`intelligence`]. There are no configuration files; defaults are
//! overridden through `WELLNESS_*` environment variables.

/// Calculator configuration and validation
pub mod intelligence;

pub use intelligence::{CalculatorConfig, ConfigError};
