// ABOUTME: Configuration error types for calculator configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for calculator configuration validation.

use std::env;
use thiserror::Error;
use wellness_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or table entries are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
