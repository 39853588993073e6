// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, physiological thresholds, and accepted input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Accepted ranges for user-entered body metrics
pub mod limits;
/// Physiological thresholds and formula constants
pub mod physiological;
/// Unit conversion and energy density constants
pub mod units;
