// ABOUTME: Core types and constants for the wellness planner
// ABOUTME: Foundation crate with error handling, domain models, and named constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Core
//!
//! Foundation crate providing shared types and constants for the wellness
//! planner. This crate is designed to change infrequently, so the calculation
//! engine and the CLI can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, physiological thresholds, and input limits
//! - **models**: The user profile and derived metrics records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserInput`, `DerivedMetrics`, enums)
pub mod models;
