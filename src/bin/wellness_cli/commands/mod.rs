// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for wellness-cli
// ABOUTME: Provides access to the assessment and configuration commands

pub mod assess;
pub mod config;
