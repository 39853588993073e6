// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for wellness-cli
// ABOUTME: Provides access to profile loading and error display utilities

pub mod display;
pub mod profile;
