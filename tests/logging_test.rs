// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration defaults and environment variable handling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use wellness_planner::logging::{LogFormat, LoggingConfig, SERVICE_NAME};

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_logging_config_from_env_defaults() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
}

#[test]
fn test_verbose_raises_level() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");
}

#[test]
#[serial]
fn test_env_filter_builds_for_configured_level() {
    env::remove_var("RUST_LOG");
    let filter = LoggingConfig::default().verbose().env_filter();
    assert!(filter.to_string().contains("wellness_planner=debug"));
}

#[test]
#[serial]
fn test_env_filter_keeps_compound_rust_log() {
    env::set_var("RUST_LOG", "debug,hyper=info");
    let config = LoggingConfig::from_env();
    let filter = config.env_filter().to_string();
    env::remove_var("RUST_LOG");

    let directives: Vec<&str> = filter.split(',').collect();
    assert!(directives.contains(&"debug"), "filter was {filter}");
    assert!(directives.contains(&"hyper=info"), "filter was {filter}");
    assert!(!directives.contains(&"warn"), "filter was {filter}");
}
