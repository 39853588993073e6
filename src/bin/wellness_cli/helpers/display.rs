// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Error display helpers for wellness-cli
// ABOUTME: Prints machine-readable error payloads and maps error codes to exit codes

use std::process::ExitCode;
use tracing::debug;
use wellness_core::errors::{AppError, ErrorResponse};

/// Print an error to stderr and return the matching exit code
pub fn report_error(error: AppError) -> ExitCode {
    let exit_code = error.code.exit_code();
    debug!(code = ?error.code, "Command failed");

    eprintln!("Error: {error}");
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => eprintln!("Failed to serialize error response: {e}"),
    }

    ExitCode::from(exit_code)
}
