// ABOUTME: Output format abstraction for the assessment summary and report
// ABOUTME: Supports CSV (export default), JSON, and a plain text narrative report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The flat summary table serializes to CSV or JSON; the full narrative is
//! rendered as plain text by [`report`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wellness_planner::formatters::{format_summary, OutputFormat, SummaryTable};
//! # fn demo(table: &SummaryTable) {
//! if let Ok(output) = format_summary(table, OutputFormat::Csv) {
//!     println!("{}", output.data);
//! }
//! # }
//! ```

/// Plain text narrative report
pub mod report;
/// Flat key-value summary table
pub mod summary;

pub use report::{render_report, TextReport};
pub use summary::{SummaryRow, SummaryTable, SUMMARY_METRICS};

use csv::{Terminator, WriterBuilder};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use wellness_core::errors::{AppError, AppResult};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated `metric,value` rows (default)
    #[default]
    Csv,
    /// JSON array of `{metric, value}` objects
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Csv` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Csv,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
}

impl FormattedOutput {
    /// Write the serialized data to a file, replacing any existing content
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written
    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        fs::write(path, &self.data).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Serialize the summary table to the specified output format
///
/// # Errors
///
/// Returns `FormatError` if CSV writing or JSON serialization fails
pub fn format_summary(
    table: &SummaryTable,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Csv => summary_to_csv(table).map_err(|message| FormatError {
            message,
            format,
        })?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(&table.rows).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
    };

    Ok(FormattedOutput {
        data,
        format,
    })
}

fn summary_to_csv(table: &SummaryTable) -> Result<String, String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in &table.rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV output is not valid UTF-8: {e}"))
}
