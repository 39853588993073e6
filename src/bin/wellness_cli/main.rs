// ABOUTME: Wellness CLI - command-line front end for the health metrics calculator
// ABOUTME: Prints the text report, exports the summary table, and shows the effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full report for the default profile
//! wellness-cli report
//!
//! # Report for a specific profile
//! wellness-cli report --weight 82 --height 178 --age 41 --gender male \
//!     --exercise-level moderate --goal lose --water-cups 5
//!
//! # Export the summary table
//! wellness-cli summary --format csv --output summary.csv
//! wellness-cli summary --format json --profile profile.json
//!
//! # Show the effective calculator configuration
//! wellness-cli config
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use wellness_planner::config::intelligence::CalculatorConfig;
use wellness_planner::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "wellness-cli",
    about = "Personal health metrics and wellness plan calculator",
    long_about = "Computes BMI, BMR, TDEE, a goal-adjusted calorie target, macronutrient split, and water needs, then prints diet, exercise, and hydration recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the full text report
    Report {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print or write the metric summary table
    Summary {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the effective calculator configuration as JSON
    Config,
}

/// Profile fields shared by the report and summary commands
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Weight in kilograms
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Height in centimeters
    #[arg(long, default_value_t = 170.0)]
    height: f64,

    /// Age in years
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    age: i64,

    /// Gender (male, female, other)
    #[arg(long, default_value = "male")]
    gender: String,

    /// Exercise level (sedentary, light, moderate, active, very_active)
    #[arg(long, default_value = "light")]
    exercise_level: String,

    /// Goal (maintain, lose, gain)
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Water intake in cups (250 ml) per day
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    water_cups: i64,

    /// JSON profile file; its fields take precedence over the flags above
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = CalculatorConfig::global();
    debug!("Wellness CLI starting");

    let outcome = match cli.command {
        Command::Report { profile } => commands::assess::report(&profile, config),
        Command::Summary {
            profile,
            format,
            output,
        } => commands::assess::summary(&profile, config, &format, output.as_deref()),
        Command::Config => commands::config::show(),
    };

    Ok(outcome.map_or_else(helpers::display::report_error, |()| ExitCode::SUCCESS))
}
