// ABOUTME: Meal slots of the daily sample plan
// ABOUTME: Serving order and display names shared by the meal split configuration and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meals the daily calorie target is split across
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Afternoon snack
    Snack,
    /// Dinner
    Dinner,
}

impl Meal {
    /// Meals in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meals_serialize_in_snake_case() {
        let json = serde_json::to_string(&Meal::ALL).unwrap();
        assert_eq!(json, r#"["breakfast","lunch","snack","dinner"]"#);
    }
}
