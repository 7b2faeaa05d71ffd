//! Body Mass Index types.
//!
//! The BMI widget works in one of two unit systems and reports a value rounded
//! to one decimal place together with its weight category.
//!
//! # Reference scale
//!
//! | Category      | Range        |
//! |---------------|--------------|
//! | Underweight   | `< 18.5`     |
//! | Normal weight | `18.5 - 24.9`|
//! | Overweight    | `25 - 29.9`  |
//! | Obese         | `≥ 30`       |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WidgetError;

/// Measurement system used for weight and height input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds and inches.
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Unit label shown next to the weight field.
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Unit label shown next to the height field.
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "inches",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(WidgetError::UnknownUnit(s.to_string())),
        }
    }
}

/// Weight category derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order.
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Range label used on the reference scale.
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::NormalWeight => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "≥ 30",
        }
    }

    /// Colour hint for presentation layers.
    pub fn color_hint(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "blue",
            BmiCategory::NormalWeight => "green",
            BmiCategory::Overweight => "yellow",
            BmiCategory::Obese => "red",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed BMI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place.
    pub value: f64,
    /// Category of `value`.
    pub category: BmiCategory,
}
