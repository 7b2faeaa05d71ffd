//! BMI engine.
//!
//! - Metric: `weight_kg / (height_cm / 100)^2`
//! - Imperial: `weight_lb / height_in^2 * 703`
//!
//! Results are rounded to one decimal place before they are classified, so the
//! category always agrees with the value a caller displays.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};
use widgets_model::{BmiCategory, BmiResult, MeasurementError, UnitSystem};

/// Conversion factor from lb/in² to kg/m².
const IMPERIAL_FACTOR: f64 = 703.0;

/// Longest leading decimal number, with optional sign and exponent.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("Invalid leading number regex")
});

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

/// Compute the BMI for a weight and height in the given unit system.
///
/// Returns `None` when either measurement is not a finite number greater than
/// zero. That is the expected state of a half-filled form, not an error.
pub fn compute_bmi(weight: f64, height: f64, unit: UnitSystem) -> Option<BmiResult> {
    if !is_positive_finite(weight) || !is_positive_finite(height) {
        trace!(weight, height, %unit, "BMI input not usable yet");
        return None;
    }
    let raw = match unit {
        UnitSystem::Metric => {
            let meters = height / 100.0;
            weight / (meters * meters)
        }
        UnitSystem::Imperial => weight / (height * height) * IMPERIAL_FACTOR,
    };
    // Heights close to zero can overflow the quotient.
    if !raw.is_finite() {
        trace!(weight, height, %unit, "BMI out of representable range");
        return None;
    }
    let value = round_tenths(raw);
    let category = classify(value);
    debug!(%unit, value, category = category.label(), "computed BMI");
    Some(BmiResult { value, category })
}

/// Compute the BMI from raw form strings.
///
/// Any field that [`parse_measurement`] rejects yields `None`.
pub fn compute_bmi_from_input(weight: &str, height: &str, unit: UnitSystem) -> Option<BmiResult> {
    let weight = parse_measurement(weight).ok()?;
    let height = parse_measurement(height).ok()?;
    compute_bmi(weight, height, unit)
}

/// Parse a raw form field into a usable measurement.
///
/// Only the leading number counts, so `"70 kg"` and `"70kg"` both read as 70
/// and a trailing unit typed into the field is ignored.
///
/// # Errors
///
/// Returns a [`MeasurementError`] when the trimmed input is empty, does not
/// start with a number, is NaN or infinite, or is not greater than zero.
pub fn parse_measurement(raw: &str) -> Result<f64, MeasurementError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Empty);
    }
    let Some(number) = LEADING_NUMBER.find(trimmed) else {
        if names_non_finite(trimmed) {
            return Err(MeasurementError::NotFinite(trimmed.to_string()));
        }
        return Err(MeasurementError::NotANumber(trimmed.to_string()));
    };
    let value: f64 = number
        .as_str()
        .parse()
        .map_err(|_| MeasurementError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(MeasurementError::NotFinite(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(MeasurementError::NonPositive(trimmed.to_string()));
    }
    Ok(value)
}

/// `inf`, `Infinity` and `NaN`, signed or not, in any case.
fn names_non_finite(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']).to_lowercase();
    unsigned.starts_with("inf") || unsigned.starts_with("nan")
}

/// Classify a BMI value.
///
/// Intervals are half-open at 18.5, 25 and 30. Anything that is not below a
/// threshold, NaN included, falls through to [`BmiCategory::Obese`].
pub fn classify(value: f64) -> BmiCategory {
    if value < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if value < OVERWEIGHT_FROM {
        BmiCategory::NormalWeight
    } else if value < OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// The reference scale shown alongside a result, lowest category first.
pub fn bmi_scale() -> [BmiCategory; 4] {
    BmiCategory::ALL
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round half-up on the tenths digit. Inputs are always positive here, so
/// `f64::round` (half away from zero) rounds up at the midpoint.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
