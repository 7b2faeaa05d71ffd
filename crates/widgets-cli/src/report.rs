//! Results of one widget invocation, ready for rendering or serialization.
//!
//! The front end owns the interactive state (form fields, counter value) and
//! rebuilds a report from it on every command.

use serde::Serialize;
use tracing::{debug, info};
use widgets_core::{analyze, apply, compute_bmi_from_input, insights, parse_measurement};
use widgets_model::{BmiResult, CounterAction, TextInsights, TextStats, UnitSystem};

#[derive(Debug, Clone, Serialize)]
pub struct BmiReport {
    pub unit: UnitSystem,
    pub weight_unit: &'static str,
    pub height_unit: &'static str,
    pub result: Option<BmiResult>,
    /// Why there is no result yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub stats: TextStats,
    /// Only present for non-empty text.
    pub insights: Option<TextInsights>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterReport {
    pub start: i64,
    pub steps: Vec<CounterStep>,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CounterStep {
    pub action: CounterAction,
    pub value: i64,
}

pub fn bmi_report(weight: &str, height: &str, unit: UnitSystem) -> BmiReport {
    let result = compute_bmi_from_input(weight, height, unit);
    let pending = match result {
        Some(_) => None,
        None => {
            let reason = pending_reason(weight, height, unit);
            info!(reason = %reason, "no BMI result yet");
            Some(reason)
        }
    };
    BmiReport {
        unit,
        weight_unit: unit.weight_unit(),
        height_unit: unit.height_unit(),
        result,
        pending,
    }
}

fn pending_reason(weight: &str, height: &str, unit: UnitSystem) -> String {
    if let Err(error) = parse_measurement(weight) {
        return format!("Weight ({}): {error}", unit.weight_unit());
    }
    if let Err(error) = parse_measurement(height) {
        return format!("Height ({}): {error}", unit.height_unit());
    }
    "measurements are out of range".to_string()
}

pub fn text_report(text: &str) -> TextReport {
    let stats = analyze(text);
    let quick_insights = (!stats.is_empty()).then(|| insights(&stats));
    TextReport {
        stats,
        insights: quick_insights,
    }
}

pub fn counter_report(start: i64, actions: &[CounterAction]) -> CounterReport {
    let mut value = start;
    let mut steps = Vec::with_capacity(actions.len());
    for &action in actions {
        value = apply(value, action);
        steps.push(CounterStep { action, value });
    }
    debug!(start, value, steps = steps.len(), "replayed counter");
    CounterReport {
        start,
        steps,
        value,
    }
}
