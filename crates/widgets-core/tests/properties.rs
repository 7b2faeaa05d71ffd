//! Property tests for the computation engines.

use proptest::prelude::*;

use widgets_core::{analyze, classify, compute_bmi, decrement, increment, insights, reset};
use widgets_model::UnitSystem;

fn unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![Just(UnitSystem::Metric), Just(UnitSystem::Imperial)]
}

fn formula(weight: f64, height: f64, unit: UnitSystem) -> f64 {
    let raw = match unit {
        UnitSystem::Metric => weight / ((height / 100.0) * (height / 100.0)),
        UnitSystem::Imperial => weight / (height * height) * 703.0,
    };
    (raw * 10.0).round() / 10.0
}

proptest! {
    #[test]
    fn decrement_undoes_increment(n in any::<i64>()) {
        prop_assert_eq!(decrement(increment(n)), n);
        prop_assert_eq!(increment(decrement(n)), n);
    }

    #[test]
    fn reset_always_returns_zero(n in any::<i64>()) {
        prop_assert_eq!(reset(n), 0);
    }

    #[test]
    fn bmi_matches_formula(
        weight in 1.0f64..400.0,
        height in 50.0f64..250.0,
        unit in unit_system(),
    ) {
        let result = compute_bmi(weight, height, unit).expect("positive input has a result");
        prop_assert_eq!(result.value, formula(weight, height, unit));
        prop_assert_eq!(result.category, classify(result.value));
        let tenths = result.value * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-6);
    }

    #[test]
    fn bmi_is_idempotent(
        weight in 1.0f64..400.0,
        height in 50.0f64..250.0,
        unit in unit_system(),
    ) {
        prop_assert_eq!(compute_bmi(weight, height, unit), compute_bmi(weight, height, unit));
    }

    #[test]
    fn non_positive_weight_has_no_result(
        weight in -500.0f64..=0.0,
        height in 50.0f64..250.0,
        unit in unit_system(),
    ) {
        prop_assert!(compute_bmi(weight, height, unit).is_none());
        prop_assert!(compute_bmi(height, weight, unit).is_none());
    }

    #[test]
    fn classification_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(low) as u8 <= classify(high) as u8);
    }

    #[test]
    fn analyze_is_total_and_consistent(text in "\\PC*") {
        let stats = analyze(&text);
        prop_assert_eq!(stats, analyze(&text));
        prop_assert!(stats.characters_no_spaces <= stats.characters);
        prop_assert!(stats.words <= stats.characters_no_spaces);
        prop_assert_eq!(stats.words == 0, stats.characters_no_spaces == 0);
        prop_assert_eq!(stats.reading_time_minutes, stats.words.div_ceil(200));
        if stats.sentences == 0 {
            prop_assert_eq!(stats.avg_words_per_sentence, 0);
        }
        let insights = insights(&stats);
        prop_assert!(insights.density_percent <= 100);
    }
}
