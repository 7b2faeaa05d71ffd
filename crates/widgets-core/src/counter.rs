//! Counter engine.
//!
//! Transitions wrap at the `i64` limits, which keeps every operation total
//! and `decrement(increment(n)) == n` true for all `n`.

use widgets_model::CounterAction;

pub fn increment(value: i64) -> i64 {
    value.wrapping_add(1)
}

pub fn decrement(value: i64) -> i64 {
    value.wrapping_sub(1)
}

pub fn reset(_value: i64) -> i64 {
    0
}

/// Apply a single trigger.
pub fn apply(value: i64, action: CounterAction) -> i64 {
    match action {
        CounterAction::Increment => increment(value),
        CounterAction::Decrement => decrement(value),
        CounterAction::Reset => reset(value),
    }
}

/// Replay a sequence of triggers starting from `start`.
pub fn apply_all<I>(start: i64, actions: I) -> i64
where
    I: IntoIterator<Item = CounterAction>,
{
    actions.into_iter().fold(start, apply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_transitions() {
        assert_eq!(increment(0), 1);
        assert_eq!(decrement(0), -1);
        assert_eq!(reset(42), 0);
        assert_eq!(reset(-7), 0);
    }

    #[test]
    fn wraps_at_limits() {
        assert_eq!(increment(i64::MAX), i64::MIN);
        assert_eq!(decrement(i64::MIN), i64::MAX);
        assert_eq!(decrement(increment(i64::MAX)), i64::MAX);
    }

    #[test]
    fn replays_actions() {
        use CounterAction::{Decrement, Increment, Reset};
        assert_eq!(apply_all(0, [Increment, Increment, Decrement]), 1);
        assert_eq!(apply_all(10, [Decrement, Reset, Decrement]), -1);
        assert_eq!(apply_all(5, []), 5);
    }
}
