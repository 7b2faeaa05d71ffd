use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WidgetError;

/// A discrete counter trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CounterAction {
    type Err = WidgetError;

    /// Accepts the full names, their short forms, and the button glyphs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(CounterAction::Increment),
            "decrement" | "dec" | "-" | "−" => Ok(CounterAction::Decrement),
            "reset" | "0" => Ok(CounterAction::Reset),
            _ => Err(WidgetError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("+".parse::<CounterAction>().unwrap(), CounterAction::Increment);
        assert_eq!("INC".parse::<CounterAction>().unwrap(), CounterAction::Increment);
        assert_eq!("−".parse::<CounterAction>().unwrap(), CounterAction::Decrement);
        assert_eq!("reset".parse::<CounterAction>().unwrap(), CounterAction::Reset);
    }

    #[test]
    fn rejects_unknown() {
        let err = "double".parse::<CounterAction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown counter action: double");
    }
}
