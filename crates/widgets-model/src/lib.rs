pub mod bmi;
pub mod counter;
pub mod error;
pub mod text;

pub use bmi::{BmiCategory, BmiResult, UnitSystem};
pub use counter::CounterAction;
pub use error::{MeasurementError, WidgetError};
pub use text::{Complexity, StatEntry, TextInsights, TextStats};
