use thiserror::Error;

/// Why a raw form field cannot be used as a body measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasurementError {
    #[error("value is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
    #[error("'{0}' must be greater than zero")]
    NonPositive(String),
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
    #[error("unknown unit system: {0}")]
    UnknownUnit(String),
    #[error("unknown counter action: {0}")]
    UnknownAction(String),
}
