use thiserror::Error;

/// Rejected launch input. Raised before any integration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("all fields must be filled in: {field} is empty")]
    MissingField { field: &'static str },

    #[error("{field} must be a finite number, got '{value}'")]
    NonNumericInput { field: &'static str, value: String },

    #[error("initial speed must be positive, got {0}")]
    NonPositiveSpeed(f64),

    #[error("launch angle must be between 0 and 90 degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("initial height cannot be negative, got {0}")]
    NegativeHeight(f64),

    #[error("drag coefficient k must be non-negative, got {0}")]
    NegativeDragCoefficient(f64),
}

/// Failure while writing trajectory or summary files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
