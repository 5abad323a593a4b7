use crate::dynamics::state::SimulationParameters;
use crate::error::ValidationError;

pub const SPEED_FIELD: &str = "initial speed";
pub const ANGLE_FIELD: &str = "launch angle";
pub const HEIGHT_FIELD: &str = "initial height";
pub const DRAG_FIELD: &str = "drag coefficient";

/// Launch parameters as typed by the user, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    pub speed: String,
    pub angle: String,
    pub height: String,
    pub drag: String,
}

impl RawParameters {
    pub fn new(
        speed: impl Into<String>,
        angle: impl Into<String>,
        height: impl Into<String>,
        drag: impl Into<String>,
    ) -> Self {
        Self {
            speed: speed.into(),
            angle: angle.into(),
            height: height.into(),
            drag: drag.into(),
        }
    }

    pub fn parse(&self) -> Result<SimulationParameters, ValidationError> {
        parse_parameters(self)
    }
}

/// Trim and switch a comma decimal separator to a period ("0,1" -> "0.1").
pub fn normalize_decimal(text: &str) -> String {
    text.trim().replace(',', ".")
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let non_numeric = || ValidationError::NonNumericInput {
        field,
        value: text.to_string(),
    };
    let value: f64 = text.parse().map_err(|_| non_numeric())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(non_numeric())
    }
}

/// Validate raw text into launch parameters.
///
/// All fields are checked for presence first, then parsed, then range
/// checked in the order speed, angle, height, drag. The first failure wins.
pub fn parse_parameters(raw: &RawParameters) -> Result<SimulationParameters, ValidationError> {
    let fields = [
        (SPEED_FIELD, normalize_decimal(&raw.speed)),
        (ANGLE_FIELD, normalize_decimal(&raw.angle)),
        (HEIGHT_FIELD, normalize_decimal(&raw.height)),
        (DRAG_FIELD, normalize_decimal(&raw.drag)),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, text)| text.is_empty()) {
        return Err(ValidationError::MissingField { field: *field });
    }

    let mut values = [0.0; 4];
    for (slot, (field, text)) in values.iter_mut().zip(&fields) {
        *slot = parse_field(*field, text)?;
    }
    let [speed, angle, height, drag] = values;

    SimulationParameters::new(speed, angle, height, drag)
}
