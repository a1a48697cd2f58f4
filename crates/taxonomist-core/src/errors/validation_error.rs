use crate::models::IndicatorField;

/// Client-side input errors, detected before any network call.
///
/// The display text is the exact message shown to the user; the fields are
/// kept for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField { field: IndicatorField },

    #[error("All values must be numbers.")]
    NotANumber { field: IndicatorField },

    #[error("Unemployment rate must be between 0 and 100.")]
    UnemploymentOutOfRange { value: f64 },
}

impl ValidationError {
    /// The field that failed, when the rule is field-specific.
    pub fn field(&self) -> IndicatorField {
        match self {
            Self::MissingField { field } | Self::NotANumber { field } => *field,
            Self::UnemploymentOutOfRange { .. } => IndicatorField::UnemploymentRate,
        }
    }
}
