use thiserror::Error;

/// Reason a set of optimization parameters was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field is missing, non-numeric, non-finite, zero or negative.
    #[error("Invalid value for {0}")]
    InvalidField(&'static str),

    /// `minRate >= maxBandwidth * 10`.
    #[error("Unrealistic constraint: minRate too high for bandwidth ceiling")]
    UnrealisticConstraint,
}

/// A value that passed validation overflowed during solving or enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite {field}: {value}")]
pub struct NonFiniteError {
    pub field: &'static str,
    pub value: f64,
}

/// First non-finite entry of `fields`, if any.
pub(crate) fn check_finite(fields: &[(&'static str, f64)]) -> Result<(), NonFiniteError> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, value)) => Err(NonFiniteError { field, value }),
        None => Ok(()),
    }
}
