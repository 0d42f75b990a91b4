/// Errors reported by the validation entry points.
///
/// Building an outline never fails; these only come out of the explicit
/// `validate` / `try_*` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The reference segment for an intersection test has zero length.
    ZeroLengthSegment,

    /// A numeric input is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::ZeroLengthSegment => {
                write!(f, "Intersection segment has zero length")
            }
            GeometryError::NonFinite { field } => {
                write!(f, "Value for '{}' is not a finite number", field)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry validation.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Check that a named value is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> GeometryResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field })
    }
}
