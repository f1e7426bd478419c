//! Error types for mesh generation.

/// Errors that can occur during mesh generation.
///
/// Arguments are validated before any vertex is emitted, so a generator
/// never returns a partially filled mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenError {
    /// A size-like argument (edge length, radius, height) was zero or
    /// negative.
    NonPositiveDimension {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The subdivision count is below the minimum the shape needs to close.
    TooFewSubdivisions {
        /// Smallest accepted subdivision count.
        minimum: u32,
        /// The rejected value.
        actual: u32,
    },
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::TooFewSubdivisions { minimum, actual } => {
                write!(f, "at least {minimum} subdivisions required, got {actual}")
            }
        }
    }
}

impl std::error::Error for GenError {}
