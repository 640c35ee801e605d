//! Errors
//!
//! Every fallible operation in this crate reports one of these.

// External imports
use thiserror::Error;

// Internal imports
use crate::coordinate::CoordinateRole;

pub type Result<T> = std::result::Result<T, DistanceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    /// A coordinate given to a constructor was NaN, infinite or out of range.
    #[error("{role} '{value}' {reason}")]
    Validation {
        role: CoordinateRole,
        value: f64,
        reason: String,
    },

    /// A proposed Earth radius fell outside the accepted bounds.
    #[error("Proposed radius '{value}' is out of range - must be between {min} and {max}")]
    Range { value: f64, min: f64, max: f64 },

    #[error("Formula '{formula}' not supported - expected one of: {}", .supported.join(", "))]
    UnsupportedFormula {
        formula: String,
        supported: Vec<&'static str>,
    },

    /// Vincenty's iteration did not settle, which happens for nearly
    /// antipodal points.
    #[error("Vincenty formula failed to converge after {iterations} iterations")]
    Convergence { iterations: u32 },
}
