//! Error types for sky-map calculations.
//!
//! [`AstroError`] reports inputs the low-level math cannot accept: values that
//! are NaN or infinite, and angles outside their documented range. Both are
//! rejected, never wrapped or clamped.
//!
//! # Usage
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//!
//! fn checked_latitude(lat: f64) -> Result<f64, AstroError> {
//!     if !(-90.0..=90.0).contains(&lat) {
//!         return Err(AstroError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::OutOfRange,
//!             "latitude outside [-90°, +90°]",
//!         ));
//!     }
//!     Ok(lat)
//! }
//! assert!(checked_latitude(91.0).is_err());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Result or input is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn math_kind(&self) -> &MathErrorKind {
        match self {
            Self::MathError { kind, .. } => kind,
        }
    }

    /// `true` for inputs rejected because they fall outside their documented range.
    pub fn is_out_of_range(&self) -> bool {
        *self.math_kind() == MathErrorKind::OutOfRange
    }
}
