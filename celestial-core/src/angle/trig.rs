//! Trigonometry on degrees.
//!
//! The inverse functions clamp their argument to [-1, 1] first. Spherical
//! trigonometry routinely lands a few ulps outside that interval (a star
//! at the zenith gives `sin(alt) = 1.0000000000000002`), and `asin`/`acos`
//! would turn that into NaN.

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    libm::sin(degrees * DEG_TO_RAD)
}

#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    libm::cos(degrees * DEG_TO_RAD)
}

/// Inverse sine in degrees, result in [-90, 90].
#[inline]
pub fn asin_deg(sin: f64) -> f64 {
    libm::asin(sin.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

/// Inverse cosine in degrees, result in [0, 180].
#[inline]
pub fn acos_deg(cos: f64) -> f64 {
    libm::acos(cos.clamp(-1.0, 1.0)) * RAD_TO_DEG
}
