//! Angle wrapping for cyclic quantities.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, sidereal time (hours) | [0, 24) | [`wrap_0_24`] |
//! | Hour angle, azimuth, LMST (degrees) | [0, 360) | [`wrap_0_360`] |
//!
//! Declination and latitude are never wrapped: going "past" a pole is an
//! input error, see [`validate`](super::validate).
//!
//! # Algorithm Notes
//!
//! Both functions build on [`crate::math::modulo`], a floored modulo. Rust's
//! `%` is a remainder and keeps the sign of the dividend, so `-1.0 % 360.0`
//! is `-1.0`; a Julian Day before J2000 would otherwise produce a negative
//! sidereal time.
//!
//! ```
//! use celestial_core::angle::{wrap_0_24, wrap_0_360};
//!
//! assert_eq!(wrap_0_360(370.0), 10.0);
//! assert_eq!(wrap_0_360(-10.0), 350.0);
//! assert_eq!(wrap_0_24(-1.0), 23.0);
//! ```

use crate::constants::{DEGREES_PER_CIRCLE, HOURS_PER_DAY};
use crate::math::modulo;

/// Wraps an angle in degrees to [0, 360).
#[inline]
pub fn wrap_0_360(degrees: f64) -> f64 {
    modulo(degrees, DEGREES_PER_CIRCLE)
}

/// Wraps a time-like angle in hours to [0, 24).
#[inline]
pub fn wrap_0_24(hours: f64) -> f64 {
    modulo(hours, HOURS_PER_DAY)
}
