//! Degree-based angle handling.
//!
//! - [`trig`]: `sin`/`cos`/`asin`/`acos` taking or returning degrees
//! - [`normalize`]: wrapping into [0, 360) degrees and [0, 24) hours
//! - [`validate`]: range checks for latitude, longitude, RA and declination

pub mod normalize;
pub mod trig;
pub mod validate;

pub use normalize::{wrap_0_24, wrap_0_360};
pub use trig::{acos_deg, asin_deg, cos_deg, sin_deg};
pub use validate::{
    validate_declination, validate_finite, validate_latitude, validate_longitude,
    validate_right_ascension_hours,
};
