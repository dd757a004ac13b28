//! Observer location on Earth.
//!
//! # Coordinate conventions
//!
//! - **Latitude**: North positive, degrees, range [-90, 90]
//! - **Longitude**: East positive, degrees, range [-180, 180]
//!
//! Values outside those ranges are rejected, not wrapped: a longitude of
//! 190° is far more likely a data-entry mistake than a deliberate 170°W.
//!
//! ```
//! use celestial_core::Location;
//!
//! let obs = Location::from_degrees(19.8207, -155.4681)?;
//! assert!((obs.latitude() - 19.8207).abs() < 1e-12);
//! assert!(Location::from_degrees(95.0, 0.0).is_err());
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

use crate::angle::{validate_latitude, validate_longitude};
use crate::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range or not-finite [`AstroError`](crate::AstroError)
    /// when either coordinate is invalid.
    pub fn from_degrees(latitude: f64, longitude: f64) -> AstroResult<Self> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.6}°{} {:.6}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}
