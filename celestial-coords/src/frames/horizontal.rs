use crate::{CoordError, CoordResult};
use celestial_core::angle::{
    acos_deg, asin_deg, cos_deg, sin_deg, validate_declination, validate_right_ascension_hours,
    wrap_0_24, wrap_0_360,
};
use celestial_core::constants::DEGREES_PER_HOUR;
use celestial_core::Location;
use celestial_time::{JulianDate, GMST, LMST};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Below this, `cos(alt)·cos(lat)` is treated as zero and azimuth is undefined.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Altitude above the horizon and azimuth east of north, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    altitude: f64,
    azimuth: f64,
}

impl HorizontalPosition {
    /// Altitude must be in [-90, 90] and azimuth in [0, 360).
    pub fn new(altitude: f64, azimuth: f64) -> CoordResult<Self> {
        if !(-90.0..=90.0).contains(&altitude) {
            return Err(CoordError::invalid_coordinate(format!(
                "altitude {} outside [-90°, +90°]",
                altitude
            )));
        }
        if !(0.0..360.0).contains(&azimuth) {
            return Err(CoordError::invalid_coordinate(format!(
                "azimuth {} outside [0°, 360°)",
                azimuth
            )));
        }
        Ok(Self { altitude, azimuth })
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.altitude
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude >= 0.0
    }
}

/// Whether the azimuth could be solved or fell back to 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Regular,
    /// Star at the zenith/nadir or observer at a pole: azimuth is set to 0°.
    Degenerate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformed {
    pub position: HorizontalPosition,
    pub geometry: Geometry,
}

/// Converts equatorial coordinates to horizontal ones for a fixed observer and LMST.
///
/// The observer's latitude terms are computed once at construction.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalTransformer {
    lmst: LMST,
    latitude: f64,
    sin_lat: f64,
    cos_lat: f64,
}

impl HorizontalTransformer {
    pub fn new(lmst: LMST, observer: &Location) -> Self {
        let latitude = observer.latitude();
        Self {
            lmst,
            latitude,
            sin_lat: sin_deg(latitude),
            cos_lat: cos_deg(latitude),
        }
    }

    /// Derives the LMST from `jd` and the observer's longitude.
    pub fn for_observer(observer: &Location, jd: JulianDate) -> CoordResult<Self> {
        let gmst = GMST::from_julian_date(jd)?;
        Ok(Self::new(LMST::new(gmst, observer.longitude()), observer))
    }

    pub fn lmst(&self) -> LMST {
        self.lmst
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Like [`transform`](Self::transform), but rejects RA outside [0h, 24h)
    /// and declination outside [-90°, +90°].
    pub fn try_transform(&self, ra_hours: f64, dec: f64) -> CoordResult<Transformed> {
        validate_right_ascension_hours(ra_hours)?;
        validate_declination(dec)?;
        Ok(self.transform(ra_hours, dec))
    }

    /// `ra_hours` is reduced modulo 24h. `dec` uses the signed [-90, +90] convention.
    pub fn transform(&self, ra_hours: f64, dec: f64) -> Transformed {
        let ra = wrap_0_24(ra_hours) * DEGREES_PER_HOUR;
        let hour_angle = wrap_0_360(self.lmst.degrees() - ra);

        let sin_dec = sin_deg(dec);
        let sin_alt =
            sin_dec * self.sin_lat + cos_deg(dec) * self.cos_lat * cos_deg(hour_angle);
        let altitude = asin_deg(sin_alt);

        let denominator = cos_deg(altitude) * self.cos_lat;
        if denominator.abs() < DEGENERATE_EPSILON {
            trace!(
                ra_hours,
                dec,
                altitude,
                latitude = self.latitude,
                "azimuth undefined, using 0°"
            );
            return Transformed {
                position: HorizontalPosition {
                    altitude,
                    azimuth: 0.0,
                },
                geometry: Geometry::Degenerate,
            };
        }

        let cos_a = (sin_dec - sin_deg(altitude) * self.sin_lat) / denominator;
        let a = acos_deg(cos_a);
        let azimuth = if sin_deg(hour_angle) < 0.0 {
            a
        } else {
            360.0 - a
        };

        Transformed {
            position: HorizontalPosition {
                altitude,
                azimuth: wrap_0_360(azimuth),
            },
            geometry: Geometry::Regular,
        }
    }
}
