//! Run configuration: observer, observation time and drawing parameters.
//!
//! Values come from three layers, lowest precedence first: the defaults
//! below, an optional TOML file, then command-line overrides applied by the
//! caller. [`SkyMapConfig::validate`] runs before any catalog IO.
//!
//! ```toml
//! magnitude_cutoff = 6.5
//! disc_radius = 120.0
//!
//! [observer]
//! latitude = 51.02793
//! longitude = 3.753585
//! datetime = "2018-10-05T19:00:00Z"
//! ```

use crate::{SkyMapError, SkyMapResult};
use celestial_core::angle::{validate_finite, validate_latitude, validate_longitude};
use celestial_time::{parse_iso8601, JulianDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LATITUDE: f64 = 51.027930;
pub const DEFAULT_LONGITUDE: f64 = 3.753585;
/// 2018-10-05 12:00 UT.
pub const DEFAULT_JULIAN_DAY: f64 = 2458397.0;
pub const DEFAULT_MAGNITUDE_CUTOFF: f64 = 7.0;
pub const DEFAULT_DISC_RADIUS: f64 = 90.0;
pub const DEFAULT_NAME_OFFSET: f64 = 0.5;
pub const DEFAULT_SCALE_FACTOR: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub julian_day: Option<f64>,
    /// ISO-8601 UTC timestamp, alternative to `julian_day`.
    pub datetime: Option<String>,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            julian_day: None,
            datetime: None,
        }
    }
}

impl ObserverConfig {
    /// Julian Day of the observation, falling back to [`DEFAULT_JULIAN_DAY`]
    /// when neither `julian_day` nor `datetime` is set.
    pub fn julian_date(&self) -> SkyMapResult<JulianDate> {
        match (self.julian_day, self.datetime.as_deref()) {
            (Some(_), Some(_)) => Err(SkyMapError::config(
                "observer.julian_day and observer.datetime are mutually exclusive",
            )),
            (Some(jd), None) => {
                validate_finite("observer", "julian_day", jd)?;
                Ok(JulianDate::from_f64(jd))
            }
            (None, Some(text)) => Ok(parse_iso8601(text)?.to_julian_date()),
            (None, None) => Ok(JulianDate::from_f64(DEFAULT_JULIAN_DAY)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkyMapConfig {
    pub observer: ObserverConfig,
    /// Faintest apparent magnitude drawn. Smaller is stricter.
    pub magnitude_cutoff: f64,
    pub disc_radius: f64,
    /// Label offset handed to the sink; geometry ignores it.
    pub name_offset: f64,
    pub scale_factor: f64,
    pub show_constellations: bool,
}

impl Default for SkyMapConfig {
    fn default() -> Self {
        Self {
            observer: ObserverConfig::default(),
            magnitude_cutoff: DEFAULT_MAGNITUDE_CUTOFF,
            disc_radius: DEFAULT_DISC_RADIUS,
            name_offset: DEFAULT_NAME_OFFSET,
            scale_factor: DEFAULT_SCALE_FACTOR,
            show_constellations: false,
        }
    }
}

impl SkyMapConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> SkyMapResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SkyMapError::io(path, e))?;
        Self::from_toml_str(&text).map_err(|source| SkyMapError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> SkyMapResult<()> {
        validate_latitude(self.observer.latitude)?;
        validate_longitude(self.observer.longitude)?;
        self.observer.julian_date()?;

        validate_finite("config", "magnitude_cutoff", self.magnitude_cutoff)?;
        validate_finite("config", "name_offset", self.name_offset)?;

        if !self.disc_radius.is_finite() || self.disc_radius <= 0.0 {
            return Err(SkyMapError::config(format!(
                "disc_radius must be finite and positive, got {}",
                self.disc_radius
            )));
        }
        if !self.scale_factor.is_finite() || self.scale_factor < 0.0 {
            return Err(SkyMapError::config(format!(
                "scale_factor must be finite and non-negative, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}
