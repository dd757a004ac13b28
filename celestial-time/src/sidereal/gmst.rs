use crate::constants::{GMST_AT_J2000_HOURS, SIDEREAL_HOURS_PER_DAY};
use crate::{JulianDate, TimeError, TimeResult};
use celestial_core::angle::wrap_0_24;
use celestial_core::constants::DEGREES_PER_HOUR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich Mean Sidereal Time, stored in hours within [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST {
    hours: f64,
}

impl GMST {
    pub fn from_julian_date(jd: JulianDate) -> TimeResult<Self> {
        let d = jd.days_since_j2000();

        if !d.is_finite() {
            return Err(TimeError::CalculationError(format!(
                "Julian day not finite: {}",
                jd.to_f64()
            )));
        }

        let gmst_hours = GMST_AT_J2000_HOURS + SIDEREAL_HOURS_PER_DAY * d;

        Ok(Self {
            hours: wrap_0_24(gmst_hours),
        })
    }

    pub fn from_hours(hours: f64) -> Self {
        Self {
            hours: wrap_0_24(hours),
        }
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn degrees(&self) -> f64 {
        self.hours * DEGREES_PER_HOUR
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours)
    }
}
