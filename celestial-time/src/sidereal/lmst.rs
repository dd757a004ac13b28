use super::gmst::GMST;
use celestial_core::angle::wrap_0_360;
use celestial_core::constants::DEGREES_PER_HOUR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local Mean Sidereal Time in degrees.
///
/// Holds `GMST° + longitude` without reduction, so the raw value lies in
/// [-180, 540). Consumers that need [0, 360) call [`normalized_degrees`](Self::normalized_degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LMST {
    degrees: f64,
    longitude: f64,
}

impl LMST {
    /// `longitude` is the observer's east-positive longitude in degrees.
    pub fn new(gmst: GMST, longitude: f64) -> Self {
        Self {
            degrees: gmst.degrees() + longitude,
            longitude,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn normalized_degrees(&self) -> f64 {
        wrap_0_360(self.degrees)
    }

    pub fn hours(&self) -> f64 {
        self.normalized_degrees() / DEGREES_PER_HOUR
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for LMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LMST {:.6}h at {:.4}°", self.hours(), self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JulianDate;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lmst_at_greenwich_equals_gmst() {
        let gmst = GMST::from_julian_date(JulianDate::j2000()).unwrap();
        let lmst = LMST::new(gmst, 0.0);
        assert_eq!(lmst.degrees(), gmst.degrees());
        assert_abs_diff_eq!(lmst.hours(), gmst.hours(), epsilon = 1e-14);
    }

    #[test]
    fn test_lmst_longitude_correction() {
        // 15° of longitude is one hour of sidereal time
        let gmst = GMST::from_hours(6.0);
        let east = LMST::new(gmst, 15.0);
        let west = LMST::new(gmst, -15.0);
        assert_abs_diff_eq!(east.hours(), 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(west.hours(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lmst_is_not_reduced() {
        let gmst = GMST::from_hours(23.0);
        let lmst = LMST::new(gmst, 90.0);
        assert_eq!(lmst.degrees(), 435.0);
        assert_eq!(lmst.normalized_degrees(), 75.0);

        let lmst = LMST::new(GMST::from_hours(1.0), -30.0);
        assert_eq!(lmst.degrees(), -15.0);
        assert_eq!(lmst.normalized_degrees(), 345.0);
    }

    #[test]
    fn test_lmst_observation_night() {
        let gmst = GMST::from_julian_date(JulianDate::from_f64(2458397.0)).unwrap();
        let lmst = LMST::new(gmst, 3.753585);
        assert_abs_diff_eq!(lmst.degrees(), 197.869957163, epsilon = 1e-5);
    }

    #[test]
    fn test_display() {
        let lmst = LMST::new(GMST::from_hours(20.5), 120.0);
        assert!(lmst.to_string().starts_with("LMST 4.500000h"));
    }
}
