use celestial_core::angle::{validate_declination, validate_finite, validate_right_ascension_hours};
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One catalog star. Immutable once built.
///
/// Empty text fields and an unknown color index are represented as `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StarRecord {
    ra: f64,
    dec: f64,
    apparent_magnitude: f64,
    absolute_magnitude: f64,
    proper_name: Option<String>,
    color_index: Option<f64>,
    designation: Option<String>,
    constellation: Option<String>,
}

impl StarRecord {
    /// `ra` in hours [0, 24), `dec` in degrees [-90, 90]; magnitudes must be finite.
    pub fn new(
        ra: f64,
        dec: f64,
        apparent_magnitude: f64,
        absolute_magnitude: f64,
    ) -> AstroResult<Self> {
        Ok(Self {
            ra: validate_right_ascension_hours(ra)?,
            dec: validate_declination(dec)?,
            apparent_magnitude: validate_finite(
                "star_record",
                "Apparent magnitude",
                apparent_magnitude,
            )?,
            absolute_magnitude: validate_finite(
                "star_record",
                "Absolute magnitude",
                absolute_magnitude,
            )?,
            proper_name: None,
            color_index: None,
            designation: None,
            constellation: None,
        })
    }

    pub fn with_proper_name(mut self, name: impl Into<String>) -> Self {
        self.proper_name = non_empty(name.into());
        self
    }

    pub fn with_color_index(mut self, color_index: Option<f64>) -> Self {
        self.color_index = color_index.filter(|ci| ci.is_finite());
        self
    }

    /// Bayer/Flamsteed designation, e.g. `21Alp And`.
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = non_empty(designation.into());
        self
    }

    pub fn with_constellation(mut self, abbreviation: impl Into<String>) -> Self {
        self.constellation = non_empty(abbreviation.into());
        self
    }

    pub fn ra(&self) -> f64 {
        self.ra
    }

    pub fn dec(&self) -> f64 {
        self.dec
    }

    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    pub fn absolute_magnitude(&self) -> f64 {
        self.absolute_magnitude
    }

    pub fn proper_name(&self) -> Option<&str> {
        self.proper_name.as_deref()
    }

    /// B−V color index, when known.
    pub fn color_index(&self) -> Option<f64> {
        self.color_index
    }

    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    pub fn constellation(&self) -> Option<&str> {
        self.constellation.as_deref()
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}
