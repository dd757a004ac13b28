use crate::{SkyMapConfig, SkyMapResult};
use celestial_coords::HorizontalTransformer;
use celestial_core::Location;
use celestial_time::JulianDate;

/// Validated observer position and observation instant for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    location: Location,
    julian_date: JulianDate,
}

impl ObserverContext {
    pub fn new(location: Location, julian_date: JulianDate) -> Self {
        Self {
            location,
            julian_date,
        }
    }

    pub fn from_config(config: &SkyMapConfig) -> SkyMapResult<Self> {
        let location = Location::from_degrees(config.observer.latitude, config.observer.longitude)?;
        Ok(Self::new(location, config.observer.julian_date()?))
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Computes the LMST for this observer once; the transformer is then
    /// shared read-only by every star.
    pub fn transformer(&self) -> SkyMapResult<HorizontalTransformer> {
        Ok(HorizontalTransformer::for_observer(&self.location, self.julian_date)?)
    }
}
