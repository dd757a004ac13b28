//! Time for sky-map rendering: Julian dates, ISO-8601 parsing and mean sidereal time.
//!
//! The observation instant is supplied, never read from the system clock,
//! so every sidereal computation is a pure function of its inputs.
//!
//! ```
//! use celestial_time::{parse_iso8601, GMST, LMST};
//!
//! let jd = parse_iso8601("2018-10-05T19:00:00Z")?.to_julian_date();
//! let gmst = GMST::from_julian_date(jd)?;
//! let lmst = LMST::new(gmst, 3.753585);
//! assert!((0.0..360.0).contains(&lmst.normalized_degrees()));
//! # Ok::<(), celestial_time::TimeError>(())
//! ```

pub mod constants;
pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use julian::JulianDate;
pub use parsing::{parse_iso8601, ParsedDateTime};
pub use sidereal::{GMST, LMST};

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl From<celestial_core::AstroError> for TimeError {
    fn from(err: celestial_core::AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}
