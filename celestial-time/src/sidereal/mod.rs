//! Mean sidereal time.
//!
//! [`GMST`] is derived from a Julian Day with the linear approximation
//! `GMST = 18.697374558 + 24.06570982441908 × (JD − 2451545.0)` hours,
//! reduced to [0, 24). [`LMST`] adds the observer's east longitude.
//!
//! Precession, nutation and the UT1/TT distinction are not modelled; the
//! result is accurate to a fraction of a second of time over a few centuries
//! around J2000, plenty for a naked-eye sky map.

mod gmst;
mod lmst;

pub use gmst::GMST;
pub use lmst::LMST;
