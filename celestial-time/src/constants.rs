/// GMST in hours at the J2000.0 epoch (2000-01-01 12:00 UT).
pub const GMST_AT_J2000_HOURS: f64 = 18.697374558;

/// Sidereal hours elapsed per mean solar day.
#[allow(clippy::excessive_precision)]
pub const SIDEREAL_HOURS_PER_DAY: f64 = 24.06570982441908;
