use crate::{AstroError, AstroResult, MathErrorKind};

pub fn validate_finite(operation: &str, name: &str, value: f64) -> AstroResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }

    Err(AstroError::math_error(
        operation,
        MathErrorKind::NotFinite,
        &format!("{} not finite", name),
    ))
}

fn validate_range(
    operation: &str,
    name: &str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
    range_desc: &str,
) -> AstroResult<f64> {
    validate_finite(operation, name, value)?;

    if range.contains(&value) {
        return Ok(value);
    }

    Err(AstroError::math_error(
        operation,
        MathErrorKind::OutOfRange,
        &format!("{} {:.4} out of range {}", name, value, range_desc),
    ))
}

/// Declination in degrees, [-90°, +90°].
pub fn validate_declination(degrees: f64) -> AstroResult<f64> {
    validate_range(
        "validate_declination",
        "Dec",
        degrees,
        -90.0..=90.0,
        "[-90°, +90°]",
    )
}

/// Observer latitude in degrees, [-90°, +90°].
pub fn validate_latitude(degrees: f64) -> AstroResult<f64> {
    validate_range(
        "validate_latitude",
        "Latitude",
        degrees,
        -90.0..=90.0,
        "[-90°, +90°]",
    )
}

/// Observer longitude in degrees, east positive, [-180°, +180°].
pub fn validate_longitude(degrees: f64) -> AstroResult<f64> {
    validate_range(
        "validate_longitude",
        "Longitude",
        degrees,
        -180.0..=180.0,
        "[-180°, +180°]",
    )
}

/// Right ascension in hours, [0h, 24h). 24h itself is rejected rather than wrapped.
pub fn validate_right_ascension_hours(hours: f64) -> AstroResult<f64> {
    validate_finite("validate_right_ascension", "RA", hours)?;

    if (0.0..24.0).contains(&hours) {
        return Ok(hours);
    }

    Err(AstroError::math_error(
        "validate_right_ascension",
        MathErrorKind::OutOfRange,
        &format!("RA {:.4}h out of range [0h, 24h)", hours),
    ))
}
