#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Floored modulo for a positive divisor: the result is always in `[0, y)`.
///
/// `fmod` (and Rust's `%`) keep the sign of the dividend, so `-1 % 24 == -1`.
/// Sidereal time and hour angles need the mathematical modulo instead.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    let r = if r < 0.0 { r + y } else { r };
    // r + y can round up to exactly y for tiny negative r
    if r >= y {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_positive() {
        assert_eq!(modulo(26.0, 24.0), 2.0);
        assert_eq!(modulo(2.0, 24.0), 2.0);
        assert_eq!(modulo(24.0, 24.0), 0.0);
    }

    #[test]
    fn test_modulo_negative_dividend() {
        assert_eq!(modulo(-1.0, 24.0), 23.0);
        assert_eq!(modulo(-25.0, 24.0), 23.0);
        assert_eq!(fmod(-1.0, 24.0), -1.0);
    }

    #[test]
    fn test_modulo_tiny_negative_stays_in_range() {
        let r = modulo(-1e-18, 360.0);
        assert!((0.0..360.0).contains(&r), "got {}", r);
    }

    #[test]
    fn test_modulo_large_values() {
        let r = modulo(164_898.243_717, 24.0);
        assert!((r - 18.243_717).abs() < 1e-6);
        let r = modulo(-164_898.243_717, 24.0);
        assert!((r - 5.756_283).abs() < 1e-6);
    }
}
