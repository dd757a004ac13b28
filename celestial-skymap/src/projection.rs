use crate::{SkyMapError, SkyMapResult};
use celestial_core::angle::{cos_deg, sin_deg};
use serde::Serialize;

/// Position on the map, in disc units with the zenith at `(R, R)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscPoint {
    pub x: f64,
    pub y: f64,
}

/// Polar projection of altitude/azimuth onto a disc of radius `R`.
///
/// `r = R − altitude`, so the zenith lands on the center and the horizon on the
/// rim. Azimuth is measured from the +x axis toward +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscProjector {
    radius: f64,
}

impl DiscProjector {
    pub fn new(radius: f64) -> SkyMapResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SkyMapError::config(format!(
                "disc radius must be finite and positive, got {}",
                radius
            )));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> DiscPoint {
        DiscPoint {
            x: self.radius,
            y: self.radius,
        }
    }

    /// Callers pass only visible stars, i.e. `0 <= altitude <= 90`.
    pub fn project(&self, altitude: f64, azimuth: f64) -> DiscPoint {
        let r = self.radius - altitude;
        DiscPoint {
            x: self.radius + cos_deg(azimuth) * r,
            y: self.radius + sin_deg(azimuth) * r,
        }
    }

    pub fn distance_from_center(&self, point: &DiscPoint) -> f64 {
        (point.x - self.radius).hypot(point.y - self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zenith_maps_to_center() {
        let projector = DiscProjector::new(90.0).unwrap();
        for azimuth in [0.0, 45.0, 181.0, 359.9] {
            let p = projector.project(90.0, azimuth);
            assert_abs_diff_eq!(p.x, 90.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, 90.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_horizon_maps_to_rim() {
        let projector = DiscProjector::new(90.0).unwrap();
        for azimuth in [0.0, 30.0, 90.0, 200.0, 315.0] {
            let p = projector.project(0.0, azimuth);
            assert_abs_diff_eq!(projector.distance_from_center(&p), 90.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cardinal_directions() {
        let projector = DiscProjector::new(90.0).unwrap();

        let east_of_x = projector.project(0.0, 0.0);
        assert_abs_diff_eq!(east_of_x.x, 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east_of_x.y, 90.0, epsilon = 1e-12);

        let p = projector.project(30.0, 90.0);
        assert_abs_diff_eq!(p.x, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 150.0, epsilon = 1e-9);

        let p = projector.project(60.0, 180.0);
        assert_abs_diff_eq!(p.x, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_visible_hemisphere_stays_inside_disc() {
        let projector = DiscProjector::new(90.0).unwrap();
        for alt_step in 0..=18 {
            let altitude = alt_step as f64 * 5.0;
            for az_step in 0..72 {
                let p = projector.project(altitude, az_step as f64 * 5.0);
                assert!(projector.distance_from_center(&p) <= 90.0 + 1e-9);
                assert!((0.0 - 1e-9..=180.0 + 1e-9).contains(&p.x));
                assert!((0.0 - 1e-9..=180.0 + 1e-9).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_custom_radius() {
        let projector = DiscProjector::new(120.0).unwrap();
        assert_eq!(projector.center(), DiscPoint { x: 120.0, y: 120.0 });
        let p = projector.project(0.0, 0.0);
        assert_abs_diff_eq!(p.x, 240.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert!(DiscProjector::new(0.0).is_err());
        assert!(DiscProjector::new(-5.0).is_err());
        assert!(DiscProjector::new(f64::NAN).is_err());
    }
}
