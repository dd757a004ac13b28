//! Run statistics folded over the catalog.
//!
//! [`SkySummary`] is a plain value: each worker folds its share of the
//! catalog into its own summary and the partial results are combined with
//! [`SkySummary::merge`]. Nothing is shared or mutated across stars.

use crate::Visibility;
use celestial_coords::Geometry;
use serde::Serialize;
use std::fmt;

/// Inclusive range of the values seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn of(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

fn extend(extent: Option<Extent>, value: f64) -> Option<Extent> {
    Some(match extent {
        Some(e) => e.include(value),
        None => Extent::of(value),
    })
}

fn union(a: Option<Extent>, b: Option<Extent>) -> Option<Extent> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SkySummary {
    pub total: usize,
    pub rendered: usize,
    pub below_horizon: usize,
    pub too_faint: usize,
    /// Stars whose azimuth fell back to 0° (zenith/nadir or polar observer).
    pub degenerate: usize,
    /// Over every catalog star, drawn or not.
    pub magnitude: Option<Extent>,
    pub altitude: Option<Extent>,
}

impl SkySummary {
    pub fn record(
        mut self,
        apparent_magnitude: f64,
        altitude: f64,
        geometry: Geometry,
        visibility: Visibility,
    ) -> Self {
        self.total += 1;
        match visibility {
            Visibility::Visible => self.rendered += 1,
            Visibility::BelowHorizon => self.below_horizon += 1,
            Visibility::TooFaint => self.too_faint += 1,
        }
        if geometry == Geometry::Degenerate {
            self.degenerate += 1;
        }
        self.magnitude = extend(self.magnitude, apparent_magnitude);
        self.altitude = extend(self.altitude, altitude);
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            rendered: self.rendered + other.rendered,
            below_horizon: self.below_horizon + other.below_horizon,
            too_faint: self.too_faint + other.too_faint,
            degenerate: self.degenerate + other.degenerate,
            magnitude: union(self.magnitude, other.magnitude),
            altitude: union(self.altitude, other.altitude),
        }
    }
}

impl fmt::Display for SkySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} stars rendered ({} below horizon, {} too faint, {} degenerate)",
            self.rendered, self.total, self.below_horizon, self.too_faint, self.degenerate
        )?;
        if let Some(m) = self.magnitude {
            write!(f, ", magnitude {:.2}..{:.2}", m.min, m.max)?;
        }
        if let Some(a) = self.altitude {
            write!(f, ", altitude {:.2}°..{:.2}°", a.min, a.max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(f64, f64, Geometry, Visibility)> {
        vec![
            (1.5, 40.0, Geometry::Regular, Visibility::Visible),
            (8.2, 10.0, Geometry::Regular, Visibility::TooFaint),
            (-1.4, -20.0, Geometry::Regular, Visibility::BelowHorizon),
            (4.0, 90.0, Geometry::Degenerate, Visibility::Visible),
        ]
    }

    fn fold(rows: &[(f64, f64, Geometry, Visibility)]) -> SkySummary {
        rows.iter().fold(SkySummary::default(), |s, &(m, a, g, v)| s.record(m, a, g, v))
    }

    #[test]
    fn test_empty_summary() {
        let summary = SkySummary::default();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.magnitude, None);
        assert_eq!(
            summary.to_string(),
            "0 of 0 stars rendered (0 below horizon, 0 too faint, 0 degenerate)"
        );
    }

    #[test]
    fn test_record_counts_and_extents() {
        let summary = fold(&sample());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.too_faint, 1);
        assert_eq!(summary.below_horizon, 1);
        assert_eq!(summary.degenerate, 1);
        assert_eq!(summary.magnitude, Some(Extent { min: -1.4, max: 8.2 }));
        assert_eq!(summary.altitude, Some(Extent { min: -20.0, max: 90.0 }));
    }

    #[test]
    fn test_merge_matches_single_fold() {
        let rows = sample();
        let whole = fold(&rows);
        for split in 0..=rows.len() {
            let (left, right) = rows.split_at(split);
            assert_eq!(fold(left).merge(fold(right)), whole);
            assert_eq!(fold(right).merge(fold(left)), whole);
        }
    }

    #[test]
    fn test_display_includes_extents() {
        let text = fold(&sample()).to_string();
        assert!(text.starts_with("2 of 4 stars rendered"));
        assert!(text.contains("magnitude -1.40..8.20"));
    }
}
