use celestial_coords::HorizontalPosition;
use serde::Serialize;

/// Outcome of the visibility test for one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    BelowHorizon,
    /// Above the horizon but fainter than the cutoff.
    TooFaint,
}

/// A star is drawn iff `altitude >= 0` and `magnitude <= cutoff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityFilter {
    magnitude_cutoff: f64,
}

impl VisibilityFilter {
    pub fn new(magnitude_cutoff: f64) -> Self {
        Self { magnitude_cutoff }
    }

    pub fn magnitude_cutoff(&self) -> f64 {
        self.magnitude_cutoff
    }

    /// Stars below the horizon are reported as such even when also too faint.
    pub fn classify(&self, position: &HorizontalPosition, apparent_magnitude: f64) -> Visibility {
        if !position.is_above_horizon() {
            Visibility::BelowHorizon
        } else if apparent_magnitude > self.magnitude_cutoff {
            Visibility::TooFaint
        } else {
            Visibility::Visible
        }
    }

    pub fn is_visible(&self, position: &HorizontalPosition, apparent_magnitude: f64) -> bool {
        self.classify(position, apparent_magnitude) == Visibility::Visible
    }
}
