//! Spectral class buckets from the B−V color index, and circle sizing.
//!
//! | Class | B−V | Fill |
//! |-------|-----|------|
//! | O5 | −0.33 | `#9bb0ff` |
//! | B5 | −0.17 | `#aabfff` |
//! | A5 | 0.15 | `#cad7ff` |
//! | F5 | 0.44 | `#f8f7ff` |
//! | G5 | 0.68 | `#fff4ea` |
//! | K5 | 1.15 | `#ffd2a1` |
//! | M5 | 1.64 | `#ffcc6f` |
//! | Default | unknown | `#ffffff` |

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpectralClass {
    O5,
    B5,
    A5,
    F5,
    G5,
    K5,
    M5,
    /// No usable color index.
    Default,
}

/// Reference color index per class, in tie-break order.
pub const REFERENCE_COLOR_INDEX: [(SpectralClass, f64); 7] = [
    (SpectralClass::O5, -0.33),
    (SpectralClass::B5, -0.17),
    (SpectralClass::A5, 0.15),
    (SpectralClass::F5, 0.44),
    (SpectralClass::G5, 0.68),
    (SpectralClass::K5, 1.15),
    (SpectralClass::M5, 1.64),
];

impl SpectralClass {
    pub const ALL: [SpectralClass; 8] = [
        SpectralClass::O5,
        SpectralClass::B5,
        SpectralClass::A5,
        SpectralClass::F5,
        SpectralClass::G5,
        SpectralClass::K5,
        SpectralClass::M5,
        SpectralClass::Default,
    ];

    pub fn reference_color_index(self) -> Option<f64> {
        REFERENCE_COLOR_INDEX
            .iter()
            .find(|(class, _)| *class == self)
            .map(|(_, value)| *value)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SpectralClass::O5 => "O5",
            SpectralClass::B5 => "B5",
            SpectralClass::A5 => "A5",
            SpectralClass::F5 => "F5",
            SpectralClass::G5 => "G5",
            SpectralClass::K5 => "K5",
            SpectralClass::M5 => "M5",
            SpectralClass::Default => "default",
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            SpectralClass::O5 => "#9bb0ff",
            SpectralClass::B5 => "#aabfff",
            SpectralClass::A5 => "#cad7ff",
            SpectralClass::F5 => "#f8f7ff",
            SpectralClass::G5 => "#fff4ea",
            SpectralClass::K5 => "#ffd2a1",
            SpectralClass::M5 => "#ffcc6f",
            SpectralClass::Default => "#ffffff",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Nearest reference class to `color_index`; ties go to the earlier class.
///
/// Total: `None` and non-finite values classify as [`SpectralClass::Default`].
pub fn classify(color_index: Option<f64>) -> SpectralClass {
    let Some(ci) = color_index.filter(|v| v.is_finite()) else {
        return SpectralClass::Default;
    };

    let mut best = REFERENCE_COLOR_INDEX[0];
    let mut best_distance = (ci - best.1).abs();
    for &(class, value) in &REFERENCE_COLOR_INDEX[1..] {
        let distance = (ci - value).abs();
        if distance < best_distance {
            best = (class, value);
            best_distance = distance;
        }
    }
    best.0
}

/// `max(0, (cutoff − magnitude) × scale)`. Brighter stars get larger circles.
pub fn circle_radius(magnitude_cutoff: f64, apparent_magnitude: f64, scale_factor: f64) -> f64 {
    ((magnitude_cutoff - apparent_magnitude) * scale_factor).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_values_classify_to_themselves() {
        for (class, value) in REFERENCE_COLOR_INDEX {
            assert_eq!(classify(Some(value)), class);
        }
        assert_eq!(classify(Some(-0.33)), SpectralClass::O5);
    }

    #[test]
    fn test_missing_color_index_is_default() {
        assert_eq!(classify(None), SpectralClass::Default);
        assert_eq!(classify(Some(f64::NAN)), SpectralClass::Default);
    }

    #[test]
    fn test_nearest_class() {
        assert_eq!(classify(Some(0.656)), SpectralClass::G5); // Sun-like
        assert_eq!(classify(Some(1.85)), SpectralClass::M5); // Betelgeuse
        assert_eq!(classify(Some(0.0)), SpectralClass::A5); // Vega
        assert_eq!(classify(Some(-0.2)), SpectralClass::B5);
    }

    #[test]
    fn test_out_of_table_values_clamp_to_ends() {
        assert_eq!(classify(Some(-2.0)), SpectralClass::O5);
        assert_eq!(classify(Some(5.0)), SpectralClass::M5);
    }

    #[test]
    fn test_exact_tie_goes_to_earlier_class() {
        let midpoint = (-0.17_f64 + 0.15) / 2.0;
        assert_eq!((midpoint - -0.17).abs(), (midpoint - 0.15).abs());
        assert_eq!(classify(Some(midpoint)), SpectralClass::B5);
    }

    #[test]
    fn test_reference_lookup() {
        assert_eq!(SpectralClass::K5.reference_color_index(), Some(1.15));
        assert_eq!(SpectralClass::Default.reference_color_index(), None);
    }

    #[test]
    fn test_css_and_colors_are_distinct() {
        let mut names: Vec<_> = SpectralClass::ALL.iter().map(|c| c.css_class()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SpectralClass::ALL.len());
        assert_eq!(SpectralClass::Default.fill_color(), "#ffffff");
        assert_eq!(SpectralClass::M5.to_string(), "M5");
    }

    #[test]
    fn test_circle_radius() {
        assert_abs_diff_eq!(circle_radius(7.0, 0.0, 0.05), 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(circle_radius(7.0, -1.46, 0.05), 0.423, epsilon = 1e-12);
        assert_eq!(circle_radius(7.0, 7.0, 0.05), 0.0);
    }

    #[test]
    fn test_circle_radius_never_negative() {
        assert_eq!(circle_radius(7.0, 9.5, 0.05), 0.0);
        assert_eq!(circle_radius(7.0, 3.0, 0.0), 0.0);
    }
}
