//! Low-level building blocks for sky-map computations.
//!
//! `celestial-core` holds the pieces every other crate in the workspace leans on:
//! physical constants, degree-based trigonometry, angle normalization and
//! validation, the observer [`Location`], and the shared [`AstroError`] type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Degree trigonometry, wrapping into [0, 360) / [0, 24h), range validation |
//! | [`location`] | Observer latitude/longitude on Earth |
//! | [`math`] | Floating-point modulo helpers |
//! | [`constants`] | Epochs and unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Conventions
//!
//! - **Degrees at the API surface**: the horizontal transform, the disc
//!   projection and catalog records all speak degrees (right ascension in
//!   hours). Conversion to radians happens only inside [`angle::trig`].
//!
//! - **Signed declination and latitude**: both live in [-90, +90]. Values
//!   outside that range are rejected by [`angle::validate_declination`] and
//!   [`angle::validate_latitude`], never wrapped or clamped.
//!
//! ```
//! use celestial_core::angle::{sin_deg, wrap_0_360};
//! use celestial_core::Location;
//!
//! let ghent = Location::from_degrees(51.02793, 3.753585)?;
//! assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
//! assert_eq!(wrap_0_360(-90.0), 270.0);
//! # let _ = ghent;
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::Location;
