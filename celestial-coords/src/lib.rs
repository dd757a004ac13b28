//! Equatorial to horizontal coordinate transforms.
//!
//! [`HorizontalTransformer`] turns a star's catalog right ascension (hours)
//! and declination (degrees) into altitude and azimuth for one observer at
//! one sidereal time. The transformer is built once per run and reused for
//! every star; it holds no mutable state.
//!
//! ```
//! use celestial_coords::HorizontalTransformer;
//! use celestial_core::Location;
//! use celestial_time::JulianDate;
//!
//! let observer = Location::from_degrees(51.02793, 3.753585)?;
//! let transformer = HorizontalTransformer::for_observer(&observer, JulianDate::from_f64(2458397.0))?;
//!
//! let polaris = transformer.transform(2.5303, 89.2641);
//! assert!((polaris.position.altitude() - 51.0).abs() < 1.0);
//! # Ok::<(), celestial_coords::CoordError>(())
//! ```

pub mod errors;
pub mod frames;

pub use errors::{CoordError, CoordResult};
pub use frames::{Geometry, HorizontalPosition, HorizontalTransformer, Transformed};

pub use celestial_core::Location;
pub use celestial_time::{JulianDate, LMST};
