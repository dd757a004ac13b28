//! Star catalog access for sky-map rendering.
//!
//! Reads the [HYG database](https://github.com/astronexus/HYG-Database) (v3 CSV)
//! into an immutable snapshot of [`StarRecord`]s. The whole catalog (~120k rows)
//! is loaded before any coordinate work starts, so a malformed row aborts the
//! run before output is produced.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`record`] | [`StarRecord`]: position, magnitudes, optional name/color index/constellation |
//! | [`hyg`] | [`HygCatalog`]: CSV (optionally gzipped) reader addressed by header names |
//! | [`source`] | [`StarSource`] trait and [`InMemoryCatalog`] |
//! | [`errors`] | [`CatalogError`] and [`CatalogResult`] |
//!
//! # Quick Start
//!
//! ```ignore
//! use celestial_catalog::{HygCatalog, StarSource};
//!
//! let stars = HygCatalog::new("input/hygdata_v3.csv").load()?;
//! let bright = stars.iter().filter(|s| s.apparent_magnitude() <= 6.5).count();
//! ```

pub mod errors;
pub mod hyg;
pub mod record;
pub mod source;

pub use errors::{CatalogError, CatalogResult};
pub use hyg::HygCatalog;
pub use record::StarRecord;
pub use source::{InMemoryCatalog, StarSource};
