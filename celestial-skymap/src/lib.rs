//! Polar sky maps of the stars visible to one observer at one instant.
//!
//! Every catalog star flows through the same stages:
//!
//! ```text
//! StarRecord ──► HorizontalTransformer ──► VisibilityFilter ──► DiscProjector ──► classify ──► RenderSink
//!  (ra, dec)       (altitude, azimuth)      (alt ≥ 0, mag ≤ cut)   (x, y on disc)   (O5…M5)      (SVG, JSON)
//! ```
//!
//! The local sidereal time is computed once per run and shared read-only by
//! every star, so the per-star work is independent and can run in parallel
//! ([`SkyMapPipeline::run_parallel`]).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`SkyMapConfig`]: observer, magnitude cutoff, disc radius, TOML loading |
//! | [`observer`] | [`ObserverContext`]: validated location + Julian Day, builds the transformer |
//! | [`visibility`] | [`VisibilityFilter`]: horizon and magnitude cut |
//! | [`projection`] | [`DiscProjector`]: altitude/azimuth to disc coordinates |
//! | [`spectral`] | [`SpectralClass`] from B−V color index, circle radius from magnitude |
//! | [`pipeline`] | [`SkyMapPipeline`], [`SkyMap`], [`RenderedStar`] |
//! | [`summary`] | [`SkySummary`]: counts and min/max extents folded over the catalog |
//! | [`render`] | [`RenderSink`] with SVG and JSON implementations, atomic file publication |
//! | [`app`] | One-shot "load catalog, run pipeline, publish output" used by the CLI |
//!
//! # Example
//!
//! ```
//! use celestial_catalog::StarRecord;
//! use celestial_skymap::{SkyMapConfig, SkyMapPipeline};
//!
//! let pipeline = SkyMapPipeline::new(&SkyMapConfig::default())?;
//! let zenith_ra = pipeline.lmst().hours();
//! let star = StarRecord::new(zenith_ra, 51.02793, 0.0, 0.0)?;
//!
//! let map = pipeline.run(&[star]);
//! assert_eq!(map.stars.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod config;
pub mod errors;
pub mod observer;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod spectral;
pub mod summary;
pub mod visibility;

pub use config::{ObserverConfig, SkyMapConfig};
pub use errors::{SkyMapError, SkyMapResult};
pub use observer::ObserverContext;
pub use pipeline::{RenderedStar, SkyMap, SkyMapPipeline};
pub use projection::{DiscPoint, DiscProjector};
pub use render::{JsonRenderer, OutputFormat, RenderSink, SvgRenderer};
pub use spectral::{circle_radius, classify, SpectralClass};
pub use summary::{Extent, SkySummary};
pub use visibility::{Visibility, VisibilityFilter};
