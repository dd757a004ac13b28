use crate::spectral::{circle_radius, classify, SpectralClass};
use crate::{
    DiscPoint, DiscProjector, ObserverContext, SkyMapConfig, SkyMapResult, SkySummary,
    Visibility, VisibilityFilter,
};
use celestial_catalog::StarRecord;
use celestial_coords::{HorizontalTransformer, Transformed};
use celestial_time::LMST;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// One visible star, ready for a render sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedStar {
    pub point: DiscPoint,
    pub altitude: f64,
    pub azimuth: f64,
    /// Zero for stars at the magnitude cutoff; sinks skip the circle but may
    /// still draw the label.
    pub circle_radius: f64,
    pub class: SpectralClass,
    pub magnitude: f64,
    pub proper_name: Option<String>,
    pub constellation: Option<String>,
}

/// Everything a sink needs to draw one map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyMap {
    pub radius: f64,
    pub name_offset: f64,
    pub show_constellations: bool,
    pub julian_day: f64,
    pub lmst_degrees: f64,
    /// In catalog order.
    pub stars: Vec<RenderedStar>,
    pub summary: SkySummary,
}

/// Fate of one catalog star.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub transformed: Transformed,
    pub visibility: Visibility,
    pub rendered: Option<RenderedStar>,
}

/// Transform, filter, project and classify stars for one observer.
///
/// The LMST is fixed at construction; [`run`](Self::run) and
/// [`run_parallel`](Self::run_parallel) only read it.
#[derive(Debug, Clone)]
pub struct SkyMapPipeline {
    observer: ObserverContext,
    transformer: HorizontalTransformer,
    filter: VisibilityFilter,
    projector: DiscProjector,
    scale_factor: f64,
    name_offset: f64,
    show_constellations: bool,
}

impl SkyMapPipeline {
    pub fn new(config: &SkyMapConfig) -> SkyMapResult<Self> {
        config.validate()?;
        let observer = ObserverContext::from_config(config)?;
        let transformer = observer.transformer()?;
        info!(
            observer = %observer.location(),
            jd = %observer.julian_date(),
            lmst = %transformer.lmst(),
            "Sky map pipeline ready"
        );
        Ok(Self {
            observer,
            transformer,
            filter: VisibilityFilter::new(config.magnitude_cutoff),
            projector: DiscProjector::new(config.disc_radius)?,
            scale_factor: config.scale_factor,
            name_offset: config.name_offset,
            show_constellations: config.show_constellations,
        })
    }

    pub fn observer(&self) -> &ObserverContext {
        &self.observer
    }

    pub fn lmst(&self) -> LMST {
        self.transformer.lmst()
    }

    pub fn projector(&self) -> &DiscProjector {
        &self.projector
    }

    pub fn evaluate(&self, star: &StarRecord) -> Evaluation {
        let transformed = self.transformer.transform(star.ra(), star.dec());
        let position = transformed.position;
        let visibility = self.filter.classify(&position, star.apparent_magnitude());

        let rendered = (visibility == Visibility::Visible).then(|| RenderedStar {
            point: self.projector.project(position.altitude(), position.azimuth()),
            altitude: position.altitude(),
            azimuth: position.azimuth(),
            circle_radius: circle_radius(
                self.filter.magnitude_cutoff(),
                star.apparent_magnitude(),
                self.scale_factor,
            ),
            class: classify(star.color_index()),
            magnitude: star.apparent_magnitude(),
            proper_name: star.proper_name().map(str::to_owned),
            constellation: star.constellation().map(str::to_owned),
        });

        Evaluation {
            transformed,
            visibility,
            rendered,
        }
    }

    fn accumulate(
        &self,
        (mut stars, summary): (Vec<RenderedStar>, SkySummary),
        star: &StarRecord,
    ) -> (Vec<RenderedStar>, SkySummary) {
        let evaluation = self.evaluate(star);
        let summary = summary.record(
            star.apparent_magnitude(),
            evaluation.transformed.position.altitude(),
            evaluation.transformed.geometry,
            evaluation.visibility,
        );
        stars.extend(evaluation.rendered);
        (stars, summary)
    }

    /// Single pass over the catalog.
    pub fn run(&self, catalog: &[StarRecord]) -> SkyMap {
        let (stars, summary) = catalog
            .iter()
            .fold((Vec::new(), SkySummary::default()), |acc, star| {
                self.accumulate(acc, star)
            });
        self.finish(stars, summary)
    }

    /// Same result as [`run`](Self::run), with stars split across the rayon pool.
    pub fn run_parallel(&self, catalog: &[StarRecord]) -> SkyMap {
        let (stars, summary) = catalog
            .par_iter()
            .fold(
                || (Vec::new(), SkySummary::default()),
                |acc, star| self.accumulate(acc, star),
            )
            .reduce(
                || (Vec::new(), SkySummary::default()),
                |(mut left, left_summary), (right, right_summary)| {
                    left.extend(right);
                    (left, left_summary.merge(right_summary))
                },
            );
        self.finish(stars, summary)
    }

    fn finish(&self, stars: Vec<RenderedStar>, summary: SkySummary) -> SkyMap {
        debug!(%summary, "Catalog pass complete");
        if summary.degenerate > 0 {
            debug!(
                count = summary.degenerate,
                "Stars with undefined azimuth placed at 0°"
            );
        }
        SkyMap {
            radius: self.projector.radius(),
            name_offset: self.name_offset,
            show_constellations: self.show_constellations,
            julian_day: self.observer.julian_date().to_f64(),
            lmst_degrees: self.lmst().degrees(),
            stars,
            summary,
        }
    }
}
