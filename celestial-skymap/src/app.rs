//! One run of the tool: load the catalog, build the map, publish the file.
//!
//! Stages run strictly in order and each one can abort the run. Output is
//! only touched in the last stage, so configuration or catalog errors never
//! leave a file behind.

use crate::render::{publish_atomically, render_to_bytes};
use crate::{OutputFormat, SkyMap, SkyMapConfig, SkyMapPipeline, SkyMapResult};
use celestial_catalog::StarSource;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub config: SkyMapConfig,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub parallel: bool,
}

pub fn build_map(
    config: &SkyMapConfig,
    source: &dyn StarSource,
    parallel: bool,
) -> SkyMapResult<SkyMap> {
    let pipeline = SkyMapPipeline::new(config)?;
    let catalog = source.load()?;

    let start = Instant::now();
    let map = if parallel {
        pipeline.run_parallel(&catalog)
    } else {
        pipeline.run(&catalog)
    };
    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        parallel,
        "{}",
        map.summary
    );
    Ok(map)
}

pub fn generate(request: &GenerateRequest, source: &dyn StarSource) -> SkyMapResult<SkyMap> {
    let map = build_map(&request.config, source, request.parallel)?;
    let bytes = render_to_bytes(request.format, &map)?;
    publish_atomically(&request.output, &bytes)?;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkyMapError;
    use celestial_catalog::{InMemoryCatalog, StarRecord};
    use tempfile::TempDir;

    fn catalog() -> InMemoryCatalog {
        vec![
            StarRecord::new(18.6156, 38.7837, 0.03, 0.58)
                .unwrap()
                .with_proper_name("Vega")
                .with_color_index(Some(-0.001)),
            StarRecord::new(6.7525, -16.7161, -1.44, 1.45)
                .unwrap()
                .with_proper_name("Sirius"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_generate_writes_svg() {
        let dir = TempDir::new().unwrap();
        let request = GenerateRequest {
            config: SkyMapConfig::default(),
            output: dir.path().join("stars.svg"),
            format: OutputFormat::Svg,
            parallel: false,
        };

        let map = generate(&request, &catalog()).unwrap();
        assert_eq!(map.summary.total, 2);

        let svg = std::fs::read_to_string(&request.output).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = SkyMapConfig::default();
        config.observer.latitude = 123.0;
        let request = GenerateRequest {
            config,
            output: dir.path().join("stars.svg"),
            format: OutputFormat::Svg,
            parallel: false,
        };

        let err = generate(&request, &catalog()).unwrap_err();
        assert!(matches!(err, SkyMapError::Config { .. }));
        assert!(!request.output.exists());
    }
}
