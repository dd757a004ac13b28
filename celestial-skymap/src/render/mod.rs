//! Sinks that turn a [`SkyMap`] into an output artifact.
//!
//! Sinks only serialize; all geometry is done by the pipeline. Output is
//! rendered into memory first and then published with
//! [`publish_atomically`], so a failed run never leaves a partial file.

mod json;
mod svg;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::{SkyMap, SkyMapError, SkyMapResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub trait RenderSink {
    fn render(&mut self, map: &SkyMap) -> SkyMapResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    /// Guesses from the output file extension, defaulting to SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Svg,
        }
    }
}

pub fn render_to_bytes(format: OutputFormat, map: &SkyMap) -> SkyMapResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Svg => SvgRenderer::new(&mut buffer).render(map)?,
        OutputFormat::Json => JsonRenderer::new(&mut buffer).render(map)?,
    }
    Ok(buffer)
}

/// Writes `bytes` to a temporary file next to `path`, then renames it over `path`.
pub fn publish_atomically(path: &Path, bytes: &[u8]) -> SkyMapResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| SkyMapError::io(dir, e))?;
    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|e| SkyMapError::io(file.path(), e))?;
    file.persist(path).map_err(|e| SkyMapError::io(path, e.error))?;

    info!(path = %path.display(), bytes = bytes.len(), "Sky map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out/sky.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("sky.JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("stars.svg")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("stars")), OutputFormat::Svg);
    }

    #[test]
    fn test_publish_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("stars.svg");
        std::fs::write(&target, "old").unwrap();

        publish_atomically(&target, b"<svg/>").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<svg/>");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_publish_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("stars.svg");

        let err = publish_atomically(&target, b"<svg/>").unwrap_err();
        assert!(matches!(err, SkyMapError::Io { .. }));
        assert!(!target.exists());
    }
}
