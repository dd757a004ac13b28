use celestial_catalog::CatalogError;
use celestial_coords::CoordError;
use celestial_core::AstroError;
use celestial_time::TimeError;
use std::path::PathBuf;
use thiserror::Error;

pub type SkyMapResult<T> = Result<T, SkyMapError>;

#[derive(Debug, Error)]
pub enum SkyMapError {
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Failed to parse configuration {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write SVG: {0}")]
    Svg(String),

    #[error("Failed to encode sky map: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SkyMapError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<AstroError> for SkyMapError {
    fn from(error: AstroError) -> Self {
        Self::config(error.to_string())
    }
}
