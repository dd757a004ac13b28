use celestial_core::AstroError;
use std::path::PathBuf;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "Catalog not found at {path:?}. Download 'hygdata_v3.csv' from \
         https://github.com/astronexus/HYG-Database and pass its path with --catalog"
    )]
    NotFound { path: PathBuf },

    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Malformed catalog line {line}: field '{field}' = '{value}': {message}")]
    Malformed {
        line: u64,
        field: String,
        value: String,
        message: String,
    },

    #[error("Catalog line {line} out of range: {source}")]
    OutOfRange {
        line: u64,
        #[source]
        source: AstroError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    pub fn malformed(line: u64, field: &str, value: &str, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Line number in the catalog file, where one applies.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Malformed { line, .. } | Self::OutOfRange { line, .. } => Some(*line),
            _ => None,
        }
    }
}
