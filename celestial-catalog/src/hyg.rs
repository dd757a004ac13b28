//! HYG v3 CSV reader.
//!
//! Columns are looked up by header name rather than position, so extra or
//! reordered columns in later HYG releases do not matter. Only `ra`, `dec`,
//! `mag` and `absmag` are required; `proper`, `ci`, `bf` and `con` default to
//! empty when absent.
//!
//! | Column | Field | Empty value |
//! |--------|-------|-------------|
//! | `ra` | right ascension, decimal hours | load error |
//! | `dec` | declination, decimal degrees | load error |
//! | `mag` | apparent magnitude | load error |
//! | `absmag` | absolute magnitude | load error |
//! | `proper` | proper name | `None` |
//! | `ci` | B−V color index | `None` (unparseable text also maps to `None`) |
//! | `bf` | Bayer/Flamsteed designation | `None` |
//! | `con` | constellation abbreviation | `None` |

use crate::source::StarSource;
use crate::{CatalogError, CatalogResult, StarRecord};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 4] = ["ra", "dec", "mag", "absmag"];

#[derive(Debug, Deserialize)]
struct HygRow {
    ra: String,
    dec: String,
    mag: String,
    absmag: String,
    #[serde(default)]
    proper: String,
    #[serde(default)]
    ci: String,
    #[serde(default)]
    bf: String,
    #[serde(default)]
    con: String,
}

impl HygRow {
    fn into_record(self, line: u64) -> CatalogResult<StarRecord> {
        let ra = parse_number(line, "ra", &self.ra)?;
        let dec = parse_number(line, "dec", &self.dec)?;
        let mag = parse_number(line, "mag", &self.mag)?;
        let absmag = parse_number(line, "absmag", &self.absmag)?;

        let record = StarRecord::new(ra, dec, mag, absmag)
            .map_err(|source| CatalogError::OutOfRange { line, source })?;

        Ok(record
            .with_proper_name(self.proper)
            .with_color_index(parse_color_index(line, &self.ci))
            .with_designation(self.bf)
            .with_constellation(self.con))
    }
}

fn parse_number(line: u64, field: &str, value: &str) -> CatalogResult<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::malformed(line, field, value, "missing value"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| CatalogError::malformed(line, field, value, e.to_string()))
}

/// Empty means unknown; text that is not a finite number is treated the same way.
fn parse_color_index(line: u64, value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(ci) if ci.is_finite() => Some(ci),
        _ => {
            debug!(line, value = trimmed, "unparseable color index, treating as unknown");
            None
        }
    }
}

/// HYG catalog stored on disk, plain CSV or gzip-compressed (`.gz`).
#[derive(Debug, Clone)]
pub struct HygCatalog {
    path: PathBuf,
}

impl HygCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> CatalogResult<Box<dyn Read>> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound {
                path: self.path.clone(),
            });
        }
        let file = File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let gzipped = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if gzipped {
            Ok(Box::new(GzDecoder::new(reader)))
        } else {
            Ok(Box::new(reader))
        }
    }

    /// Parses HYG CSV from any reader. The first row must be the header.
    pub fn read_from<R: Read>(reader: R) -> CatalogResult<Vec<StarRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut stars = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            // header is line 1
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            let row: HygRow = record
                .deserialize(Some(&headers))
                .map_err(|e| CatalogError::malformed(line, "row", "", e.to_string()))?;
            stars.push(row.into_record(line)?);
        }

        Ok(stars)
    }
}

impl StarSource for HygCatalog {
    fn load(&self) -> CatalogResult<Vec<StarRecord>> {
        let reader = self.open()?;
        let stars = Self::read_from(reader).map_err(|err| match err {
            CatalogError::Csv(e) if e.is_io_error() => CatalogError::Io {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
            },
            other => other,
        })?;
        info!(path = %self.path.display(), stars = stars.len(), "loaded HYG catalog");
        Ok(stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max";

    fn csv(rows: &[&str]) -> String {
        let mut s = String::from(HEADER);
        for row in rows {
            s.push('\n');
            s.push_str(row);
        }
        s.push('\n');
        s
    }

    const SIRIUS: &str = "32263,32349,48915,2491,Gl 244A,9Alp CMa,Sirius,6.752481,-16.716116,2.6371,-546.01,-1223.08,-5.5,-1.440,1.454,A0m...,0.009,-0.494323,2.476731,-0.758485,0.00000953,-0.00001207,-0.00001221,1.7677953,-0.2917512,-0.000002647,-0.00000593,Alp,9,CMa,1,32263,,22.824,,,";
    const NAMELESS: &str = "2,1,224700,,,,,0.000060,1.089009,219.7802,-5.20,-1.88,0.0,9.100,2.390,F5,0.482,219.740502,0.003449,4.177065,0.00000415,-0.00000552,0.00000313,0.000016,0.019007,-2.521e-8,-9.114e-9,,,Psc,1,2,,9.638,,,";

    #[test]
    fn test_reads_named_and_nameless_stars() {
        let stars = HygCatalog::read_from(csv(&[SIRIUS, NAMELESS]).as_bytes()).unwrap();
        assert_eq!(stars.len(), 2);

        let sirius = &stars[0];
        assert_eq!(sirius.ra(), 6.752481);
        assert_eq!(sirius.dec(), -16.716116);
        assert_eq!(sirius.apparent_magnitude(), -1.44);
        assert_eq!(sirius.absolute_magnitude(), 1.454);
        assert_eq!(sirius.proper_name(), Some("Sirius"));
        assert_eq!(sirius.color_index(), Some(0.009));
        assert_eq!(sirius.designation(), Some("9Alp CMa"));
        assert_eq!(sirius.constellation(), Some("CMa"));

        let nameless = &stars[1];
        assert_eq!(nameless.proper_name(), None);
        assert_eq!(nameless.designation(), None);
        assert_eq!(nameless.constellation(), Some("Psc"));
    }

    #[test]
    fn test_minimal_columns() {
        let data = "ra,dec,mag,absmag\n1.5,-20.0,4.2,0.3\n";
        let stars = HygCatalog::read_from(data.as_bytes()).unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].color_index(), None);
        assert_eq!(stars[0].constellation(), None);
    }

    #[test]
    fn test_empty_and_garbage_color_index_are_unknown() {
        let data = "ra,dec,mag,absmag,ci\n\
                    1.0,2.0,3.0,4.0,\n\
                    1.0,2.0,3.0,4.0,n/a\n\
                    1.0,2.0,3.0,4.0,1.64\n";
        let stars = HygCatalog::read_from(data.as_bytes()).unwrap();
        assert_eq!(stars[0].color_index(), None);
        assert_eq!(stars[1].color_index(), None);
        assert_eq!(stars[2].color_index(), Some(1.64));
    }

    #[test]
    fn test_missing_required_column() {
        let data = "ra,dec,absmag\n1.0,2.0,3.0\n";
        let err = HygCatalog::read_from(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { ref column } if column == "mag"));
    }

    #[test]
    fn test_unparseable_magnitude_reports_line() {
        let data = "ra,dec,mag,absmag\n1.0,2.0,3.0,4.0\n1.0,2.0,bright,4.0\n";
        let err = HygCatalog::read_from(data.as_bytes()).unwrap_err();
        match err {
            CatalogError::Malformed {
                line, field, value, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(field, "mag");
                assert_eq!(value, "bright");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_declination_is_error() {
        let data = "ra,dec,mag,absmag\n1.0,,3.0,4.0\n";
        let err = HygCatalog::read_from(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing value"));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_out_of_range_declination() {
        let data = "ra,dec,mag,absmag\n1.0,95.0,3.0,4.0\n";
        let err = HygCatalog::read_from(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfRange { line: 2, .. }));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let data = "ra,dec,mag,absmag\n1.0,2.0,3.0\n";
        let err = HygCatalog::read_from(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = HygCatalog::new("/definitely/not/here/hygdata_v3.csv")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }
}
