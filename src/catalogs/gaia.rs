//! Module to load stars exported from the Gaia DR3 archive.
//!
//! Expected columns, after one header line:
//!
//! `source_id, ra, dec, parallax, lum_flame`
//!
//! with right ascension and declination in degrees, parallax in
//! milliarcseconds and FLAME luminosity in solar units. Any non-numeric
//! field fails the whole load.

use std::io::Read;
use std::path::Path;

use super::{open_catalog, parse_field, read_rows, warn_degenerate, Body, CatalogError};

#[derive(Debug, Clone, PartialEq)]
pub struct GaiaRecord {
    pub source_id: i64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub parallax_mas: f64,
    pub luminosity: f64,
}

impl GaiaRecord {
    pub fn to_body(&self) -> Body {
        Body::from_equatorial(self.ra_deg, self.dec_deg, self.parallax_mas, self.luminosity)
    }
}

/// Read Gaia records from any CSV stream. The first line is a header and is discarded.
pub fn read_gaia_csv<R: Read>(reader: R) -> Result<Vec<GaiaRecord>, CatalogError> {
    read_rows(reader, 5, |record| {
        Ok(GaiaRecord {
            source_id: parse_field(record, 0, "source_id")?,
            ra_deg: parse_field(record, 1, "ra")?,
            dec_deg: parse_field(record, 2, "dec")?,
            parallax_mas: parse_field(record, 3, "parallax")?,
            luminosity: parse_field(record, 4, "luminosity")?,
        })
    })
}

pub fn load_gaia_csv<P: AsRef<Path>>(path: P) -> Result<Vec<GaiaRecord>, CatalogError> {
    let file = open_catalog(path.as_ref())?;
    read_gaia_csv(std::io::BufReader::new(file))
}

/// Convert records to bodies, preserving order and keeping degenerate rows
pub fn to_bodies(records: &[GaiaRecord]) -> Vec<Body> {
    records.iter().map(GaiaRecord::to_body).collect()
}

/// Load a Gaia CSV file straight into bodies
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<Body>, CatalogError> {
    let path = path.as_ref();
    let records = load_gaia_csv(path)?;
    let bodies = to_bodies(&records);
    warn_degenerate(&bodies, &path.display().to_string());
    tracing::info!("loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}
