//! Lightweight three-column catalog.
//!
//! Rows carry only `ra, dec, parallax`. Every body gets the same implicit
//! luminosity, so brightness depends on distance alone. Kept separate from
//! the Gaia loader rather than treated as a Gaia file with a missing column.

use std::io::Read;
use std::path::Path;

use super::{open_catalog, parse_field, read_rows, warn_degenerate, Body, CatalogError};

/// Luminosity assigned to every reduced-catalog body, in solar units
pub const IMPLICIT_LUMINOSITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedRecord {
    pub ra_deg: f64,
    pub dec_deg: f64,
    /// Distance indicator, read as parallax in milliarcseconds
    pub parallax_mas: f64,
}

impl ReducedRecord {
    pub fn to_body(&self) -> Body {
        Body::from_equatorial(
            self.ra_deg,
            self.dec_deg,
            self.parallax_mas,
            IMPLICIT_LUMINOSITY,
        )
    }
}

pub fn read_reduced_csv<R: Read>(reader: R) -> Result<Vec<ReducedRecord>, CatalogError> {
    read_rows(reader, 3, |record| {
        Ok(ReducedRecord {
            ra_deg: parse_field(record, 0, "ra")?,
            dec_deg: parse_field(record, 1, "dec")?,
            parallax_mas: parse_field(record, 2, "distance indicator")?,
        })
    })
}

pub fn load_reduced_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ReducedRecord>, CatalogError> {
    let file = open_catalog(path.as_ref())?;
    read_reduced_csv(std::io::BufReader::new(file))
}

pub fn to_bodies(records: &[ReducedRecord]) -> Vec<Body> {
    records.iter().map(ReducedRecord::to_body).collect()
}

pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<Body>, CatalogError> {
    let path = path.as_ref();
    let bodies = to_bodies(&load_reduced_csv(path)?);
    warn_degenerate(&bodies, &path.display().to_string());
    tracing::info!(
        "loaded {} bodies from reduced catalog {}",
        bodies.len(),
        path.display()
    );
    Ok(bodies)
}
