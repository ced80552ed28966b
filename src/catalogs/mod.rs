pub mod cache;
pub mod gaia;
pub mod reduced;

use thiserror::Error;

use crate::units::{Distance, Position, Vec3};

/// A catalog entry placed in heliocentric equatorial space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Position,
    /// Luminosity in solar units
    pub luminosity: f64,
}

impl Body {
    /// Place a body from equatorial coordinates.
    ///
    /// # Arguments
    /// * `ra_deg` - right ascension in degrees
    /// * `dec_deg` - declination in degrees
    /// * `parallax_mas` - parallax in milliarcseconds; distance is `1000 / parallax` pc
    /// * `luminosity` - luminosity in solar units
    ///
    /// A zero parallax places the body at the origin. No epoch or
    /// precession correction is applied.
    pub fn from_equatorial(ra_deg: f64, dec_deg: f64, parallax_mas: f64, luminosity: f64) -> Self {
        let ra_rad = ra_deg.to_radians();
        let dec_rad = dec_deg.to_radians();
        let distance_pc = if parallax_mas != 0.0 {
            1000.0 / parallax_mas
        } else {
            0.0
        };

        let position = Vec3::new(
            Distance::from_pc(distance_pc * dec_rad.cos() * ra_rad.cos()),
            Distance::from_pc(distance_pc * dec_rad.cos() * ra_rad.sin()),
            Distance::from_pc(distance_pc * dec_rad.sin()),
        );

        Body {
            position,
            luminosity,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog stream: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: blank row")]
    BlankLine { line: u64 },
    #[error("line {line}: {field} is not a number: {value:?}")]
    Field {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("catalog cache: {0}")]
    Cache(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one numeric column of a CSV record
pub(crate) fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
) -> Result<T, CatalogError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let raw = record.get(index).ok_or(CatalogError::FieldCount {
        line,
        expected: index + 1,
        found: record.len(),
    })?;
    raw.parse().map_err(|_| CatalogError::Field {
        line,
        field,
        value: raw.to_string(),
    })
}

pub(crate) fn open_catalog(path: &std::path::Path) -> Result<std::fs::File, CatalogError> {
    std::fs::File::open(path).map_err(|source| CatalogError::Open {
        path: path.display().to_string(),
        source,
    })
}

/// Parse every data row of a catalog stream.
///
/// The first line is a header and is skipped without looking at its
/// contents. Each following line must hold exactly `width` fields. The csv
/// reader drops empty lines on its own, so a record that consumes more than
/// one line means a blank row (or a multi-line field) and fails the load.
/// A trailing empty line at the very end of the stream is tolerated.
pub(crate) fn read_rows<R, T, F>(
    reader: R,
    width: usize,
    mut parse: F,
) -> Result<Vec<T>, CatalogError>
where
    R: std::io::Read,
    F: FnMut(&csv::StringRecord) -> Result<T, CatalogError>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut record = csv::StringRecord::new();
    let mut rows = Vec::new();
    let mut header = true;

    loop {
        let start_line = rdr.position().line();
        if !rdr.read_record(&mut record)? {
            break;
        }
        if rdr.position().line() > start_line + 1 {
            return Err(CatalogError::BlankLine { line: start_line });
        }
        if header {
            header = false;
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(start_line);
        if record.len() != width {
            return Err(CatalogError::FieldCount {
                line,
                expected: width,
                found: record.len(),
            });
        }
        rows.push(parse(&record)?);
    }

    Ok(rows)
}

/// Report rows that collapse to the origin once per load
pub(crate) fn warn_degenerate(bodies: &[Body], source: &str) {
    let degenerate = bodies
        .iter()
        .filter(|b| b.position == Position::ZERO)
        .count();
    if degenerate > 0 {
        tracing::warn!(
            "{} of {} bodies from {} sit at the origin (zero parallax)",
            degenerate,
            bodies.len(),
            source
        );
    }
}
