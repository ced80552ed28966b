//! Binary body cache.
//!
//! Parsing a quarter-million CSV rows dominates start-up, so a loaded body
//! list can be written once as an rkyv archive and read back directly.
//! Positions are stored as raw megameter counts, so a round trip through
//! the cache is exact.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rkyv::{Archive, Deserialize, Serialize};

use super::{open_catalog, Body, CatalogError};
use crate::units::{Distance, Vec3};

#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CachedBody {
    pub position_mm: [i64; 3],
    pub luminosity: f64,
}

impl From<&Body> for CachedBody {
    fn from(body: &Body) -> Self {
        CachedBody {
            position_mm: body.position.as_mm(),
            luminosity: body.luminosity,
        }
    }
}

impl From<&CachedBody> for Body {
    fn from(cached: &CachedBody) -> Self {
        let [x, y, z] = cached.position_mm;
        Body {
            position: Vec3::new(Distance::from_mm(x), Distance::from_mm(y), Distance::from_mm(z)),
            luminosity: cached.luminosity,
        }
    }
}

pub fn encode_bodies(bodies: &[Body]) -> Result<Vec<u8>, CatalogError> {
    let cached: Vec<CachedBody> = bodies.iter().map(CachedBody::from).collect();
    let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&cached)
        .map_err(|e| CatalogError::Cache(format!("failed to serialize bodies: {}", e)))?;
    Ok(bytes.to_vec())
}

pub fn decode_bodies(bytes: &[u8]) -> Result<Vec<Body>, CatalogError> {
    // archived data must be aligned, which a plain byte buffer does not guarantee
    let mut aligned = rkyv::util::AlignedVec::<16>::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let cached = rkyv::from_bytes::<Vec<CachedBody>, rkyv::rancor::Error>(&aligned)
        .map_err(|e| CatalogError::Cache(format!("failed to deserialize bodies: {}", e)))?;
    Ok(cached.iter().map(Body::from).collect())
}

pub fn write_cache<P: AsRef<Path>>(path: P, bodies: &[Body]) -> Result<(), CatalogError> {
    let bytes = encode_bodies(bodies)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(&bytes)?;
    tracing::info!(
        "wrote {} bodies ({} bytes) to {}",
        bodies.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn read_cache<P: AsRef<Path>>(path: P) -> Result<Vec<Body>, CatalogError> {
    let mut file = open_catalog(path.as_ref())?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let bodies = decode_bodies(&buffer)?;
    tracing::info!(
        "loaded {} bodies from cache {}",
        bodies.len(),
        path.as_ref().display()
    );
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_is_exact() {
        let bodies = vec![
            Body::from_equatorial(217.39, -62.68, 768.07, 0.0017),
            Body::from_equatorial(0.0, 0.0, 1000.0, 1.0),
            Body::from_equatorial(10.0, 20.0, 0.0, 5.0),
        ];
        let dir = tempfile::tempdir().expect("creating temp dir");
        let path = dir.path().join("bodies.rkyv");

        write_cache(&path, &bodies).expect("writing cache");
        let back = read_cache(&path).expect("reading cache");
        assert_eq!(back, bodies);
    }

    #[test]
    fn test_empty_list() {
        let bytes = encode_bodies(&[]).expect("encoding");
        assert!(decode_bodies(&bytes).expect("decoding").is_empty());
    }

    #[test]
    fn test_garbage_is_a_load_failure() {
        let garbage = [0xffu8; 7];
        assert!(matches!(
            decode_bodies(&garbage),
            Err(CatalogError::Cache(_))
        ));
    }
}
