//! Catalog loading functionality.
//!
//! Each image tile has a JSON sidecar (a GeoJSON-like Feature) whose
//! `geometry.coordinates[0]` is the outer ring of the tile footprint. This
//! module reads those rings, either for every catalog in a directory or for a
//! single tile's extent.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{FloodTilesError, Result};
use crate::extent::Extent;
use crate::logging::log_catalog_load_stats;

/// File extension of catalog records
pub const CATALOG_EXTENSION: &str = "json";

/// The subset of a catalog record we read.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    geometry: Option<CatalogGeometry>,
}

#[derive(Debug, Deserialize)]
struct CatalogGeometry {
    /// Polygon rings; each position is `[lon, lat, ...]`
    #[serde(default)]
    coordinates: Option<Vec<Vec<Vec<f64>>>>,
}

/// Footprint coordinates of one catalog file, split by axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileCoordinates {
    /// Catalog file stem
    pub id: String,
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
}

impl TileCoordinates {
    fn from_ring(id: String, ring: &[(f64, f64)]) -> Self {
        let (longitudes, latitudes) = ring.iter().copied().unzip();
        Self {
            id,
            longitudes,
            latitudes,
        }
    }

    /// `(lon, lat)` pairs in ring order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.longitudes
            .iter()
            .copied()
            .zip(self.latitudes.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }
}

/// List the `*.json` files of a catalog directory, sorted by file name
pub fn list_catalog_files(catalog_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(catalog_dir).map_err(|e| FloodTilesError::io(catalog_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FloodTilesError::io(catalog_dir, e))?.path();
        let is_catalog = path.is_file()
            && path
                .extension()
                .map_or(false, |ext| ext == CATALOG_EXTENSION);
        if is_catalog {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Read the outer footprint ring of one catalog file as `(lon, lat)` pairs
pub fn read_ring(path: &Path) -> Result<Vec<(f64, f64)>> {
    let content = std::fs::read_to_string(path).map_err(|e| FloodTilesError::io(path, e))?;
    let record: CatalogRecord =
        serde_json::from_str(&content).map_err(|source| FloodTilesError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let missing = |message: &str| FloodTilesError::MissingGeometry {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    let rings = record
        .geometry
        .ok_or_else(|| missing("no 'geometry' member"))?
        .coordinates
        .ok_or_else(|| missing("no 'geometry.coordinates' member"))?;
    let ring = rings
        .into_iter()
        .next()
        .ok_or_else(|| missing("'geometry.coordinates' has no rings"))?;

    ring.into_iter()
        .enumerate()
        .map(|(i, position)| match position.as_slice() {
            [lon, lat, ..] => Ok((*lon, *lat)),
            _ => Err(FloodTilesError::InvalidCoordinates {
                path: path.to_path_buf(),
                message: format!(
                    "position {} has {} value(s), expected at least [lon, lat]",
                    i,
                    position.len()
                ),
            }),
        })
        .collect()
}

/// Load the footprint coordinates of every catalog file in `catalog_dir`.
///
/// One bad file aborts the whole load.
pub fn load_all_coordinates(catalog_dir: &Path) -> Result<Vec<TileCoordinates>> {
    let files = list_catalog_files(catalog_dir)?;
    debug!(
        catalog_dir = %catalog_dir.display(),
        file_count = files.len(),
        "Found catalog files"
    );

    let mut tiles = Vec::with_capacity(files.len());
    for path in &files {
        let ring = read_ring(path)?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(catalog = %path.display(), points = ring.len(), "Read catalog ring");
        tiles.push(TileCoordinates::from_ring(id, &ring));
    }

    let point_count: usize = tiles.iter().map(TileCoordinates::len).sum();
    log_catalog_load_stats(&catalog_dir.display().to_string(), tiles.len(), point_count);

    Ok(tiles)
}

/// Read one catalog file and return its footprint extent
pub fn read_extent(catalog_file: &Path) -> Result<Extent> {
    let ring = read_ring(catalog_file)?;
    Extent::from_points(ring).ok_or_else(|| FloodTilesError::EmptyRing {
        path: catalog_file.to_path_buf(),
    })
}
