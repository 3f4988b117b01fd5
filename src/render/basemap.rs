//! World basemap pieces: the plotted window, graticule lines and an optional
//! coastline overlay read from GeoJSON.

use geojson::{GeoJson, Value};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

use crate::error::{FloodTilesError, Result};

/// Longitude window of the world scatter
pub const WORLD_LON: Range<f64> = -180.0..180.0;

/// Latitude window of the world scatter. The poles are cut off as on a
/// Mercator world map.
pub const WORLD_LAT: Range<f64> = -80.0..80.0;

/// An open line of `(lon, lat)` vertices
pub type Polyline = Vec<(f64, f64)>;

/// Parallels and meridians every `step` degrees inside the world window
pub fn graticule(step: usize) -> Vec<Polyline> {
    let step = step.max(1);
    let mut lines = Vec::new();

    for lat in (-90..=90).step_by(step).map(|lat| lat as f64) {
        if (WORLD_LAT.start..=WORLD_LAT.end).contains(&lat) {
            lines.push(vec![(WORLD_LON.start, lat), (WORLD_LON.end, lat)]);
        }
    }
    for lon in (-180..=180).step_by(step).map(|lon| lon as f64) {
        lines.push(vec![(lon, WORLD_LAT.start), (lon, WORLD_LAT.end)]);
    }

    lines
}

/// Read coastline polylines from a GeoJSON file.
///
/// Lines come from LineString and MultiLineString geometries and from polygon
/// exterior rings; points are ignored.
pub fn load_coastlines(path: &Path) -> Result<Vec<Polyline>> {
    let content = std::fs::read_to_string(path).map_err(|e| FloodTilesError::io(path, e))?;
    let geojson: GeoJson = content.parse().map_err(|source| FloodTilesError::Geojson {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                if let Some(geometry) = feature.geometry {
                    collect_lines(&geometry.value, &mut lines);
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = feature.geometry {
                collect_lines(&geometry.value, &mut lines);
            }
        }
        GeoJson::Geometry(geometry) => collect_lines(&geometry.value, &mut lines),
    }

    debug!(path = %path.display(), lines = lines.len(), "Loaded coastlines");
    Ok(lines)
}

fn collect_lines(value: &Value, out: &mut Vec<Polyline>) {
    match value {
        Value::LineString(line) => out.push(to_polyline(line)),
        Value::MultiLineString(lines) => out.extend(lines.iter().map(|line| to_polyline(line))),
        Value::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                out.push(to_polyline(exterior));
            }
        }
        Value::MultiPolygon(polygons) => {
            for exterior in polygons.iter().filter_map(|rings| rings.first()) {
                out.push(to_polyline(exterior));
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_lines(&geometry.value, out);
            }
        }
        Value::Point(_) | Value::MultiPoint(_) => {}
    }
}

fn to_polyline(positions: &[Vec<f64>]) -> Polyline {
    positions
        .iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        })
        .collect()
}
