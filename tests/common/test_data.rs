//! Test data generation utilities.
//!
//! This module builds project directories with `images/` and `catalog/`
//! subdirectories holding tiles and footprint records with known extents.

use floodtiles::region::{catalog_path_for, CATALOG_DIR, IMAGES_DIR};
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::image_utils::{write_gray_ramp_tile, write_rgb_tile};

/// Side length of generated tiles in pixels
pub const TILE_SIZE: u32 = 16;

/// A temporary project directory.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Creates an empty project with both subdirectories
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(dir.path().join(IMAGES_DIR)).expect("create images dir");
        std::fs::create_dir(dir.path().join(CATALOG_DIR)).expect("create catalog dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn images_dir(&self) -> PathBuf {
        self.path().join(IMAGES_DIR)
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.path().join(CATALOG_DIR)
    }

    /// Writes a catalog record for `stem` whose outer ring is `ring`
    pub fn add_catalog(&self, stem: &str, ring: &[[f64; 2]]) -> PathBuf {
        let path = catalog_path_for(&self.catalog_dir(), stem);
        let record = json!({
            "type": "Feature",
            "id": stem,
            "properties": { "flooded": true },
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
        });
        std::fs::write(&path, record.to_string()).expect("write catalog");
        path
    }

    /// Writes a solid RGB tile `{stem}.png` and its rectangular catalog
    pub fn add_rgb_tile(
        &self,
        stem: &str,
        (left, right, bottom, top): (f64, f64, f64, f64),
        color: [u8; 3],
    ) -> PathBuf {
        let image = self.images_dir().join(format!("{}.png", stem));
        write_rgb_tile(&image, TILE_SIZE, color).expect("write tile");
        self.add_catalog(stem, &rectangle(left, right, bottom, top));
        image
    }

    /// Writes a single-channel tile `{stem}.png` and its rectangular catalog
    pub fn add_gray_tile(&self, stem: &str, (left, right, bottom, top): (f64, f64, f64, f64)) -> PathBuf {
        let image = self.images_dir().join(format!("{}.png", stem));
        write_gray_ramp_tile(&image, TILE_SIZE).expect("write tile");
        self.add_catalog(stem, &rectangle(left, right, bottom, top));
        image
    }

    /// Writes an arbitrary file into `images/`
    pub fn add_image_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.images_dir().join(name);
        std::fs::write(&path, bytes).expect("write image file");
        path
    }
}

/// Closed ring around a rectangle, counter-clockwise from the south-west corner
pub fn rectangle(left: f64, right: f64, bottom: f64, top: f64) -> Vec<[f64; 2]> {
    vec![
        [left, bottom],
        [right, bottom],
        [right, top],
        [left, top],
        [left, bottom],
    ]
}
