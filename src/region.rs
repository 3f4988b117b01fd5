//! Region selection and extent aggregation.
//!
//! Image tiles are named `{region}_{id}.png` and each has a catalog sidecar
//! `{region}_{id}_label.json`. A region composite places every tile of one
//! region at its own footprint extent and frames the plot with the union of
//! those extents.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::read_extent;
use crate::error::{FloodTilesError, Result};
use crate::extent::{BoundingBox, Extent};
use crate::render::PlotSurface;

/// Subdirectory holding the PNG tiles
pub const IMAGES_DIR: &str = "images";

/// Subdirectory holding the per-tile catalog records
pub const CATALOG_DIR: &str = "catalog";

/// Only tiles with exactly this extension take part in a composite
pub const TILE_EXTENSION: &str = "png";

/// Suffix appended to a tile stem to name its catalog record
pub const CATALOG_SUFFIX: &str = "_label.json";

/// The parts of a tile filename used for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileName {
    /// Text before the first underscore
    pub region: String,
    /// Filename without its final `.extension`
    pub stem: String,
    /// Text after the last period
    pub extension: String,
}

impl TileName {
    /// Split a filename into region, stem and extension.
    ///
    /// Returns `None` when the name has no underscore or no period.
    pub fn parse(file_name: &str) -> Option<Self> {
        let (region, _) = file_name.split_once('_')?;
        let (stem, extension) = file_name.rsplit_once('.')?;
        Some(Self {
            region: region.to_string(),
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn is_tile_image(&self) -> bool {
        self.extension == TILE_EXTENSION
    }

    /// Case-sensitive whole-token match of the region prefix, PNG only
    pub fn matches(&self, region: &str) -> bool {
        self.is_tile_image() && self.region == region
    }
}

/// Catalog record path for a tile stem
pub fn catalog_path_for(catalog_dir: &Path, stem: &str) -> PathBuf {
    catalog_dir.join(format!("{}{}", stem, CATALOG_SUFFIX))
}

/// One tile to draw, at its own extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilePlacement {
    pub image: PathBuf,
    pub catalog: PathBuf,
    pub extent: Extent,
}

/// Every placement of one region plus the envelope of all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionComposite {
    pub region: String,
    pub placements: Vec<TilePlacement>,
    pub bounds: Extent,
}

/// Sorted `(file name, path)` pairs of the regular files in `images_dir`
fn list_image_files(images_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(images_dir).map_err(|e| FloodTilesError::io(images_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FloodTilesError::io(images_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Non UTF-8 names cannot carry a region prefix we could match
        if let Some(name) = entry.file_name().to_str() {
            files.push((name.to_string(), path));
        }
    }
    files.sort();

    Ok(files)
}

/// Walk the tiles of `region_name`, folding their extents and handing each
/// placement to `on_tile` as soon as its extent is known.
fn fold_region_tiles<F>(region_name: &str, project_dir: &Path, mut on_tile: F) -> Result<Extent>
where
    F: FnMut(&TilePlacement) -> Result<()>,
{
    let images_dir = project_dir.join(IMAGES_DIR);
    let catalog_dir = project_dir.join(CATALOG_DIR);

    if !catalog_dir.is_dir() {
        return Err(FloodTilesError::MissingDirectory { path: catalog_dir });
    }

    let mut bbox = BoundingBox::new();
    for (name, image) in list_image_files(&images_dir)? {
        let tile = match TileName::parse(&name) {
            Some(tile) if tile.matches(region_name) => tile,
            _ => continue,
        };

        let catalog = catalog_path_for(&catalog_dir, &tile.stem);
        if !catalog.is_file() {
            return Err(FloodTilesError::MissingCatalog { image, catalog });
        }

        let extent = read_extent(&catalog)?;
        bbox.include(extent);
        debug!(
            region = region_name,
            tile = %name,
            left = extent.left,
            right = extent.right,
            bottom = extent.bottom,
            top = extent.top,
            "Matched tile"
        );

        on_tile(&TilePlacement {
            image,
            catalog,
            extent,
        })?;
    }

    let bounds = bbox.extent().ok_or_else(|| FloodTilesError::NoTilesForRegion {
        region: region_name.to_string(),
        images_dir: images_dir.clone(),
    })?;

    info!(
        region = region_name,
        tiles = bbox.count(),
        left = bounds.left,
        right = bounds.right,
        bottom = bounds.bottom,
        top = bounds.top,
        "Aggregated region extent"
    );

    Ok(bounds)
}

/// Collect the placements and global bounds of one region without drawing
pub fn aggregate_region(region_name: &str, project_dir: &Path) -> Result<RegionComposite> {
    let mut placements = Vec::new();
    let bounds = fold_region_tiles(region_name, project_dir, |placement| {
        placements.push(placement.clone());
        Ok(())
    })?;

    Ok(RegionComposite {
        region: region_name.to_string(),
        placements,
        bounds,
    })
}

/// Composite every tile of `region_name` onto `surface`.
///
/// Each tile is placed at its own extent as it is found; the axis limits are
/// set to the union of all extents once the directory has been walked.
/// Returns the union.
pub fn render_region(
    region_name: &str,
    project_dir: &Path,
    surface: &mut dyn PlotSurface,
) -> Result<Extent> {
    let bounds = fold_region_tiles(region_name, project_dir, |placement| {
        surface.place_image(&placement.image, placement.extent)
    })?;
    surface.show(bounds)?;

    Ok(bounds)
}

/// Count PNG tiles per region prefix in the project's images directory
pub fn list_regions(project_dir: &Path) -> Result<BTreeMap<String, usize>> {
    let images_dir = project_dir.join(IMAGES_DIR);
    let mut regions = BTreeMap::new();

    for (name, _) in list_image_files(&images_dir)? {
        if let Some(tile) = TileName::parse(&name).filter(TileName::is_tile_image) {
            *regions.entry(tile.region).or_insert(0) += 1;
        }
    }

    Ok(regions)
}
