//! Rendering of catalog footprints and region composites.
//!
//! The core only ever hands a surface scatter points, or image placements
//! followed by final axis limits. [`PngSurface`] draws those with plotters.

pub mod basemap;
pub mod png;

use std::path::Path;

use crate::catalog::TileCoordinates;
use crate::error::Result;
use crate::extent::Extent;

pub use basemap::{graticule, load_coastlines, Polyline, WORLD_LAT, WORLD_LON};
pub use png::{PngSurface, RenderOptions};

/// A plot that footprints and tiles can be drawn onto.
pub trait PlotSurface {
    /// Draw `(lon, lat)` points over the world basemap and finish the figure
    fn scatter_world(&mut self, points: &[(f64, f64)]) -> Result<()>;

    /// Queue an image tile at its own extent. The image is decoded here so a
    /// bad tile fails before any limits are set.
    fn place_image(&mut self, image: &Path, extent: Extent) -> Result<()>;

    /// Set the axis limits and finish the composite
    fn show(&mut self, limits: Extent) -> Result<()>;
}

/// Scatter every footprint point of `tiles` on the world map
pub fn plot_coordinates(tiles: &[TileCoordinates], surface: &mut dyn PlotSurface) -> Result<usize> {
    let points: Vec<(f64, f64)> = tiles.iter().flat_map(TileCoordinates::points).collect();
    surface.scatter_world(&points)?;
    Ok(points.len())
}
