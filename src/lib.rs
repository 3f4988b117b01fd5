//! # floodtiles
//!
//! Plot flood-detection image tiles from their JSON catalog footprints.
//!
//! Every tile in a project has a PNG raster under `images/` and a catalog
//! sidecar under `catalog/` whose `geometry.coordinates[0]` ring describes its
//! geographic footprint.
//!
//! ## Key Features
//!
//! - **Footprint scatter**: every catalog boundary point on a world map
//! - **Region composites**: all tiles of one region placed at their own extents,
//!   framed by the union of those extents
//! - **Extent reports**: the same region aggregation as JSON, without drawing
//!
//! ## Architecture
//!
//! - **Catalog layer**: reads footprint rings and extents from catalog files
//! - **Region layer**: filters tiles by region prefix and folds their extents
//! - **Render layer**: a [`render::PlotSurface`] that receives scatter points
//!   or tile placements plus final limits

pub mod catalog;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod extent;
pub mod logging;
pub mod region;
pub mod render;

pub use catalog::{load_all_coordinates, read_extent, TileCoordinates};
pub use config::{Command, Config, Invocation};
pub use error::{FloodTilesError, Result};
pub use extent::{BoundingBox, Extent};
pub use logging::{
    generate_run_id, init_tracing, log_catalog_load_stats, log_error, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use region::{aggregate_region, list_regions, render_region, RegionComposite, TileName};
pub use render::{plot_coordinates, PlotSurface, PngSurface, RenderOptions};
