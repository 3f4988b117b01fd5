//! floodtiles - plot flood-detection tiles from their catalog footprints
//!
//! This is the main entry point for the floodtiles command-line tool.

use std::path::Path;
use std::time::Instant;
use tracing::{error, info, warn};

use floodtiles::region::CATALOG_DIR;
use floodtiles::{
    aggregate_region, init_tracing, list_regions, load_all_coordinates, log_error,
    log_operation_end, log_operation_start, log_timed_operation, plot_coordinates, render_region,
    Command, Config, FloodTilesError, PngSurface, Result,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, invocation) = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_tracing(&config.log_level);
    info!("Starting floodtiles v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let project_dir = invocation.project_dir.as_path();
    let result = match &invocation.command {
        Command::Scatter => run_scatter(&config, project_dir),
        Command::Region { name } => run_region(&config, project_dir, name),
        Command::Extent { name } => run_extent(project_dir, name),
    };

    if let Err(e) = &result {
        log_error(e, &format!("{:?}", invocation.command));
        if let FloodTilesError::NoTilesForRegion { .. } = e {
            hint_known_regions(project_dir);
        }
    }

    result
}

/// Scatter all catalog footprint points on the world map
fn run_scatter(config: &Config, project_dir: &Path) -> Result<()> {
    let start = Instant::now();
    let catalog_dir = project_dir.join(CATALOG_DIR);
    log_operation_start("scatter", Some(&catalog_dir.display().to_string()));

    let result = log_timed_operation("scatter", || {
        let tiles = load_all_coordinates(&catalog_dir)?;
        let mut surface = PngSurface::new(&config.output, config.render_options())?;
        plot_coordinates(&tiles, &mut surface)
    });

    log_operation_end("scatter", start, result.is_ok());
    let points = result?;
    info!(
        points = points,
        output = %config.output.display(),
        "Scatter written"
    );
    Ok(())
}

/// Composite the tiles of one region
fn run_region(config: &Config, project_dir: &Path, region: &str) -> Result<()> {
    let start = Instant::now();
    log_operation_start("region", Some(region));

    let result = log_timed_operation("region", || {
        let mut surface = PngSurface::new(&config.output, config.render_options())?;
        render_region(region, project_dir, &mut surface)
    });

    log_operation_end("region", start, result.is_ok());
    let bounds = result?;
    info!(
        region = region,
        left = bounds.left,
        right = bounds.right,
        bottom = bounds.bottom,
        top = bounds.top,
        output = %config.output.display(),
        "Composite written"
    );
    Ok(())
}

/// Print one region's placements and global extent
fn run_extent(project_dir: &Path, region: &str) -> Result<()> {
    let composite = log_timed_operation("extent", || aggregate_region(region, project_dir))?;
    let json = serde_json::to_string_pretty(&composite)?;
    println!("{}", json);
    Ok(())
}

/// Log the regions that do exist after an empty selection
fn hint_known_regions(project_dir: &Path) {
    match list_regions(project_dir) {
        Ok(regions) if !regions.is_empty() => {
            let known: Vec<String> = regions
                .iter()
                .map(|(name, count)| format!("{} ({})", name, count))
                .collect();
            warn!("Known regions: {}", known.join(", "));
        }
        Ok(_) => warn!("No PNG tiles found in the images directory"),
        Err(e) => warn!("Could not list regions: {}", e),
    }
}
