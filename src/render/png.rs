//! PNG figure output through the plotters bitmap backend.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageBuffer, RgbaImage};
use plotters::element::BitMapElement;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::basemap::{graticule, load_coastlines, Polyline, WORLD_LAT, WORLD_LON};
use super::PlotSurface;
use crate::colormaps::{get_colormap, Colormap};
use crate::error::{FloodTilesError, Result};
use crate::extent::Extent;

/// Default figure size in pixels
pub const DEFAULT_WIDTH: u32 = 1500;
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Default colormap for single-channel tiles
pub const DEFAULT_COLORMAP: &str = "viridis";

/// Default scatter marker radius in pixels
pub const DEFAULT_MARKER_SIZE: u32 = 3;

/// Graticule spacing in degrees
const GRATICULE_STEP: usize = 10;

/// Padding applied to zero-area axis limits, in degrees
const DEGENERATE_PAD: f64 = 1e-6;

const OCEAN: RGBColor = RGBColor(18, 44, 86);

/// Drawing options for [`PngSurface`]
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
    pub colormap: String,
    pub coastlines: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            marker_size: DEFAULT_MARKER_SIZE,
            colormap: DEFAULT_COLORMAP.to_string(),
            coastlines: None,
        }
    }
}

struct QueuedTile {
    image: DynamicImage,
    extent: Extent,
}

/// Plot surface that writes each finished figure to a PNG file.
pub struct PngSurface {
    output: PathBuf,
    options: RenderOptions,
    colormap: Box<dyn Colormap>,
    coastlines: Vec<Polyline>,
    queued: Vec<QueuedTile>,
}

impl PngSurface {
    pub fn new(output: impl Into<PathBuf>, options: RenderOptions) -> Result<Self> {
        let colormap = get_colormap(&options.colormap)?;
        let coastlines = match &options.coastlines {
            Some(path) => load_coastlines(path)?,
            None => Vec::new(),
        };

        Ok(Self {
            output: output.into(),
            options,
            colormap,
            coastlines,
            queued: Vec::new(),
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of tiles waiting for [`PlotSurface::show`]
    pub fn queued_tiles(&self) -> usize {
        self.queued.len()
    }

    fn ensure_output_dir(&self) -> Result<()> {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| FloodTilesError::io(parent, e))
            }
            _ => Ok(()),
        }
    }
}

impl PlotSurface for PngSurface {
    fn scatter_world(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.ensure_output_dir()?;
        let size = (self.options.width, self.options.height);
        let root = BitMapBackend::new(&self.output, size).into_drawing_area();
        root.fill(&OCEAN).map_err(FloodTilesError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(WORLD_LON, WORLD_LAT)
            .map_err(FloodTilesError::render)?;

        let grid_style = WHITE.mix(0.4).stroke_width(1);
        for line in graticule(GRATICULE_STEP) {
            chart
                .draw_series(LineSeries::new(line, grid_style))
                .map_err(FloodTilesError::render)?;
        }
        for line in &self.coastlines {
            chart
                .draw_series(LineSeries::new(line.iter().copied(), WHITE.stroke_width(1)))
                .map_err(FloodTilesError::render)?;
        }

        let visible: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(lon, lat)| {
                (WORLD_LON.start..=WORLD_LON.end).contains(lon)
                    && (WORLD_LAT.start..=WORLD_LAT.end).contains(lat)
            })
            .collect();
        let marker = self.options.marker_size;
        chart
            .draw_series(
                visible
                    .iter()
                    .map(|&point| Circle::new(point, marker, RED.filled())),
            )
            .map_err(FloodTilesError::render)?;

        root.present().map_err(FloodTilesError::render)?;
        info!(
            output = %self.output.display(),
            points = points.len(),
            drawn = visible.len(),
            "Wrote coordinate scatter"
        );
        Ok(())
    }

    fn place_image(&mut self, image: &Path, extent: Extent) -> Result<()> {
        let decoded = image::open(image).map_err(|source| FloodTilesError::ImageDecode {
            path: image.to_path_buf(),
            source,
        })?;
        debug!(
            image = %image.display(),
            width = decoded.width(),
            height = decoded.height(),
            "Queued tile"
        );

        self.queued.push(QueuedTile {
            image: apply_colormap(decoded, self.colormap.as_ref()),
            extent,
        });
        Ok(())
    }

    fn show(&mut self, limits: Extent) -> Result<()> {
        self.ensure_output_dir()?;
        let limits = limits.padded_if_degenerate(DEGENERATE_PAD);
        let size = (self.options.width, self.options.height);
        let root = BitMapBackend::new(&self.output, size).into_drawing_area();
        root.fill(&WHITE).map_err(FloodTilesError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(limits.left..limits.right, limits.bottom..limits.top)
            .map_err(FloodTilesError::render)?;

        let tile_count = self.queued.len();
        for tile in self.queued.drain(..) {
            let extent = tile.extent;
            let (x0, y0) = chart.backend_coord(&(extent.left, extent.top));
            let (x1, y1) = chart.backend_coord(&(extent.right, extent.bottom));
            let width = (x1 - x0).max(1) as u32;
            let height = (y1 - y0).max(1) as u32;

            let resized = tile.image.resize_exact(width, height, FilterType::Triangle);
            chart
                .draw_series(std::iter::once(BitMapElement::from((
                    (extent.left, extent.top),
                    resized,
                ))))
                .map_err(FloodTilesError::render)?;
        }

        root.present().map_err(FloodTilesError::render)?;
        info!(
            output = %self.output.display(),
            tiles = tile_count,
            left = limits.left,
            right = limits.right,
            bottom = limits.bottom,
            top = limits.top,
            "Wrote region composite"
        );
        Ok(())
    }
}

/// False-colour single-channel tiles, stretching their value range across
/// the colormap. Colour tiles are returned unchanged.
pub fn apply_colormap(image: DynamicImage, colormap: &dyn Colormap) -> DynamicImage {
    let single_channel = matches!(
        image,
        DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
    );
    if !single_channel {
        return image;
    }

    let luma = image.to_luma32f();
    let mut min_val = f32::INFINITY;
    let mut max_val = f32::NEG_INFINITY;
    for &val in luma.iter() {
        if val.is_finite() {
            min_val = min_val.min(val);
            max_val = max_val.max(val);
        }
    }

    let mut colored: RgbaImage = ImageBuffer::new(luma.width(), luma.height());
    for (x, y, pixel) in luma.enumerate_pixels() {
        colored.put_pixel(x, y, image::Rgba(colormap.map(pixel[0], min_val, max_val)));
    }

    DynamicImage::ImageRgba8(colored)
}
