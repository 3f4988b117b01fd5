//! Configuration management for floodtiles.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colormaps::COLORMAP_NAMES;
use crate::error::{FloodTilesError, Result};
use crate::render::png::{DEFAULT_COLORMAP, DEFAULT_HEIGHT, DEFAULT_MARKER_SIZE, DEFAULT_WIDTH};
use crate::render::RenderOptions;

/// Command-line arguments for floodtiles
#[derive(Parser, Debug)]
#[command(name = "floodtiles")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory containing `catalog/` and `images/`
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,

    /// Path of the PNG figure to write
    #[arg(short, long, env = "FLOODTILES_OUTPUT", global = true)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, env = "FLOODTILES_WIDTH", global = true)]
    pub width: Option<u32>,

    /// Figure height in pixels
    #[arg(long, env = "FLOODTILES_HEIGHT", global = true)]
    pub height: Option<u32>,

    /// Colormap for single-channel tiles (viridis, gray)
    #[arg(long, env = "FLOODTILES_COLORMAP", global = true)]
    pub colormap: Option<String>,

    /// Scatter marker radius in pixels
    #[arg(long, env = "FLOODTILES_MARKER_SIZE", global = true)]
    pub marker_size: Option<u32>,

    /// GeoJSON file with coastlines to draw under the scatter
    #[arg(long, env = "FLOODTILES_COASTLINES", global = true)]
    pub coastlines: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "FLOODTILES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FLOODTILES_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

/// What to plot
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scatter every catalog footprint point on a world map
    Scatter,
    /// Composite the image tiles of one region at their footprint extents
    Region {
        /// Region name, matched case-sensitively against the tile filename prefix
        name: String,
    },
    /// Print the placements and global extent of one region as JSON
    Extent {
        /// Region name, matched case-sensitively against the tile filename prefix
        name: String,
    },
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Figure width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Figure height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Colormap for single-channel tiles
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Scatter marker radius in pixels
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,

    /// Optional GeoJSON coastline overlay
    #[serde(default)]
    pub coastlines: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Where the figure is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// The project and subcommand a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub project_dir: PathBuf,
    pub command: Command,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Invocation)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, Invocation)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(output) = args.output {
            config.output = output;
        }
        if let Some(width) = args.width {
            config.render.width = width;
        }
        if let Some(height) = args.height {
            config.render.height = height;
        }
        if let Some(colormap) = args.colormap {
            config.render.colormap = colormap;
        }
        if let Some(marker_size) = args.marker_size {
            config.render.marker_size = marker_size;
        }
        if args.coastlines.is_some() {
            config.render.coastlines = args.coastlines;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        let invocation = Invocation {
            project_dir: args.project_dir,
            command: args.command,
        };

        Ok((config, invocation))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FloodTilesError::io(path, e))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| FloodTilesError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.render.coastlines.is_none() {
            let coastlines = self.render.coastlines.take();
            self.render = RenderConfig {
                coastlines,
                ..other.render
            };
        } else {
            self.render = other.render;
        }
        self.output = other.output;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.render.width == 0 || self.render.height == 0 {
            return Err(FloodTilesError::Config {
                message: format!(
                    "Figure size must be positive, got {}x{}",
                    self.render.width, self.render.height
                ),
            });
        }

        if self.render.marker_size == 0 {
            return Err(FloodTilesError::Config {
                message: "Marker size cannot be 0".to_string(),
            });
        }

        if !COLORMAP_NAMES.contains(&self.render.colormap.to_lowercase().as_str()) {
            return Err(FloodTilesError::Config {
                message: format!(
                    "Invalid colormap: {}. Must be one of: {}",
                    self.render.colormap,
                    COLORMAP_NAMES.join(", ")
                ),
            });
        }

        if let Some(coastlines) = &self.render.coastlines {
            if !coastlines.is_file() {
                return Err(FloodTilesError::Config {
                    message: format!("Coastline file not found: {}", coastlines.display()),
                });
            }
        }

        if self.output.as_os_str().is_empty() {
            return Err(FloodTilesError::Config {
                message: "Output path cannot be empty".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(FloodTilesError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }

    /// Drawing options for the PNG surface
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            marker_size: self.render.marker_size,
            colormap: self.render.colormap.clone(),
            coastlines: self.render.coastlines.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            output: default_output(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            colormap: default_colormap(),
            marker_size: default_marker_size(),
            coastlines: None,
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_colormap() -> String {
    DEFAULT_COLORMAP.to_string()
}

fn default_marker_size() -> u32 {
    DEFAULT_MARKER_SIZE
}

fn default_output() -> PathBuf {
    PathBuf::from("floodtiles.png")
}

fn default_log_level() -> String {
    "info".to_string()
}
