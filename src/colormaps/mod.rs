//! Colormap implementations for single-channel tiles.
//!
//! This module provides matplotlib-inspired colormaps for false-colouring
//! grayscale rasters before they are placed on the plot.

pub mod colormap;
pub mod sequential;

pub use colormap::{get_colormap, lerp_color, Colormap, COLORMAP_NAMES};

// Re-export commonly used colormaps
pub use sequential::{Gray, Viridis};
