//! Colormap trait and utilities.
//!
//! This module defines the common interface for all colormaps.

use crate::error::{FloodTilesError, Result};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Names accepted by [`get_colormap`]
pub const COLORMAP_NAMES: &[&str] = &["viridis", "gray", "grey"];

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    use super::sequential::*;

    match name.to_lowercase().as_str() {
        "viridis" => Ok(Box::new(Viridis::new())),
        "gray" | "grey" => Ok(Box::new(Gray)),
        _ => Err(FloodTilesError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!(
                "Unknown colormap: {}. Must be one of: {}",
                name,
                COLORMAP_NAMES.join(", ")
            ),
        }),
    }
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    [
        (c1[0] as f32 * (1.0 - t) + c2[0] as f32 * t) as u8,
        (c1[1] as f32 * (1.0 - t) + c2[1] as f32 * t) as u8,
        (c1[2] as f32 * (1.0 - t) + c2[2] as f32 * t) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];

        let mid = lerp_color(black, white, 0.5);
        assert_eq!(mid[0], 127);
        assert_eq!(mid[1], 127);
        assert_eq!(mid[2], 127);
    }

    #[test]
    fn test_get_colormap() {
        assert_eq!(get_colormap("viridis").unwrap().name(), "viridis");
        assert_eq!(get_colormap("Viridis").unwrap().name(), "viridis");
        assert_eq!(get_colormap("grey").unwrap().name(), "gray");
        assert!(get_colormap("jet").is_err());
    }

    #[test]
    fn test_map_flat_range_uses_midpoint() {
        let gray = get_colormap("gray").unwrap();
        assert_eq!(gray.map(3.0, 3.0, 3.0), gray.map_normalized(0.5));
    }
}
