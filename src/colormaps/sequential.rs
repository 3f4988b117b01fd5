//! Sequential colormaps (single-hue progression).
//!
//! Used to false-colour single-channel tiles, low to high.

use super::colormap::{lerp_color, Colormap};

/// Number of entries sampled from a gradient
const LUT_SIZE: usize = 256;

/// Viridis colormap - perceptually uniform, colorblind-friendly
pub struct Viridis {
    lut: Vec<[u8; 4]>,
}

impl Viridis {
    pub fn new() -> Self {
        let lut = colorgrad::viridis()
            .colors(LUT_SIZE)
            .iter()
            .map(|color| color.to_rgba8())
            .collect();
        Self { lut }
    }
}

impl Default for Viridis {
    fn default() -> Self {
        Self::new()
    }
}

impl Colormap for Viridis {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let index = (value.clamp(0.0, 1.0) * (self.lut.len() - 1) as f32).round() as usize;
        self.lut[index]
    }

    fn name(&self) -> &str {
        "viridis"
    }
}

/// Gray colormap - black to white
pub struct Gray;

impl Colormap for Gray {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let rgb = lerp_color([0, 0, 0], [255, 255, 255], value.clamp(0.0, 1.0));
        [rgb[0], rgb[1], rgb[2], 255]
    }

    fn name(&self) -> &str {
        "gray"
    }
}
