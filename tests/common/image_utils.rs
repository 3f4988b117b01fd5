//! Image helpers for testing.
//!
//! This module provides functions for writing tile fixtures and checking
//! rendered figures.

use image::{DynamicImage, GenericImageView, GrayImage, ImageError, Luma, Rgb, RgbImage};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Write a solid RGB tile
pub fn write_rgb_tile(path: &Path, size: u32, color: [u8; 3]) -> Result<(), ImageError> {
    RgbImage::from_pixel(size, size, Rgb(color)).save(path)
}

/// Write a single-channel tile with a left-to-right ramp
pub fn write_gray_ramp_tile(path: &Path, size: u32) -> Result<(), ImageError> {
    let step = 255 / size.max(2).saturating_sub(1);
    GrayImage::from_fn(size, size, |x, _| Luma([(x * step).min(255) as u8])).save(path)
}

/// Check if an image has the expected dimensions
///
/// # Returns
///
/// * `Ok(())` if the image has the expected dimensions
/// * `Err(String)` with an error message if the dimensions differ
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Count pixels close to `color` within `max_diff` per channel
pub fn count_pixels_near(image: &DynamicImage, color: [u8; 3], max_diff: u8) -> usize {
    image
        .to_rgb8()
        .pixels()
        .filter(|pixel| {
            pixel
                .0
                .iter()
                .zip(color.iter())
                .all(|(a, e)| (*a as i16 - *e as i16).unsigned_abs() <= max_diff as u16)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_image_dimensions() {
        let img = DynamicImage::new_rgb8(10, 20);

        assert!(assert_image_dimensions(&img, 10, 20).is_ok());
        assert!(assert_image_dimensions(&img, 11, 20).is_err());
        assert!(assert_image_dimensions(&img, 10, 21).is_err());
    }

    #[test]
    fn test_count_pixels_near() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([10, 20, 30])));
        assert_eq!(count_pixels_near(&img, [10, 20, 30], 0), 9);
        assert_eq!(count_pixels_near(&img, [12, 20, 30], 1), 0);
    }
}
