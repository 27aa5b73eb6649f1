use image::RgbaImage;

use crate::core::processing::resize::resize_rgba;
use crate::core::processing::square::center_crop_square;
use crate::error::{Error, Result};

/// Normalize one quadrant into an output tile: center-crop to a square, then
/// resample to `size` x `size`.
pub fn to_square_and_resize(img: &RgbaImage, size: u32) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::DegenerateImage { width, height });
    }

    let square = center_crop_square(img);
    resize_rgba(&square, size, size)
}
