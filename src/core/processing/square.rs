use image::RgbaImage;
use image::imageops::crop_imm;
use tracing::debug;

use crate::types::PixelBox;

/// Largest square centered in a `width` x `height` image.
///
/// The trimmed margin on each axis is `(dim - side) / 2`, so an odd leftover
/// pixel is dropped from the right/bottom edge.
pub fn center_square_box(width: u32, height: u32) -> PixelBox {
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    PixelBox::new(left, top, side, side)
}

/// Center-crop `img` to a square. Already-square images are returned as a copy.
pub fn center_crop_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if PixelBox::new(0, 0, width, height).is_square() {
        return img.clone();
    }

    let b = center_square_box(width, height);
    debug!(
        "Center crop: {}x{} -> {}x{} (left={}, top={})",
        width, height, b.width, b.height, b.x, b.y
    );
    crop_imm(img, b.x, b.y, b.width, b.height).to_image()
}
