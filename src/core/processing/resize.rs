use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resize an RGBA8 image to exactly `target_cols` x `target_rows` using a
/// Lanczos3 convolution. Alpha is premultiplied for the duration of the
/// convolution so transparent pixels do not bleed color into their
/// neighbours.
pub fn resize_rgba(img: &RgbaImage, target_cols: u32, target_rows: u32) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::DegenerateImage {
            width: cols,
            height: rows,
        });
    }
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::ZeroSize {
            size: target_cols.min(target_rows),
        });
    }

    debug!(
        "Resizing {}x{} -> {}x{} (Lanczos3)",
        cols, rows, target_cols, target_rows
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, img.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec()).ok_or_else(|| {
        Error::Resize(format!(
            "resized buffer does not match {}x{} RGBA",
            target_cols, target_rows
        ))
    })
}
