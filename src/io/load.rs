use std::path::Path;

use image::{GenericImageView, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Load an image from disk and normalize it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    debug!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        width,
        height,
        img.color()
    );

    Ok(img.to_rgba8())
}
