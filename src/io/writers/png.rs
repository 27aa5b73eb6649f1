use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};

/// Write an RGBA8 tile as PNG, replacing any existing file at `output`.
pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let (width, height) = img.dimensions();
    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn written_png_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([9, 8, 7, 128]));
        img.put_pixel(4, 0, Rgba([255, 0, 0, 0]));

        write_rgba_png(&path, &img).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn overwrites_existing_tile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.png");
        write_rgba_png(&path, &RgbaImage::new(2, 2)).unwrap();
        write_rgba_png(&path, &RgbaImage::new(3, 3)).unwrap();
        assert_eq!(image::open(&path).unwrap().to_rgba8().dimensions(), (3, 3));
    }

    #[test]
    fn missing_parent_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("t.png");
        assert!(matches!(
            write_rgba_png(&path, &RgbaImage::new(2, 2)),
            Err(Error::Io(_))
        ));
    }
}
