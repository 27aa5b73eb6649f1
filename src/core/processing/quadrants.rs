use image::RgbaImage;
use image::imageops::crop_imm;
use tracing::debug;

use crate::types::{PixelBox, Quadrant};

/// Box of `quadrant` inside a `width` x `height` image.
///
/// Both axes are split at their floor midpoint, so for odd dimensions the
/// extra column goes to the right quadrants and the extra row to the bottom
/// ones.
pub fn quadrant_box(width: u32, height: u32, quadrant: Quadrant) -> PixelBox {
    let cx = width / 2;
    let cy = height / 2;

    let (x, w) = if quadrant.is_right() {
        (cx, width - cx)
    } else {
        (0, cx)
    };
    let (y, h) = if quadrant.is_bottom() {
        (cy, height - cy)
    } else {
        (0, cy)
    };

    PixelBox::new(x, y, w, h)
}

/// All four quadrant boxes in index order.
pub fn quadrant_boxes(width: u32, height: u32) -> [(Quadrant, PixelBox); 4] {
    Quadrant::ALL.map(|q| (q, quadrant_box(width, height, q)))
}

/// Split `img` into its four quadrant sub-images, ordered 1..=4.
pub fn split_quadrants(img: &RgbaImage) -> [(Quadrant, RgbaImage); 4] {
    let (width, height) = img.dimensions();
    quadrant_boxes(width, height).map(|(q, b)| {
        debug!(
            "Quadrant {} ({}): {}x{} at ({}, {})",
            q.index(),
            q,
            b.width,
            b.height,
            b.x,
            b.y
        );
        (q, crop_imm(img, b.x, b.y, b.width, b.height).to_image())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn assert_exact_tiling(width: u32, height: u32) {
        let boxes = quadrant_boxes(width, height);
        let total: u64 = boxes.iter().map(|(_, b)| b.area()).sum();
        assert_eq!(total, u64::from(width) * u64::from(height));

        for y in 0..height {
            for x in 0..width {
                let hits = boxes.iter().filter(|(_, b)| b.contains(x, y)).count();
                assert_eq!(hits, 1, "pixel ({x}, {y}) of {width}x{height}");
            }
        }
    }

    #[test]
    fn boxes_tile_image_without_gaps_or_overlap() {
        for (w, h) in [(100, 100), (101, 99), (1, 1), (2, 3), (7, 4), (33, 64)] {
            assert_exact_tiling(w, h);
        }
    }

    #[test]
    fn even_image_splits_into_equal_quadrants() {
        for (_, b) in quadrant_boxes(100, 100) {
            assert_eq!((b.width, b.height), (50, 50));
        }
    }

    #[test]
    fn odd_extra_goes_bottom_right() {
        let boxes = quadrant_boxes(101, 99);
        assert_eq!(boxes[0].1, PixelBox::new(0, 0, 50, 49));
        assert_eq!(boxes[1].1, PixelBox::new(50, 0, 51, 49));
        assert_eq!(boxes[2].1, PixelBox::new(0, 49, 50, 50));
        assert_eq!(boxes[3].1, PixelBox::new(50, 49, 51, 50));
    }

    #[test]
    fn split_copies_the_right_pixels() {
        let mut img = RgbaImage::new(4, 4);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgba([x as u8, y as u8, 0, 255]);
        }

        let quads = split_quadrants(&img);
        let order: Vec<u8> = quads.iter().map(|(q, _)| q.index()).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);

        let (_, bottom_right) = &quads[3];
        assert_eq!(bottom_right.dimensions(), (2, 2));
        assert_eq!(bottom_right.get_pixel(0, 0), &Rgba([2, 2, 0, 255]));
        assert_eq!(bottom_right.get_pixel(1, 1), &Rgba([3, 3, 0, 255]));
    }
}
