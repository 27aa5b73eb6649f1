#![doc = r#"
quadtile — split source images into square quadrant tiles.

Each source image is divided at its floor midpoints into four quadrants
(1: top-left, 2: top-right, 3: bottom-left, 4: bottom-right). Every quadrant
is center-cropped to a square, resampled with Lanczos3 to a fixed edge
length, and written as `<prefix>_<index>_<size>.png`.

The `quadtile` binary runs the fixed job table [`DEFAULT_JOBS`] against
`assets/`. The library exposes the same steps for embedding.

Quick start: run the job table
------------------------------
```rust,no_run
use std::path::Path;
use quadtile::{process_jobs, DEFAULT_JOBS};

fn main() -> quadtile::Result<()> {
    let report = process_jobs(Path::new("assets"), &DEFAULT_JOBS)?;
    println!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Tile an in-memory image
-----------------------
```rust
use image::{Rgba, RgbaImage};
use quadtile::tile_image;

fn main() -> quadtile::Result<()> {
    let img = RgbaImage::from_pixel(101, 99, Rgba([0, 0, 0, 255]));
    for (quadrant, tile) in tile_image(&img, 58)? {
        assert_eq!(tile.dimensions(), (58, 58));
        println!("quadrant {} ok", quadrant.index());
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `quadtile::Result<T>`. A missing source file is
not an error: [`process_file`] logs a warning and returns `Ok(None)`.

Useful modules
--------------
- [`api`] — high-level entry points and `BatchReport`.
- [`core`] — quadrant geometry, square crop, resampling.
- [`io`] — RGBA loading and PNG writing.
- [`types`] — `Quadrant` and `PixelBox`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{DEFAULT_ASSETS_DIR, DEFAULT_JOBS, TileJob};
pub use error::{Error, Result};
pub use types::{PixelBox, Quadrant};

// Geometry helpers
pub use crate::core::processing::pipeline::to_square_and_resize;
pub use crate::core::processing::quadrants::{quadrant_box, split_quadrants};
pub use crate::core::processing::square::{center_crop_square, center_square_box};

// High-level API re-exports
pub use api::{
    BatchReport, output_file_name, process_file, process_jobs, tile_image, write_report,
};
