use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Default directory holding both the source images and the generated tiles.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// One source image and how its quadrant tiles are named and sized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileJob {
    /// Source file name, relative to the assets directory
    pub input: Cow<'static, str>,
    /// Output file name prefix
    pub prefix: Cow<'static, str>,
    /// Edge length of every square output tile, in pixels
    pub size: u32,
}

impl TileJob {
    pub const fn new_static(input: &'static str, prefix: &'static str, size: u32) -> Self {
        Self {
            input: Cow::Borrowed(input),
            prefix: Cow::Borrowed(prefix),
            size,
        }
    }

    pub fn new(input: impl Into<String>, prefix: impl Into<String>, size: u32) -> Self {
        Self {
            input: Cow::Owned(input.into()),
            prefix: Cow::Owned(prefix.into()),
            size,
        }
    }
}

/// The fixed job table processed by the binary.
pub const DEFAULT_JOBS: [TileJob; 2] = [
    TileJob::new_static("o.png", "o", 58),
    TileJob::new_static("logo.png", "logo", 112),
];
