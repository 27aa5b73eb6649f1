//! Crate-level error type and `Result` alias.
//! Wraps image codec, I/O, and resampler failures, plus semantic variants for
//! inputs the tiling pipeline cannot handle.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Image {width}x{height} is too small to split into quadrants")]
    DegenerateImage { width: u32, height: u32 },

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<fast_image_resize::ResizeError> for Error {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Error::Resize(e.to_string())
    }
}

impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Error::Resize(e.to_string())
    }
}
