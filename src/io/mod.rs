//! I/O layer: loading source images as RGBA8 and writing PNG tiles.
pub mod load;
pub use load::load_rgba;

pub mod writers;
