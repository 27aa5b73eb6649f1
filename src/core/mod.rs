//! Core tiling building blocks: the job table, quadrant geometry, square
//! cropping, resampling, and the per-quadrant pipeline. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
