//! High-level library API: process one tile job into a directory, or run a
//! whole job table and get a `BatchReport` back. Prefer these entrypoints over
//! the low-level `core` modules when embedding quadtile.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::TileJob;
use crate::core::processing::pipeline::to_square_and_resize;
use crate::core::processing::quadrants::split_quadrants;
use crate::error::{Error, Result};
use crate::io::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::Quadrant;

/// Summary of a driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Absolute assets directory the run read from and wrote to
    pub assets_dir: PathBuf,
    /// Jobs whose source existed and produced tiles
    pub processed: usize,
    /// Jobs skipped because their source file was missing
    pub skipped: usize,
    /// Every tile written, in write order
    pub written: Vec<PathBuf>,
}

/// `<prefix>_<index>_<size>.png`
pub fn output_file_name(prefix: &str, quadrant: Quadrant, size: u32) -> String {
    format!("{}_{}_{}.png", prefix, quadrant.index(), size)
}

/// Split an in-memory image into its four normalized tiles (no disk I/O).
pub fn tile_image(img: &RgbaImage, size: u32) -> Result<Vec<(Quadrant, RgbaImage)>> {
    let (width, height) = img.dimensions();
    if width < 2 || height < 2 {
        return Err(Error::DegenerateImage { width, height });
    }

    split_quadrants(img)
        .into_iter()
        .map(|(q, quad)| Ok((q, to_square_and_resize(&quad, size)?)))
        .collect()
}

/// Process one job: load `assets_dir/job.input`, tile it, and write the four
/// tiles next to it.
///
/// A missing source is not an error: it is logged and `Ok(None)` is returned
/// so the caller can carry on with the remaining jobs.
pub fn process_file(assets_dir: &Path, job: &TileJob) -> Result<Option<Vec<PathBuf>>> {
    let src_path = assets_dir.join(&*job.input);
    if !src_path.exists() {
        warn!("{} not found, skipping", src_path.display());
        return Ok(None);
    }

    let img = load_rgba(&src_path)?;
    debug!(
        "Tiling {} ({}x{}) into {}px tiles",
        src_path.display(),
        img.width(),
        img.height(),
        job.size
    );

    let mut written = Vec::with_capacity(Quadrant::ALL.len());
    for (quadrant, tile) in tile_image(&img, job.size)? {
        let out_path = assets_dir.join(output_file_name(&job.prefix, quadrant, job.size));
        write_rgba_png(&out_path, &tile)?;
        info!("-> {}", out_path.display());
        written.push(out_path);
    }

    Ok(Some(written))
}

/// Run every job in order against `assets_dir`. The first hard failure aborts
/// the run; missing sources only bump `skipped`.
pub fn process_jobs(assets_dir: &Path, jobs: &[TileJob]) -> Result<BatchReport> {
    let resolved = std::path::absolute(assets_dir)?;
    info!("Assets directory: {}", resolved.display());

    let mut report = BatchReport {
        assets_dir: resolved,
        ..BatchReport::default()
    };

    for job in jobs {
        match process_file(assets_dir, job)? {
            Some(paths) => {
                report.processed += 1;
                report.written.extend(paths);
            }
            None => report.skipped += 1,
        }
    }

    info!(
        "All done: {} processed, {} skipped, {} tiles written",
        report.processed,
        report.skipped,
        report.written.len()
    );
    Ok(report)
}

/// Write `report` as pretty-printed JSON.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
