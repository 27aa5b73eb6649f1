use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to write report to {path:?}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: quadtile::Error,
    },

    #[error(transparent)]
    Tiles(#[from] quadtile::Error),
}
