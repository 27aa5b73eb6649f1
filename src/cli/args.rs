use clap::Parser;
use std::path::PathBuf;

use quadtile::core::params::DEFAULT_ASSETS_DIR;

#[derive(Parser, Debug)]
#[command(
    name = "quadtile",
    version,
    about = "Split o.png and logo.png into square quadrant tiles"
)]
pub struct CliArgs {
    /// Directory holding the source images; tiles are written next to them
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Also write a JSON summary of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
