//! quadtile CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the fixed job table
//! against the assets directory, and exit with the appropriate status.
//! For programmatic use, prefer the library API (`quadtile::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
