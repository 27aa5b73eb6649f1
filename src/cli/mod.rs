//! Command Line Interface (CLI) layer for quadtile.
//!
//! This module defines argument parsing (`args`), CLI-only errors (`errors`),
//! and the orchestration logic (`runner`). It wires the few user-facing
//! options to the library functionality exposed via `quadtile::api`.
//!
//! If you are embedding quadtile into another application, prefer using the
//! high-level `quadtile::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
