use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadtile::api::{process_jobs, write_report};
use quadtile::core::params::DEFAULT_JOBS;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("quadtile={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);
    debug!("{:?}", args);

    // a missing or non-directory assets path skips every job
    let report = process_jobs(&args.assets_dir, &DEFAULT_JOBS).map_err(AppError::from)?;

    if let Some(path) = &args.report {
        write_report(&report, path).map_err(|source| AppError::Report {
            path: path.clone(),
            source,
        })?;
        debug!("Report written to {:?}", path);
    }

    Ok(())
}
