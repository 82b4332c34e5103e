use std::fs::File;
use std::io::{self, BufReader};

use nearby_customers::config::Config;
use nearby_customers::engine::filter::filter_within_radius;
use nearby_customers::engine::shard::{filter_sharded, read_lines};
use nearby_customers::error::AppError;
use nearby_customers::report;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(err) = run(&config).await {
        tracing::error!(error = %err, input = %config.input_path.display(), "filter failed");
        return Err(err);
    }

    Ok(())
}

async fn run(config: &Config) -> Result<(), AppError> {
    let reference = config.reference();
    let file = File::open(&config.input_path)?;
    let reader = BufReader::new(file);

    tracing::info!(
        input = %config.input_path.display(),
        radius_km = config.radius_km,
        workers = config.workers,
        "filtering customers"
    );

    let mut customers = if config.workers > 1 {
        let lines = read_lines(reader)?;
        filter_sharded(lines, reference, config.radius_km, config.workers).await?
    } else {
        filter_within_radius(reader, &reference, config.radius_km)?
    };

    report::sort_by_id(&mut customers);
    report::write_report(io::stdout().lock(), &customers)?;

    Ok(())
}
