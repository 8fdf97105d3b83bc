//! Default seed script - writes a CSV of synthetic split trials
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! `SEED_ATHLETES`, `SEED_RNG` and `SEED_OUTPUT` override the defaults.

use std::fs::File;
use std::io::BufWriter;

use rand::{SeedableRng, rngs::StdRng};
use test_data::builders::ScenarioBuilder;
use test_data::config::SeedConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let file = BufWriter::new(File::create(&config.output)?);
    let result = ScenarioBuilder::from_config(&config)
        .with_metrics(true)
        .build(file, &mut rng)?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Output: {}", config.output.display());
    tracing::info!("  Athletes: {}", result.athletes.len());
    tracing::info!("  Trials: {}", result.trials.len());
    if let Some(metrics) = &result.metrics {
        tracing::info!(
            "  Took {}ms generating, {}ms writing",
            metrics.generation_time_ms,
            metrics.writing_time_ms
        );
    }

    Ok(())
}
