use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pacing::{analyze_batch, config::Config, file_parsers::parse_trials_file};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env(std::env::args().nth(1))?;

    info!("Reading trials from {}", config.input.display());
    let trials = parse_trials_file(&config.input)?;

    let mut report = analyze_batch(&trials)?;
    if let Some(athlete) = &config.athlete {
        report.retain_athlete(athlete);
        info!("Reporting {} trials of {athlete}", report.trials.len());
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
