//! Fitness Tracker - Workout Metrics Calculator
//!
//! Main entry point. Processes the configured sensor packages and prints
//! one line per package. An optional first argument names a config file.

use fitness_tracker::storage::config::{
    get_config_path, load_config, load_config_from, save_config, OutputFormat,
};
use fitness_tracker::workouts::session::run_packages;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Fitness Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config_from(&PathBuf::from(path))?,
        None => {
            let config = load_config()?;
            // Write the defaults once so the packages can be edited
            if !get_config_path().exists() {
                save_config(&config)?;
                tracing::info!("Wrote default config to {}", get_config_path().display());
            }
            config
        }
    };

    for outcome in run_packages(&config.packages) {
        match config.output {
            OutputFormat::Text => println!("{}", outcome),
            OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
        }
    }

    Ok(())
}
