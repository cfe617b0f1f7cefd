use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_parser::{
    config::{Config, LogFormat},
    services::batch,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Логи в stderr, stdout только под NDJSON
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log));
    match config.app.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }

    info!("Starting seat label parser");

    let stdout = io::stdout().lock();
    let summary = match &config.parser.input_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!("Reading labels from {}", path.display());
            batch::parse_lines(BufReader::new(file), stdout, config.parser.start_id)?
        }
        None => {
            info!("Reading labels from stdin");
            batch::parse_lines(io::stdin().lock(), stdout, config.parser.start_id)?
        }
    };

    if summary.rejected > 0 {
        info!("{} of {} labels could not be parsed", summary.rejected, summary.total);
    }

    Ok(())
}
