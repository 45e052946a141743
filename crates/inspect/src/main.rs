//! `marquee-inspect` -- decode captured movie listing payloads.
//!
//! Reads one or more JSON files saved from the catalog service, decodes each
//! against the listing contract, and logs a summary per file. Exits with
//! status 1 if any file fails to decode.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default  | Description                                  |
//! |-------------------|----------|----------|----------------------------------------------|
//! | `MOVIE_PAGE_PATH` | no       | --       | Payload file used when no arguments are given |
//! | `LOG_FORMAT`      | no       | `pretty` | `pretty` or `json`                           |
//! | `RUST_LOG`        | no       | `marquee_inspect=info,marquee_core=info` | Tracing filter |

use marquee_inspect::config::{InspectConfig, LogFormat};
use marquee_inspect::inspect;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marquee_inspect=info,marquee_core=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

fn main() {
    dotenvy::dotenv().ok();

    let config = match InspectConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!(error = %format!("{e:#}"), "Invalid configuration");
            std::process::exit(2);
        }
    };

    init_tracing(config.log_format);
    tracing::info!(files = config.page_paths.len(), "Starting marquee-inspect");

    let report = inspect::run(&config.page_paths);
    if !report.is_success() {
        std::process::exit(1);
    }
}
