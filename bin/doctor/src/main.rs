//! Operational checks for a tma-shell deployment.
//!
//! Two modes, selected by the first argument:
//! - `bootstrap`: run one live session bootstrap attempt against the
//!   configured server and report the typed outcome. Navigation is logged
//!   instead of performed; the doctor has no page to replace.
//! - `style`: regenerate the stylesheet from the configured content
//!   directory.

mod config;

use config::DoctorConfig;
use std::path::Path;
use std::process::ExitCode;
use tma_shell_bootstrap::{
    BootstrapConfig, BootstrapOutcome, Bootstrapper, HttpTransport, Navigator,
};
use tma_shell_platform::StaticPlatform;
use tma_shell_style::{IconEncoding, stylesheet::write_stylesheet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs the transition a real host would perform.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn replace_location(&self, path: &str) {
        tracing::info!(path, "would navigate");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DoctorConfig::from_env().expect("failed to load configuration");

    let mode = std::env::args().nth(1).unwrap_or_default();
    match mode.as_str() {
        "bootstrap" => run_bootstrap(config).await,
        "style" => run_style(&config),
        other => {
            eprintln!("usage: tma-shell-doctor <bootstrap|style> (got {other:?})");
            ExitCode::from(64)
        }
    }
}

async fn run_bootstrap(config: DoctorConfig) -> ExitCode {
    tracing::info!(base_url = %config.base_url, "running bootstrap check");

    let bootstrapper = Bootstrapper::new(
        StaticPlatform::new(config.init_data),
        HttpTransport::new(),
        LoggingNavigator,
        BootstrapConfig::new(config.base_url),
    );

    match bootstrapper.run().await {
        Ok(record) => {
            tracing::info!(
                attempt = %record.attempt,
                outcome = %record.outcome,
                latency_ms = record.latency_ms,
                "bootstrap attempt finished"
            );
            match record.outcome {
                BootstrapOutcome::Authenticated => ExitCode::SUCCESS,
                BootstrapOutcome::Rejected => ExitCode::from(2),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "bootstrap attempt failed");
            ExitCode::FAILURE
        }
    }
}

fn run_style(config: &DoctorConfig) -> ExitCode {
    let content_dir = Path::new(&config.content_dir);
    let out_path = Path::new(&config.stylesheet_path);
    tracing::info!(
        content_dir = %content_dir.display(),
        out = %out_path.display(),
        "generating stylesheet"
    );

    match write_stylesheet(content_dir, IconEncoding::Utf8, out_path) {
        Ok(()) => {
            tracing::info!("stylesheet written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "stylesheet generation failed");
            ExitCode::FAILURE
        }
    }
}
