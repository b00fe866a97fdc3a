use std::process::ExitCode;

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trello_lights::config::Config;
use trello_lights::services::Orchestrator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Loaded before logging is set up so RUST_LOG may come from .env too.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,trello_lights=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting trello-lights v{}", env!("CARGO_PKG_VERSION"));

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env file"),
    }

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "Refusing to run without configuration");
        anyhow::Error::new(e)
    })?;
    tracing::debug!(?config, "Configuration loaded");

    let orchestrator = Orchestrator::from_config(&config, reqwest::Client::new());
    let outcome = orchestrator.run(Local::now().date_naive()).await;

    println!("{}", outcome.message());

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
