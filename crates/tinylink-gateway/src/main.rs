mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;
mod telemetry;

use crate::app::App;
use crate::cli::{GeneratorArg, CLI};
use crate::state::AppState;
use std::sync::Arc;
use tinylink_core::Shortener;
use tinylink_generator::{Base62Generator, SeqGenerator};
use tinylink_shortener::{ShortenerService, ShortenerSettings};
use tinylink_storage::InMemoryRepository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::load().unwrap_or_else(|err| err.exit());
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        generator = %config.generator,
        max_attempts = config.max_attempts,
        "starting tinylink server"
    );

    let settings = ShortenerSettings::builder()
        .base_url(config.base_url)
        .max_attempts(config.max_attempts)
        .build();

    let shortener: Arc<dyn Shortener> = match config.generator {
        GeneratorArg::Random => Arc::new(ShortenerService::new(
            InMemoryRepository::new(),
            Base62Generator::new(),
            settings,
        )),
        GeneratorArg::Seq => Arc::new(ShortenerService::new(
            InMemoryRepository::new(),
            SeqGenerator::new(),
            settings,
        )),
    };

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(AppState::new(shortener)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
