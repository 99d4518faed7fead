use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_tracker::cache::CachedVoyageFetcher;
use train_tracker::config::AppConfig;
use train_tracker::domain::carrier;
use train_tracker::fetcher::{FetcherRegistry, HzppVoyageFetcher};
use train_tracker::transport::ReqwestTransport;
use train_tracker::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("train_tracker=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Create HTTP transport shared by all carriers
    let transport = Arc::new(ReqwestTransport::new(config.transport.clone())?);

    // Create cached HŽ fetcher
    let hzpp = HzppVoyageFetcher::new(transport, config.hzpp.clone());
    let cached_hzpp = CachedVoyageFetcher::new(hzpp, &config.cache);

    let registry = FetcherRegistry::new().register(Arc::new(cached_hzpp));
    info!(carriers = ?registry.codes(), "registered fetchers");

    // Build app state and router
    let state = AppState::new(registry, carrier::HZPP);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Train tracker listening on http://{}", config.bind);
    info!("  GET  /health            - Health check");
    info!("  GET  /:carrier          - Carrier info");
    info!("  GET  /:carrier/:voyage  - Current position of a voyage");

    axum::serve(listener, app).await?;
    Ok(())
}
