use std::error::Error;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shift_wage_engine::api::{AppState, create_router};
use shift_wage_engine::config::ConfigLoader;
use shift_wage_engine::store::open_store;

const CONFIG_ENV: &str = "SHIFT_WAGE_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    if config_path.is_none() {
        info!("No configuration file given, using defaults");
    }
    let config = ConfigLoader::load_or_default(config_path.as_deref())?.into_config();

    let store = open_store(&config.storage)?;
    let addr = config.server.bind_address();
    let app = create_router(AppState::new(store, config));

    let listener = TcpListener::bind(&addr).await?;
    info!(listen_addr = %addr, "Starting shift wage server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutting down");
}
