use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use backoffice_api::{build_router, AppState};
use backoffice_core::repositories::MenuRepository;
use backoffice_infrastructure::create_menu_repository;
use backoffice_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    backoffice_shared::telemetry::init_telemetry("info,backoffice_server=debug,tower_http=debug");

    info!("Back-office server starting...");

    // Load configuration (.env is read inside)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Menu store
    let menu_repo: Arc<dyn MenuRepository> = Arc::new(create_menu_repository(&config.catalog));
    info!(
        "Menu store ready (simulated latency {}ms)",
        config.catalog.simulated_latency_ms
    );

    // Create App State
    let state = AppState::new(menu_repo, config.clone());
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Back-office server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
