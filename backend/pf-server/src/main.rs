use pf_server::{AppState, build_router, logger, services};
use pf_store::ProjectRepository;

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = pf_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = services::build_store(&config).await?;
    let auth = services::build_auth_provider(&config, store.clone())?;

    // Build application state
    let app_state = AppState {
        projects: ProjectRepository::new(store),
        auth,
        api_config: config.api.clone(),
        cors_config: config.cors.clone(),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!(
        "Server listening on {}/{}",
        actual_addr, config.api.route_prefix
    );

    // Spawn signal handler for graceful shutdown
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
