use marketplace_backend::{
    config::{get_config, init_config},
    database::{
        pool::{create_pool, run_migrations},
        repository::PgRepository,
    },
    routes,
    utils::logging,
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    logging::init(config.log_format);

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;

    let app_state = AppState::new(Arc::new(PgRepository::new(pool)));
    let app = routes::router(app_state, config.public_rps);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
