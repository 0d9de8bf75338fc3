use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use addressbook_api::auth::CredentialService;
use addressbook_api::config::AppConfig;
use addressbook_api::database::{DatabaseManager, PgStore};
use addressbook_api::router;
use addressbook_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("addressbook_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!("Starting Address Book API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    DatabaseManager::apply_schema(&pool, &config.database.schema_path).await;

    let credentials = Arc::new(
        CredentialService::from_config(&config.security).context("invalid security configuration")?,
    );
    let state = AppState::new(Arc::new(PgStore::new(pool.clone())), credentials);
    let app = router::app(state, &config.security.cors_origins);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Address Book API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(pool).await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
